//! Immutable selector chains.
//!
//! Every builder method borrows the receiver and returns a fresh [`Chain`] with
//! its own copy of the criteria, so chains derived from a shared prefix never
//! observe each other's extensions.

use crate::criterion::{Criterion, Strategy};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Chain {
    criteria: Vec<Criterion>,
    accept_all: bool,
}

impl Chain {
    /// The empty chain. It cannot be resolved until a criterion is added.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Whether the chain may legally resolve to more than one element.
    pub fn accepts_all(&self) -> bool {
        self.accept_all
    }

    /// Appends an unindexed criterion.
    ///
    /// A CSS extension of a chain ending in an unindexed CSS criterion merges
    /// into that criterion with a descendant combinator instead of adding a
    /// new level.
    pub fn extend(&self, strategy: Strategy, value: &str) -> Self {
        match self.criteria.last() {
            Some(last) if strategy == Strategy::Css && last.is_mergeable_css() => {
                let merged = Criterion::css(format!("{} {}", last.value, value));
                self.replace_last(merged)
            }
            _ => self.push(Criterion::new(strategy, value)),
        }
    }

    pub fn find(&self, selector: &str) -> Self {
        self.extend(Strategy::Css, selector)
    }

    pub fn find_xpath(&self, selector: &str) -> Self {
        self.extend(Strategy::XPath, selector)
    }

    pub fn find_link(&self, text: &str) -> Self {
        self.extend(Strategy::LinkText, text)
    }

    /// Appends an XPath matching the input a label with exactly this
    /// (whitespace-normalized) text refers to, or an input nested in it.
    pub fn find_by_label(&self, text: &str) -> Self {
        let selector = format!(
            r#"//input[@id=(//label[normalize-space(text())="{0}"]/@for)] | //label[normalize-space(text())="{0}"]/input"#,
            text
        );
        self.find_xpath(&selector)
    }

    /// Narrows the last criterion to the element at `index`.
    ///
    /// On an empty chain this returns an unmodified copy.
    pub fn at(&self, index: usize) -> Self {
        match self.criteria.last() {
            Some(last) => self.replace_last(last.at(index)),
            None => self.clone(),
        }
    }

    /// Returns a copy that accepts resolving to multiple elements.
    pub fn all(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            accept_all: true,
        }
    }

    fn push(&self, criterion: Criterion) -> Self {
        let mut criteria = Vec::with_capacity(self.criteria.len() + 1);
        criteria.extend_from_slice(&self.criteria);
        criteria.push(criterion);
        Self {
            criteria,
            accept_all: self.accept_all,
        }
    }

    fn replace_last(&self, criterion: Criterion) -> Self {
        let prefix = &self.criteria[..self.criteria.len().saturating_sub(1)];
        let mut criteria = Vec::with_capacity(prefix.len() + 1);
        criteria.extend_from_slice(prefix);
        criteria.push(criterion);
        Self {
            criteria,
            accept_all: self.accept_all,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::describe::render(self))
    }
}
