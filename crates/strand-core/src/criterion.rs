use std::fmt;

/// How a criterion's value is interpreted by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Css,
    XPath,
    LinkText,
}

impl Strategy {
    /// Label used in diagnostic renderings.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Css => "CSS",
            Strategy::XPath => "XPath",
            Strategy::LinkText => "Link",
        }
    }

    /// W3C WebDriver locator strategy name.
    pub fn using(&self) -> &'static str {
        match self {
            Strategy::Css => "css selector",
            Strategy::XPath => "xpath",
            Strategy::LinkText => "link text",
        }
    }
}

/// One level of a selector chain.
///
/// An unindexed criterion matches every element satisfying `strategy` and
/// `value` at its level. An indexed one keeps only the element at `index`
/// among the candidates produced for that level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Criterion {
    pub strategy: Strategy,
    pub value: String,
    pub index: Option<usize>,
}

impl Criterion {
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
            index: None,
        }
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(Strategy::Css, value)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, value)
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        Self::new(Strategy::LinkText, value)
    }

    /// Returns a copy narrowed to the element at `index`.
    pub fn at(&self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self.clone()
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// True for criteria a following CSS extension may merge into.
    pub(crate) fn is_mergeable_css(&self) -> bool {
        self.strategy == Strategy::Css && !self.is_indexed()
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Strategy::LinkText => write!(f, "{}: \"{}\"", self.strategy.label(), self.value)?,
            _ => write!(f, "{}: {}", self.strategy.label(), self.value)?,
        }
        if let Some(index) = self.index {
            write!(f, " [{}]", index)?;
        }
        Ok(())
    }
}
