//! A chain bound to the root provider it resolves against.
//!
//! `Selection` mirrors the [`Chain`] builder and adds the consumers that read
//! from or act on the resolved elements. Each call re-resolves the chain.

use crate::chain::Chain;
use crate::criterion::Strategy;
use crate::error::{Error, ProviderError};
use crate::guard::{select_multiple, select_one};
use crate::provider::{ElementHandle, ElementProvider};
use crate::resolver::resolve;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub struct Selection<P: ElementProvider + ?Sized> {
    root: Arc<P>,
    chain: Chain,
}

impl<P: ElementProvider + ?Sized> Clone for Selection<P> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            chain: self.chain.clone(),
        }
    }
}

impl<P: ElementProvider + ?Sized> fmt::Debug for Selection<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

impl<P: ElementProvider + ?Sized> fmt::Display for Selection<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl<P: ElementProvider + ?Sized> Selection<P> {
    /// An empty selection rooted at `root`.
    pub fn new(root: Arc<P>) -> Self {
        Self::with_chain(root, Chain::new())
    }

    pub fn with_chain(root: Arc<P>, chain: Chain) -> Self {
        Self { root, chain }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn root(&self) -> &Arc<P> {
        &self.root
    }

    fn derive(&self, chain: Chain) -> Self {
        Self {
            root: Arc::clone(&self.root),
            chain,
        }
    }

    pub fn extend(&self, strategy: Strategy, value: &str) -> Self {
        self.derive(self.chain.extend(strategy, value))
    }

    pub fn find(&self, selector: &str) -> Self {
        self.derive(self.chain.find(selector))
    }

    pub fn find_xpath(&self, selector: &str) -> Self {
        self.derive(self.chain.find_xpath(selector))
    }

    pub fn find_link(&self, text: &str) -> Self {
        self.derive(self.chain.find_link(text))
    }

    pub fn find_by_label(&self, text: &str) -> Self {
        self.derive(self.chain.find_by_label(text))
    }

    pub fn at(&self, index: usize) -> Self {
        self.derive(self.chain.at(index))
    }

    pub fn all(&self) -> Self {
        self.derive(self.chain.all())
    }

    /// Exactly one element, see [`select_one`].
    pub async fn element(&self) -> Result<P::Handle, Error> {
        select_one(self.root.as_ref(), &self.chain).await
    }

    /// One or more elements, see [`select_multiple`].
    pub async fn elements(&self) -> Result<Vec<P::Handle>, Error> {
        select_multiple(self.root.as_ref(), &self.chain).await
    }

    /// Number of elements the chain currently resolves to. Zero is a valid
    /// count and All mode is not required.
    pub async fn count(&self) -> Result<usize, Error> {
        resolve(self.root.as_ref(), &self.chain)
            .await
            .map(|elements| elements.len())
            .map_err(|source| Error::Elements {
                selection: self.to_string(),
                source,
            })
    }

    /// Whether both selections resolve to the same single element.
    pub async fn equals(&self, other: &Selection<P>) -> Result<bool, Error> {
        let element = self.element().await?;
        self.compare(&element, other).await
    }

    async fn compare(&self, element: &P::Handle, other: &Selection<P>) -> Result<bool, Error> {
        let other_element = other.element().await?;
        element
            .is_equal_to(&other_element)
            .await
            .map_err(|source| Error::Compare {
                selection: self.to_string(),
                other: other.to_string(),
                source,
            })
    }

    pub async fn text(&self) -> Result<String, Error> {
        let element = self.element().await?;
        element.text().await.map_err(|source| Error::Text {
            selection: self.to_string(),
            source,
        })
    }

    /// Attribute value of the single selected element; absent reads as "".
    pub async fn attribute(&self, name: &str) -> Result<String, Error> {
        let element = self.element().await?;
        element
            .attribute(name)
            .await
            .map(Option::unwrap_or_default)
            .map_err(|source| self.property_error("attribute", source))
    }

    pub async fn css(&self, property: &str) -> Result<String, Error> {
        let element = self.element().await?;
        element
            .css_value(property)
            .await
            .map_err(|source| self.property_error("CSS property", source))
    }

    fn property_error(&self, property: &'static str, source: ProviderError) -> Error {
        Error::Property {
            property,
            selection: self.to_string(),
            source,
        }
    }

    pub async fn selected(&self) -> Result<bool, Error> {
        self.has_state(ElementState::Selected).await
    }

    pub async fn visible(&self) -> Result<bool, Error> {
        self.has_state(ElementState::Visible).await
    }

    pub async fn enabled(&self) -> Result<bool, Error> {
        self.has_state(ElementState::Enabled).await
    }

    /// True iff every selected element is in `state`. Stops at the first
    /// element that is not, or whose check fails.
    async fn has_state(&self, state: ElementState) -> Result<bool, Error> {
        let elements = self.elements().await?;
        for element in &elements {
            let pass = state.check(element).await.map_err(|source| Error::State {
                state: state.name(),
                selection: self.to_string(),
                source,
            })?;
            if !pass {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub async fn click(&self) -> Result<(), Error> {
        let element = self.element().await?;
        element.click().await.map_err(|source| Error::Click {
            selection: self.to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum ElementState {
    Selected,
    Visible,
    Enabled,
}

impl ElementState {
    fn name(&self) -> &'static str {
        match self {
            ElementState::Selected => "selected",
            ElementState::Visible => "visible",
            ElementState::Enabled => "enabled",
        }
    }

    async fn check<H: ElementHandle>(&self, element: &H) -> Result<bool, ProviderError> {
        match self {
            ElementState::Selected => element.is_selected().await,
            ElementState::Visible => element.is_displayed().await,
            ElementState::Enabled => element.is_enabled().await,
        }
    }
}

impl<P: ElementProvider + ?Sized + 'static> Selection<P> {
    /// Like [`Selection::equals`], for callers holding an arbitrary value.
    ///
    /// Fails with [`Error::NotComparable`] unless `other` is a selection over
    /// the same provider type.
    pub async fn equals_element(&self, other: &dyn Any) -> Result<bool, Error> {
        let element = self.element().await?;
        let other = other
            .downcast_ref::<Selection<P>>()
            .ok_or(Error::NotComparable)?;
        self.compare(&element, other).await
    }
}
