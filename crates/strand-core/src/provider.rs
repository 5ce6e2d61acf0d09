//! Provider abstraction
//!
//! The resolver only ever asks "resolve this criterion under you". Both the
//! document root (a browser session) and every element handle answer that
//! question, so resolution walks any depth without special cases.
//!
//! Implementations:
//! - WebDriver sessions and elements (`strand-webdriver`)
//! - Tests: mock providers that record the criteria they receive

use crate::criterion::Criterion;
use crate::error::ProviderError;
use async_trait::async_trait;

/// Anything that can resolve a criterion into the elements it scopes.
#[async_trait]
pub trait ElementProvider: Send + Sync {
    type Handle: ElementHandle;

    /// Returns the matching elements in document order, or fails.
    ///
    /// The criterion's index is applied by the resolver, not the provider.
    async fn resolve_criterion(
        &self,
        criterion: &Criterion,
    ) -> Result<Vec<Self::Handle>, ProviderError>;
}

/// A resolved remote element.
///
/// A handle is itself a provider scoped to its descendants. Everything past
/// `is_equal_to` is an optional capability used by the consumers on
/// [`crate::Selection`].
#[async_trait]
pub trait ElementHandle: ElementProvider<Handle = Self> + Sized {
    /// Identity comparison against another handle from the same session.
    async fn is_equal_to(&self, other: &Self) -> Result<bool, ProviderError>;

    /// Visible text of the element.
    async fn text(&self) -> Result<String, ProviderError> {
        Err(ProviderError::NotSupported("text".into()))
    }

    /// Attribute value, `None` when the attribute is absent.
    async fn attribute(&self, _name: &str) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::NotSupported("attribute".into()))
    }

    /// Computed CSS property value.
    async fn css_value(&self, _property: &str) -> Result<String, ProviderError> {
        Err(ProviderError::NotSupported("css_value".into()))
    }

    async fn is_selected(&self) -> Result<bool, ProviderError> {
        Err(ProviderError::NotSupported("is_selected".into()))
    }

    async fn is_displayed(&self) -> Result<bool, ProviderError> {
        Err(ProviderError::NotSupported("is_displayed".into()))
    }

    async fn is_enabled(&self) -> Result<bool, ProviderError> {
        Err(ProviderError::NotSupported("is_enabled".into()))
    }

    async fn click(&self) -> Result<(), ProviderError> {
        Err(ProviderError::NotSupported("click".into()))
    }
}
