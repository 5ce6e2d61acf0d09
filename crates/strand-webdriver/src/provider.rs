//! WebDriver-backed providers.
//!
//! The session root answers criteria with a document-wide element search and
//! every element answers with a search scoped to its descendants.

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, Locator};
use strand_core::{Criterion, ElementHandle, ElementProvider, ProviderError, Strategy};
use tracing::trace;

fn locator(criterion: &Criterion) -> Locator<'_> {
    match criterion.strategy {
        Strategy::Css => Locator::Css(&criterion.value),
        Strategy::XPath => Locator::XPath(&criterion.value),
        Strategy::LinkText => Locator::LinkText(&criterion.value),
    }
}

fn backend_error(err: CmdError) -> ProviderError {
    ProviderError::Backend(err.to_string())
}

fn wrap(elements: Vec<Element>) -> Vec<WebDriverElement> {
    elements.into_iter().map(WebDriverElement).collect()
}

/// Document root of a WebDriver session.
#[derive(Clone)]
pub struct WebDriverRoot {
    client: Client,
}

impl WebDriverRoot {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ElementProvider for WebDriverRoot {
    type Handle = WebDriverElement;

    async fn resolve_criterion(
        &self,
        criterion: &Criterion,
    ) -> Result<Vec<WebDriverElement>, ProviderError> {
        trace!(using = criterion.strategy.using(), value = %criterion.value, "find elements");
        self.client
            .find_all(locator(criterion))
            .await
            .map(wrap)
            .map_err(backend_error)
    }
}

/// A web element reference from a live session.
#[derive(Clone)]
pub struct WebDriverElement(Element);

impl WebDriverElement {
    pub fn inner(&self) -> &Element {
        &self.0
    }
}

#[async_trait]
impl ElementProvider for WebDriverElement {
    type Handle = WebDriverElement;

    async fn resolve_criterion(
        &self,
        criterion: &Criterion,
    ) -> Result<Vec<WebDriverElement>, ProviderError> {
        trace!(using = criterion.strategy.using(), value = %criterion.value, "find child elements");
        self.0
            .find_all(locator(criterion))
            .await
            .map(wrap)
            .map_err(backend_error)
    }
}

#[async_trait]
impl ElementHandle for WebDriverElement {
    // Web element references are unique per element within a session
    async fn is_equal_to(&self, other: &Self) -> Result<bool, ProviderError> {
        Ok(self.0.element_id() == other.0.element_id())
    }

    async fn text(&self) -> Result<String, ProviderError> {
        self.0.text().await.map_err(backend_error)
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, ProviderError> {
        self.0.attr(name).await.map_err(backend_error)
    }

    async fn css_value(&self, property: &str) -> Result<String, ProviderError> {
        self.0.css_value(property).await.map_err(backend_error)
    }

    async fn is_selected(&self) -> Result<bool, ProviderError> {
        self.0.is_selected().await.map_err(backend_error)
    }

    async fn is_displayed(&self) -> Result<bool, ProviderError> {
        self.0.is_displayed().await.map_err(backend_error)
    }

    async fn is_enabled(&self) -> Result<bool, ProviderError> {
        self.0.is_enabled().await.map_err(backend_error)
    }

    async fn click(&self) -> Result<(), ProviderError> {
        self.0.click().await.map_err(backend_error)
    }
}
