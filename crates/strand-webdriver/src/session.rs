use crate::provider::WebDriverRoot;
use fantoccini::{Client, ClientBuilder};
use std::sync::Arc;
use strand_core::Selection;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to connect to WebDriver at {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Failed to close session: {0}")]
    Close(String),
}

/// A WebDriver session that selections can be rooted at.
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    pub async fn connect(
        url: &str,
        capabilities: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Result<Self, SessionError> {
        let mut caps = serde_json::Map::new();

        // User capabilities are passed through untouched
        if let Some(user_caps) = capabilities {
            for (k, v) in user_caps {
                caps.insert(k, v);
            }
        }

        info!("Connecting to WebDriver at {}...", url);
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(url)
            .await
            .map_err(|e| SessionError::Connect {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }

    pub async fn goto(&self, url: &str) -> Result<(), SessionError> {
        info!("Navigating to: {}", url);
        self.client
            .goto(url)
            .await
            .map_err(|e| SessionError::Navigation(e.to_string()))
    }

    /// Root provider scoped to the current document.
    pub fn root(&self) -> Arc<WebDriverRoot> {
        Arc::new(WebDriverRoot::new(self.client.clone()))
    }

    /// An empty selection rooted at the current document.
    pub fn selection(&self) -> Selection<WebDriverRoot> {
        Selection::new(self.root())
    }

    pub async fn close(self) -> Result<(), SessionError> {
        self.client
            .close()
            .await
            .map_err(|e| SessionError::Close(e.to_string()))
    }
}
