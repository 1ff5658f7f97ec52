//! fpds-watch-teams
//!
//! `Notifier` implementation posting reports to a Microsoft Teams incoming
//! webhook as a single full-width adaptive card.
#![warn(missing_docs)]

/// Adaptive card wire types.
pub mod payload;

use async_trait::async_trait;
use fpds_watch_core::{DisplayBlock, Notifier, WatchError};
use url::Url;

pub use payload::WebhookMessage;

/// Posts report blocks to one webhook URL.
#[derive(Debug, Clone)]
pub struct TeamsWebhook {
    client: reqwest::Client,
    url: Url,
}

impl TeamsWebhook {
    /// Connector name used in logs.
    pub const NAME: &'static str = "fpds-watch-teams";

    /// Notifier for `url` using a default HTTP client.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Notifier for `url` sharing an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Parse `url` and build a notifier for it.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `url` is not an absolute http(s) URL.
    pub fn parse(url: &str) -> Result<Self, WatchError> {
        let parsed =
            Url::parse(url).map_err(|e| WatchError::InvalidArg(format!("webhook url '{url}': {e}")))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self::new(parsed)),
            other => Err(WatchError::InvalidArg(format!(
                "webhook url '{url}': unsupported scheme '{other}'"
            ))),
        }
    }

    /// Target URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Notifier for TeamsWebhook {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "fpds_watch::teams::post", skip(self, blocks), fields(blocks = blocks.len()))
    )]
    async fn post(&self, blocks: &[DisplayBlock]) -> Result<(), WatchError> {
        let message = WebhookMessage::from_blocks(blocks);
        let resp = self
            .client
            .post(self.url.clone())
            .json(&message)
            .send()
            .await
            .map_err(|e| WatchError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::info!(target: "fpds_watch::teams", status = status.as_u16(), "report posted");
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        #[cfg(feature = "tracing")]
        tracing::error!(target: "fpds_watch::teams", status = status.as_u16(), %body, "webhook rejected post");
        Err(WatchError::Webhook {
            status: status.as_u16(),
            body,
        })
    }
}
