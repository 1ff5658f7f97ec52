use async_trait::async_trait;

use crate::{DisplayBlock, WatchError};

/// A search portal able to open one results session per search URL.
///
/// Each session owns whatever browsing context the implementation needs; the
/// detail pages a session spawns live until the session is closed.
#[async_trait]
pub trait Portal: Send + Sync {
    /// Human-readable portal name used in logs and error tagging.
    fn name(&self) -> &'static str;

    /// Load `url` and return the rendered results page once it has loaded.
    ///
    /// Callers bound this with their page timeout.
    async fn open(&self, url: &str) -> Result<Box<dyn ResultsPage>, WatchError>;
}

/// A loaded results page.
#[async_trait]
pub trait ResultsPage: Send + Sync {
    /// Result rows in DOM order. An empty vector is a normal outcome.
    async fn rows(&self) -> Result<Vec<Box<dyn ResultRow>>, WatchError>;

    /// Release the session, including any detail pages opened from it.
    async fn close(self: Box<Self>) -> Result<(), WatchError>;
}

/// One result row of a results page.
#[async_trait]
pub trait ResultRow: Send + Sync {
    /// Raw text of the cell immediately following the cell labeled `label`.
    ///
    /// Returns `Ok(None)` when no cell carries the label. The text is returned
    /// untrimmed.
    async fn labeled_value(&self, label: &str) -> Result<Option<String>, WatchError>;

    /// Activate the row's "(View)" link and resolve once the page it opens has
    /// finished loading.
    ///
    /// The page opens asynchronously relative to the click. This future is
    /// unbounded; callers wrap it in their detail timeout.
    async fn open_detail(&self) -> Result<Box<dyn DetailPage>, WatchError>;
}

/// A loaded detail page for one row.
#[async_trait]
pub trait DetailPage: Send + Sync {
    /// Current value of the form field matching `selector`, verbatim.
    ///
    /// Returns `Ok(None)` when no element matches.
    async fn field_value(&self, selector: &str) -> Result<Option<String>, WatchError>;
}

/// The posting endpoint that receives a finished report.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Human-readable notifier name used in logs.
    fn name(&self) -> &'static str;

    /// Deliver the report body.
    ///
    /// Implementations must report non-success responses as errors.
    async fn post(&self, blocks: &[DisplayBlock]) -> Result<(), WatchError>;
}
