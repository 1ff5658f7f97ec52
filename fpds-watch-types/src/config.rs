//! Configuration shared by the orchestrator and the portal connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Search endpoint of the public FPDS ezSearch portal.
pub const DEFAULT_PORTAL_BASE_URL: &str = "https://www.fpds.gov/ezsearch/fpdsportal";

/// Result template understood by the portal; selects the award table layout.
pub const DEFAULT_TEMPLATE_NAME: &str = "1.5.3";

/// Global configuration for a watch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Portal search endpoint, without the query string.
    pub portal_base_url: String,
    /// Value of the portal's `templateName` query parameter.
    pub template_name: String,
    /// Bound on loading one results page.
    pub page_timeout: Duration,
    /// Bound on waiting for a row's detail page to open and finish loading.
    ///
    /// Exceeding it aborts the whole run rather than skipping the row.
    pub detail_timeout: Duration,
    /// Pause after each search. Courtesy toward the portal; zero disables it.
    pub search_delay: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            portal_base_url: DEFAULT_PORTAL_BASE_URL.to_string(),
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            page_timeout: Duration::from_secs(60),
            detail_timeout: Duration::from_secs(60),
            search_delay: Duration::from_secs(5),
        }
    }
}
