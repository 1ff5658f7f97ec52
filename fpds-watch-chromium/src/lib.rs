//! fpds-watch-chromium
//!
//! Portal connector that implements `Portal` on top of a headless Chromium
//! driven through `chromiumoxide`. Every `open` launches a fresh browser, so
//! one search owns one browsing session; closing the results page closes the
//! browser together with every detail page the search opened.
#![warn(missing_docs)]

mod builder;
mod script;
mod session;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig};
use fpds_watch_core::{Portal, ResultsPage, WatchError};
use futures::StreamExt;
use tokio::sync::Mutex;

pub use builder::ChromiumPortalBuilder;
use session::ChromiumSession;

/// Public connector type. Production users construct it with `ChromiumPortal::builder()`.
#[derive(Debug, Clone)]
pub struct ChromiumPortal {
    headless: bool,
    sandbox: bool,
    executable: Option<PathBuf>,
    request_timeout: Duration,
}

pub(crate) fn portal_err<E: std::fmt::Display>(what: &'static str) -> impl FnOnce(E) -> WatchError {
    move |e| WatchError::portal(format!("{what}: {e}"))
}

impl ChromiumPortal {
    /// Connector name used in logs and error messages.
    pub const NAME: &'static str = "fpds-watch-chromium";

    fn browser_config(&self) -> Result<BrowserConfig, WatchError> {
        let mut builder = BrowserConfig::builder()
            .request_timeout(self.request_timeout)
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu")
            .arg("--disable-extensions");
        if !self.is_headless() {
            builder = builder.with_head();
        }
        if !self.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(bin) = &self.executable {
            builder = builder.chrome_executable(bin);
        }
        builder.build().map_err(|e| WatchError::portal(format!("browser config: {e}")))
    }

    async fn launch(&self) -> Result<(Browser, tokio::task::JoinHandle<()>), WatchError> {
        let config = self.browser_config()?;
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(portal_err("launch chromium"))?;

        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(_err) = event {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(target: "fpds_watch::chromium", error = %_err, "chromium handler event error");
                    break;
                }
            }
        });
        Ok((browser, events))
    }
}

#[async_trait]
impl Portal for ChromiumPortal {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "fpds_watch::chromium::open", skip(self), fields(headless = self.is_headless()))
    )]
    async fn open(&self, url: &str) -> Result<Box<dyn ResultsPage>, WatchError> {
        let (browser, events) = self.launch().await?;
        let browser = Arc::new(Mutex::new(browser));

        let page = {
            let guard = browser.lock().await;
            guard.new_page(url).await.map_err(portal_err("open results page"))?
        };
        page.wait_for_navigation()
            .await
            .map_err(portal_err("load results page"))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "fpds_watch::chromium", %url, "results page loaded");

        Ok(Box::new(ChromiumSession::new(browser, events, page)))
    }
}
