use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::target::EventTargetCreated;
use chromiumoxide::element::Element;
use chromiumoxide::{Browser, Page};
use fpds_watch_core::markup::{RESULT_ROW_SELECTOR, VIEW_LINK_TEXT};
use fpds_watch_core::{DetailPage, ResultRow, ResultsPage, WatchError};
use futures::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::portal_err;
use crate::script::{FIELD_VALUE_FN, labeled_value_fn};

const POPUP_POLL: Duration = Duration::from_millis(100);

/// One browser launched for one search.
pub(crate) struct ChromiumSession {
    browser: Arc<Mutex<Browser>>,
    events: JoinHandle<()>,
    page: Page,
}

impl ChromiumSession {
    pub(crate) fn new(browser: Arc<Mutex<Browser>>, events: JoinHandle<()>, page: Page) -> Self {
        Self {
            browser,
            events,
            page,
        }
    }
}

#[async_trait]
impl ResultsPage for ChromiumSession {
    async fn rows(&self) -> Result<Vec<Box<dyn ResultRow>>, WatchError> {
        let tables = self
            .page
            .find_elements(RESULT_ROW_SELECTOR)
            .await
            .map_err(portal_err("locate result rows"))?;
        Ok(tables
            .into_iter()
            .map(|table| {
                Box::new(ChromiumRow {
                    browser: Arc::clone(&self.browser),
                    results_page: self.page.clone(),
                    table,
                }) as Box<dyn ResultRow>
            })
            .collect())
    }

    async fn close(self: Box<Self>) -> Result<(), WatchError> {
        let Self {
            browser, events, ..
        } = *self;
        let mut guard = browser.lock().await;
        let closed = guard.close().await.map_err(portal_err("close browser"));
        let _ = guard.wait().await;
        drop(guard);
        events.abort();
        closed.map(|_| ())
    }
}

struct ChromiumRow {
    browser: Arc<Mutex<Browser>>,
    results_page: Page,
    table: Element,
}

impl ChromiumRow {
    async fn view_link(&self) -> Result<Element, WatchError> {
        let links = self
            .table
            .find_elements("a")
            .await
            .map_err(portal_err("locate row links"))?;
        for link in links {
            let text = link
                .inner_text()
                .await
                .map_err(portal_err("read link text"))?
                .unwrap_or_default();
            if text.contains(VIEW_LINK_TEXT) {
                return Ok(link);
            }
        }
        Err(WatchError::missing(format!("'{VIEW_LINK_TEXT}' link")))
    }

    fn opened_by_results_page(&self, event: &EventTargetCreated) -> bool {
        let info = &event.target_info;
        info.r#type == "page"
            && info
                .opener_id
                .as_ref()
                .is_none_or(|opener| opener == self.results_page.target_id())
    }

    /// Resolve the popup's `Page` once the handler has registered it.
    async fn attach(&self, event: &EventTargetCreated) -> Page {
        let target = &event.target_info.target_id;
        loop {
            let pages = {
                let guard = self.browser.lock().await;
                guard.pages().await
            };
            if let Some(page) = pages
                .ok()
                .and_then(|pages| pages.into_iter().find(|p| p.target_id() == target))
            {
                return page;
            }
            tokio::time::sleep(POPUP_POLL).await;
        }
    }
}

#[async_trait]
impl ResultRow for ChromiumRow {
    async fn labeled_value(&self, label: &str) -> Result<Option<String>, WatchError> {
        let returned = self
            .table
            .call_js_fn(labeled_value_fn(label), false)
            .await
            .map_err(portal_err("read labeled cell"))?;
        Ok(returned
            .result
            .value
            .and_then(|v| v.as_str().map(str::to_string)))
    }

    async fn open_detail(&self) -> Result<Box<dyn DetailPage>, WatchError> {
        let link = self.view_link().await?;

        // Subscribe before clicking so the popup's creation cannot be missed.
        let mut created = {
            let guard = self.browser.lock().await;
            guard
                .event_listener::<EventTargetCreated>()
                .await
                .map_err(portal_err("listen for detail page"))?
        };
        link.click().await.map_err(portal_err("click view link"))?;

        let page = loop {
            let Some(event) = created.next().await else {
                return Err(WatchError::portal("browser closed before detail page opened"));
            };
            if self.opened_by_results_page(&event) {
                break self.attach(&event).await;
            }
        };
        page.wait_for_navigation()
            .await
            .map_err(portal_err("load detail page"))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "fpds_watch::chromium", target_id = ?page.target_id(), "detail page loaded");

        Ok(Box::new(ChromiumDetail { page }))
    }
}

struct ChromiumDetail {
    page: Page,
}

#[async_trait]
impl DetailPage for ChromiumDetail {
    async fn field_value(&self, selector: &str) -> Result<Option<String>, WatchError> {
        let found = self
            .page
            .find_elements(selector)
            .await
            .map_err(portal_err("locate detail field"))?;
        let Some(field) = found.into_iter().next() else {
            return Ok(None);
        };
        let returned = field
            .call_js_fn(FIELD_VALUE_FN, false)
            .await
            .map_err(portal_err("read detail field"))?;
        Ok(returned
            .result
            .value
            .and_then(|v| v.as_str().map(str::to_string)))
    }
}
