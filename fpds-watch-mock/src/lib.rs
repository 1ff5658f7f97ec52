//! fpds-watch-mock
//!
//! Deterministic collaborators for tests and demos.
//!
//! - [`FixturePortal`] serves canned HTML: a results page per URL pattern and a
//!   detail page per "(View)" link target. Pages are parsed with `scraper`
//!   using the same selectors and labels as the browser-backed portal.
//! - [`RecordingNotifier`] keeps every posted report in memory.
#![warn(missing_docs)]

/// HTML builders for results and detail pages.
pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use fpds_watch_core::markup::{LABEL_MARKER_TAG, RESULT_ROW_SELECTOR, VIEW_LINK_TEXT};
use fpds_watch_core::{
    DetailPage, DisplayBlock, Notifier, Portal, ResultRow, ResultsPage, WatchError,
};
use scraper::{ElementRef, Html, Selector};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn selector(css: &str) -> Result<Selector, WatchError> {
    Selector::parse(css).map_err(|e| WatchError::portal(format!("bad selector '{css}': {e}")))
}

#[derive(Debug, Clone)]
enum OpenBehavior {
    Serve(String),
    Fail(String),
    Stall,
}

#[derive(Debug, Default)]
struct PortalLog {
    opened: Vec<String>,
    closed: usize,
    details_opened: Vec<String>,
}

/// Portal serving fixture pages.
///
/// Results pages are matched by substring of the requested URL, first
/// registration wins. A URL matching nothing renders an empty results page.
#[derive(Debug, Clone, Default)]
pub struct FixturePortal {
    pages: Vec<(String, OpenBehavior)>,
    details: HashMap<String, String>,
    log: Arc<Mutex<PortalLog>>,
}

impl FixturePortal {
    /// Connector name used in logs.
    pub const NAME: &'static str = "fpds-watch-mock";

    /// A portal that renders every search as an empty results page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for URLs containing `pattern`.
    #[must_use]
    pub fn with_results(mut self, pattern: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages
            .push((pattern.into(), OpenBehavior::Serve(html.into())));
        self
    }

    /// Fail `open` with a portal error for URLs containing `pattern`.
    #[must_use]
    pub fn with_failure(mut self, pattern: impl Into<String>, msg: impl Into<String>) -> Self {
        self.pages
            .push((pattern.into(), OpenBehavior::Fail(msg.into())));
        self
    }

    /// Never finish loading URLs containing `pattern`.
    #[must_use]
    pub fn with_stalled_results(mut self, pattern: impl Into<String>) -> Self {
        self.pages.push((pattern.into(), OpenBehavior::Stall));
        self
    }

    /// Serve `html` as the detail page behind a "(View)" link to `href`.
    ///
    /// Links without a registered detail page never finish opening.
    #[must_use]
    pub fn with_detail(mut self, href: impl Into<String>, html: impl Into<String>) -> Self {
        self.details.insert(href.into(), html.into());
        self
    }

    /// URLs passed to `open`, in call order.
    #[must_use]
    pub fn opened_urls(&self) -> Vec<String> {
        lock(&self.log).opened.clone()
    }

    /// Number of results sessions closed so far.
    #[must_use]
    pub fn closed_sessions(&self) -> usize {
        lock(&self.log).closed
    }

    /// Detail links followed so far, in order.
    #[must_use]
    pub fn opened_details(&self) -> Vec<String> {
        lock(&self.log).details_opened.clone()
    }

    fn behavior_for(&self, url: &str) -> OpenBehavior {
        self.pages
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
            .map_or_else(
                || OpenBehavior::Serve(fixtures::results_page(&[])),
                |(_, b)| b.clone(),
            )
    }
}

#[async_trait]
impl Portal for FixturePortal {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn open(&self, url: &str) -> Result<Box<dyn ResultsPage>, WatchError> {
        lock(&self.log).opened.push(url.to_string());
        match self.behavior_for(url) {
            OpenBehavior::Serve(html) => Ok(Box::new(FixtureSession {
                rows: row_markup(&html)?,
                details: self.details.clone(),
                log: Arc::clone(&self.log),
            })),
            OpenBehavior::Fail(msg) => Err(WatchError::portal(msg)),
            OpenBehavior::Stall => std::future::pending().await,
        }
    }
}

fn row_markup(html: &str) -> Result<Vec<String>, WatchError> {
    let rows = selector(RESULT_ROW_SELECTOR)?;
    Ok(Html::parse_document(html)
        .select(&rows)
        .map(|table| table.html())
        .collect())
}

struct FixtureSession {
    rows: Vec<String>,
    details: HashMap<String, String>,
    log: Arc<Mutex<PortalLog>>,
}

#[async_trait]
impl ResultsPage for FixtureSession {
    async fn rows(&self) -> Result<Vec<Box<dyn ResultRow>>, WatchError> {
        Ok(self
            .rows
            .iter()
            .map(|markup| {
                Box::new(FixtureRow {
                    markup: markup.clone(),
                    details: self.details.clone(),
                    log: Arc::clone(&self.log),
                }) as Box<dyn ResultRow>
            })
            .collect())
    }

    async fn close(self: Box<Self>) -> Result<(), WatchError> {
        lock(&self.log).closed += 1;
        Ok(())
    }
}

struct FixtureRow {
    markup: String,
    details: HashMap<String, String>,
    log: Arc<Mutex<PortalLog>>,
}

fn labeled_cell(markup: &str, label: &str) -> Result<Option<String>, WatchError> {
    let cells = selector("td")?;
    let marker = selector(LABEL_MARKER_TAG)?;
    let doc = Html::parse_document(markup);
    let Some(labeled) = doc.select(&cells).find(|td| {
        td.select(&marker)
            .any(|m| m.text().collect::<String>().contains(label))
    }) else {
        return Ok(None);
    };
    Ok(labeled
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|next| next.value().name() == "td")
        .map(|next| next.text().collect()))
}

fn view_href(markup: &str) -> Result<Option<String>, WatchError> {
    let links = selector("a")?;
    let doc = Html::parse_document(markup);
    Ok(doc
        .select(&links)
        .find(|a| a.text().collect::<String>().contains(VIEW_LINK_TEXT))
        .and_then(|a| a.value().attr("href").map(str::to_string)))
}

#[async_trait]
impl ResultRow for FixtureRow {
    async fn labeled_value(&self, label: &str) -> Result<Option<String>, WatchError> {
        labeled_cell(&self.markup, label)
    }

    async fn open_detail(&self) -> Result<Box<dyn DetailPage>, WatchError> {
        let href = view_href(&self.markup)?
            .ok_or_else(|| WatchError::missing(format!("'{VIEW_LINK_TEXT}' link")))?;
        lock(&self.log).details_opened.push(href.clone());
        match self.details.get(&href) {
            Some(html) => Ok(Box::new(FixtureDetail { html: html.clone() })),
            None => std::future::pending().await,
        }
    }
}

struct FixtureDetail {
    html: String,
}

fn form_value(html: &str, css: &str) -> Result<Option<String>, WatchError> {
    let sel = selector(css)?;
    let doc = Html::parse_document(html);
    Ok(doc.select(&sel).next().map(|field| {
        if field.value().name() == "textarea" {
            field.text().collect()
        } else {
            field.value().attr("value").unwrap_or_default().to_string()
        }
    }))
}

#[async_trait]
impl DetailPage for FixtureDetail {
    async fn field_value(&self, selector: &str) -> Result<Option<String>, WatchError> {
        form_value(&self.html, selector)
    }
}

/// Notifier that records every post, optionally failing each one.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    posts: Arc<Mutex<Vec<Vec<DisplayBlock>>>>,
    fail_with: Option<WatchError>,
}

impl RecordingNotifier {
    /// A notifier accepting every post.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that records each post and then returns `err`.
    #[must_use]
    pub fn failing(err: WatchError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    /// Reports posted so far.
    #[must_use]
    pub fn posts(&self) -> Vec<Vec<DisplayBlock>> {
        lock(&self.posts).clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "fpds-watch-mock-notifier"
    }

    async fn post(&self, blocks: &[DisplayBlock]) -> Result<(), WatchError> {
        lock(&self.posts).push(blocks.to_vec());
        self.fail_with.clone().map_or(Ok(()), Err)
    }
}
