use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use fpds_watch_core::criteria::all_entries;
use fpds_watch_core::{
    CriterionResult, DisplayBlock, Notifier, Portal, QueryBuilder, SearchCriterion, SearchOutcome,
    WatchConfig, WatchError, cutoff_date,
};

use crate::{extract, report};

/// Orchestrator running the searches and posting the report.
pub struct Watch {
    pub(crate) portal: Arc<dyn Portal>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) cfg: WatchConfig,
    pub(crate) queries: QueryBuilder,
}

/// Builder for a [`Watch`].
pub struct WatchBuilder {
    portal: Option<Arc<dyn Portal>>,
    notifier: Option<Arc<dyn Notifier>>,
    cfg: WatchConfig,
}

impl Default for WatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchBuilder {
    /// Create a builder with default configuration and no collaborators.
    ///
    /// Both a portal and a notifier must be supplied before [`build`](Self::build).
    #[must_use]
    pub fn new() -> Self {
        Self {
            portal: None,
            notifier: None,
            cfg: WatchConfig::default(),
        }
    }

    /// Portal the searches run against.
    #[must_use]
    pub fn with_portal(mut self, portal: Arc<dyn Portal>) -> Self {
        self.portal = Some(portal);
        self
    }

    /// Endpoint the finished report is posted to.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: WatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Bound on loading one results page.
    #[must_use]
    pub const fn page_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.page_timeout = timeout;
        self
    }

    /// Bound on a row's detail page opening and loading.
    ///
    /// Exceeding it aborts the run.
    #[must_use]
    pub const fn detail_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.detail_timeout = timeout;
        self
    }

    /// Pause after each search. `Duration::ZERO` disables it.
    #[must_use]
    pub const fn search_delay(mut self, delay: Duration) -> Self {
        self.cfg.search_delay = delay;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the portal or the notifier is missing.
    pub fn build(self) -> Result<Watch, WatchError> {
        let portal = self.portal.ok_or_else(|| {
            WatchError::InvalidArg("no portal registered; add one via with_portal(...)".to_string())
        })?;
        let notifier = self.notifier.ok_or_else(|| {
            WatchError::InvalidArg(
                "no notifier registered; add one via with_notifier(...)".to_string(),
            )
        })?;
        Ok(Watch {
            queries: QueryBuilder::new(&self.cfg),
            portal,
            notifier,
            cfg: self.cfg,
        })
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The report was posted.
    Posted {
        /// The blocks that were posted.
        blocks: Vec<DisplayBlock>,
    },
    /// No criterion had results; nothing was posted.
    NoUpdates,
}

/// Bound `fut` by `timeout`, mapping expiry to `WatchError::Timeout`.
pub(crate) async fn call_with_timeout<T, Fut>(
    what: &'static str,
    timeout: Duration,
    fut: Fut,
) -> Result<T, WatchError>
where
    Fut: Future<Output = Result<T, WatchError>>,
{
    (tokio::time::timeout(timeout, fut).await)
        .unwrap_or_else(|_| Err(WatchError::timeout(what, timeout)))
}

impl Watch {
    /// Start building a new `Watch`.
    ///
    /// ```rust,ignore
    /// let watch = fpds_watch::Watch::builder()
    ///     .with_portal(Arc::new(ChromiumPortal::builder().build()))
    ///     .with_notifier(Arc::new(TeamsWebhook::parse(url)?))
    ///     .search_delay(Duration::from_secs(5))
    ///     .build()?;
    /// watch.run("W912DY24C0001:Range Support", "541512:DEPT OF THE ARMY:Army").await?;
    /// ```
    #[must_use]
    pub fn builder() -> WatchBuilder {
        WatchBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &WatchConfig {
        &self.cfg
    }

    /// Search the portal for one criterion and extract every row.
    ///
    /// The session is closed before returning, on success and on failure.
    ///
    /// # Errors
    /// Page load timeout, portal failure, missing row cells or detail fields,
    /// and detail page timeout.
    #[tracing::instrument(
        name = "fpds_watch::search",
        skip(self, criterion),
        fields(kind = criterion.kind(), criterion = %criterion),
    )]
    pub async fn search(
        &self,
        criterion: &SearchCriterion,
        cutoff: &str,
    ) -> Result<SearchOutcome, WatchError> {
        let url = self.queries.search_url(criterion, cutoff);
        tracing::info!(portal = self.portal.name(), %url, "loading results page");

        let page = call_with_timeout(
            "results page",
            self.cfg.page_timeout,
            self.portal.open(&url),
        )
        .await?;
        let extracted =
            extract::extract_details(page.as_ref(), &self.queries, self.cfg.detail_timeout).await;
        let closed = page.close().await;
        let details = extracted?;
        closed?;

        tracing::info!(details = details.len(), "search complete");
        Ok(SearchOutcome {
            criterion: criterion.clone(),
            source_url: url,
            details,
        })
    }

    /// Run every criterion in order and number the non-empty results.
    ///
    /// Contract-number entries are processed before NAICS entries. Entries are
    /// parsed as they are reached, so a malformed entry aborts the run only
    /// after the entries before it were searched.
    ///
    /// # Errors
    /// The first parse or search error aborts the run.
    pub async fn collect(
        &self,
        contract_list: &str,
        naics_list: &str,
        today: NaiveDate,
    ) -> Result<Vec<CriterionResult>, WatchError> {
        let cutoff = cutoff_date(today);
        let mut outcomes = Vec::new();
        for entry in all_entries(contract_list, naics_list) {
            let criterion = entry?;
            tracing::info!(kind = criterion.kind(), "Processing {criterion} search");
            outcomes.push(self.search(&criterion, &cutoff).await?);
            if !self.cfg.search_delay.is_zero() {
                tokio::time::sleep(self.cfg.search_delay).await;
            }
        }
        Ok(CriterionResult::number(outcomes))
    }

    /// Run every search and format the report. Empty when nothing was found.
    ///
    /// # Errors
    /// See [`collect`](Self::collect).
    pub async fn process_search(
        &self,
        contract_list: &str,
        naics_list: &str,
        today: NaiveDate,
    ) -> Result<Vec<DisplayBlock>, WatchError> {
        let results = self.collect(contract_list, naics_list, today).await?;
        Ok(report::format_results(&results, today))
    }

    /// Run the job for `today`: search, format, and post unless empty.
    ///
    /// # Errors
    /// Any search error, or the notifier's error when posting fails.
    #[tracing::instrument(name = "fpds_watch::run", skip_all, fields(%today))]
    pub async fn run_on(
        &self,
        contract_list: &str,
        naics_list: &str,
        today: NaiveDate,
    ) -> Result<RunOutcome, WatchError> {
        tracing::info!("starting contract search");
        let blocks = self.process_search(contract_list, naics_list, today).await?;
        if blocks.is_empty() {
            tracing::info!("No contract updates found");
            return Ok(RunOutcome::NoUpdates);
        }

        tracing::info!(notifier = self.notifier.name(), blocks = blocks.len(), "posting report");
        if let Err(e) = self.notifier.post(&blocks).await {
            tracing::error!(notifier = self.notifier.name(), error = %e, "failed to post report");
            return Err(e);
        }
        Ok(RunOutcome::Posted { blocks })
    }

    /// Run the job for the local calendar date.
    ///
    /// # Errors
    /// See [`run_on`](Self::run_on).
    pub async fn run(&self, contract_list: &str, naics_list: &str) -> Result<RunOutcome, WatchError> {
        self.run_on(contract_list, naics_list, chrono::Local::now().date_naive())
            .await
    }
}
