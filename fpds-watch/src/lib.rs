//! fpds-watch finds newly signed contract awards on the FPDS ezSearch portal
//! and posts them to a chat webhook.
//!
//! Overview
//! - For each criterion (contract numbers first, then NAICS code + agency), a
//!   search URL for awards signed since yesterday is built and loaded.
//! - Each result row yields one `ContractDetail`; its "(View)" link is
//!   followed for the modification reason and requirement description.
//! - Non-empty results are numbered densely in processing order and
//!   formatted into display blocks, which are posted in one adaptive card.
//! - A run with no findings posts nothing.
//!
//! Failure model
//! - Every error aborts the run: malformed entries, portal failures, page and
//!   detail timeouts, missing page elements, and webhook failures.
//! - Entries are parsed lazily, so entries before a malformed one are still
//!   searched.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use fpds_watch::Watch;
//! use fpds_watch_chromium::ChromiumPortal;
//! use fpds_watch_teams::TeamsWebhook;
//!
//! let watch = Watch::builder()
//!     .with_portal(Arc::new(ChromiumPortal::builder().build()))
//!     .with_notifier(Arc::new(TeamsWebhook::parse("https://example.webhook.office.com/...")?))
//!     .build()?;
//! match watch.run("123456789:Test Contract Name", "541512:DEPT OF THE ARMY:Army").await? {
//!     fpds_watch::RunOutcome::Posted { blocks } => println!("posted {} blocks", blocks.len()),
//!     fpds_watch::RunOutcome::NoUpdates => println!("nothing new"),
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
/// Result row extraction.
pub mod extract;
/// Report formatting.
pub mod report;

pub use core::{RunOutcome, Watch, WatchBuilder};

pub use fpds_watch_core::{
    ContractDetail, CriterionResult, DisplayBlock, SearchCriterion, SearchOutcome, WatchConfig,
    WatchError,
};
