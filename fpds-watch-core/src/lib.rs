//! fpds-watch-core
//!
//! Contracts shared across the fpds-watch workspace.
//!
//! - `connector`: the `Portal` collaborator (results page, result row, detail
//!   page) and the `Notifier` collaborator.
//! - `markup`: selectors and labels describing the portal's result markup.
//! - `query`: the query builder producing portal search URLs.
//! - `criteria`: lazy parsing of the user-supplied criterion lists.
//!
//! Async runtime
//! -------------
//! Collaborator traits are `async_trait` based and runtime-agnostic; the
//! orchestrator and the Chromium connector assume Tokio.
#![warn(missing_docs)]

/// Collaborator traits for the portal and the posting endpoint.
pub mod connector;
/// Lazy parsing of criterion lists.
pub mod criteria;
/// Portal markup contract.
pub mod markup;
/// Search URL construction.
pub mod query;
pub mod types;

pub use connector::{DetailPage, Notifier, Portal, ResultRow, ResultsPage};
pub use query::{QueryBuilder, cutoff_date};
pub use types::*;
