//! fpds-watch data transfer objects, configuration primitives, and the unified error type.
#![warn(missing_docs)]

mod block;
mod config;
mod criterion;
mod error;
mod reports;

pub use block::{BlockKind, DisplayBlock};
pub use config::{DEFAULT_PORTAL_BASE_URL, DEFAULT_TEMPLATE_NAME, WatchConfig};
pub use criterion::SearchCriterion;
pub use error::WatchError;
pub use reports::{ContractDetail, CriterionResult, SearchOutcome};
