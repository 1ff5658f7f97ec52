//! Re-export of foundational types from `fpds-watch-types`.
// Consolidated so downstream crates can depend on `fpds-watch-core` only.

pub use fpds_watch_types::{
    BlockKind, ContractDetail, CriterionResult, DEFAULT_PORTAL_BASE_URL, DEFAULT_TEMPLATE_NAME,
    DisplayBlock, SearchCriterion, SearchOutcome, WatchConfig, WatchError,
};
