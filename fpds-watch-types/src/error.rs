use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the fpds-watch workspace.
///
/// Every variant aborts the run: malformed input, portal and rendering
/// failures, missing page elements, timeouts, and webhook failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WatchError {
    /// A criterion entry from the input lists could not be parsed.
    #[error("invalid criterion '{entry}': {reason}")]
    InvalidCriterion {
        /// The raw entry as it appeared in the input list.
        entry: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The portal collaborator (browser session) failed.
    #[error("portal failed: {msg}")]
    Portal {
        /// Human-readable error message.
        msg: String,
    },

    /// An expected element was missing from a loaded page.
    #[error("data issue: {0}")]
    Data(String),

    /// A page or detail page did not become ready within its bound.
    #[error("timed out after {after_ms}ms: {what}")]
    Timeout {
        /// What was being waited on, e.g. "detail page".
        what: String,
        /// The bound that was exceeded, in milliseconds.
        after_ms: u64,
    },

    /// The webhook endpoint answered with a non-success status.
    #[error("webhook rejected post: status={status} body={body}")]
    Webhook {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Transport-level failure talking to the webhook endpoint.
    #[error("transport error: {0}")]
    Transport(String),
}

impl WatchError {
    /// Helper: build an `InvalidCriterion` error.
    pub fn invalid_criterion(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCriterion {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `Portal` error with a message.
    pub fn portal(msg: impl Into<String>) -> Self {
        Self::Portal { msg: msg.into() }
    }

    /// Helper: build a `Timeout` error for `what` after `after`.
    #[must_use]
    pub fn timeout(what: impl Into<String>, after: std::time::Duration) -> Self {
        Self::Timeout {
            what: what.into(),
            after_ms: u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Helper: build a `Data` error for a missing element.
    pub fn missing(what: impl std::fmt::Display) -> Self {
        Self::Data(format!("missing {what}"))
    }

    /// Returns true if this error must abort the run.
    ///
    /// The job has no partial-success mode, so this holds for every variant today.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::InvalidCriterion { .. }
            | Self::InvalidArg(_)
            | Self::Portal { .. }
            | Self::Data(_)
            | Self::Timeout { .. }
            | Self::Webhook { .. }
            | Self::Transport(_) => true,
        }
    }
}
