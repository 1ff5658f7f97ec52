//! Records produced by the extractor and consumed by the report formatter.

use serde::{Deserialize, Serialize};

use crate::criterion::SearchCriterion;

/// One extracted result row.
///
/// All fields are display strings exactly as the portal rendered them; no
/// numeric parsing or validation happens anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractDetail {
    /// Signed date in the portal's native format (e.g. `02/25/2024`).
    pub date_signed: String,
    /// Legal business name of the awardee.
    pub company_name: String,
    /// Portal search URL listing the awardee's other awards.
    pub company_url: String,
    /// Action obligation, currency-formatted by the portal.
    pub obligation: String,
    /// Reason for modification from the detail page.
    pub modification_reason: String,
    /// Description of contract requirement from the detail page.
    pub description: String,
}

/// Findings for one criterion, as returned by a single search.
///
/// The index is not known yet; see [`CriterionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The criterion that was searched.
    pub criterion: SearchCriterion,
    /// The search URL that produced these details.
    pub source_url: String,
    /// Details in portal order (signed date, descending).
    pub details: Vec<ContractDetail>,
}

/// A non-empty batch of details for one criterion, numbered for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// The criterion that was searched.
    pub criterion: SearchCriterion,
    /// 1-based position among non-empty results, in processing order.
    pub index: usize,
    /// The search URL that produced these details.
    pub source_url: String,
    /// At least one detail.
    pub details: Vec<ContractDetail>,
}

impl CriterionResult {
    /// Number non-empty outcomes densely from 1, dropping empty ones.
    ///
    /// Empty outcomes never consume an index.
    #[must_use]
    pub fn number(outcomes: Vec<SearchOutcome>) -> Vec<Self> {
        outcomes
            .into_iter()
            .filter(|o| !o.details.is_empty())
            .enumerate()
            .map(|(i, o)| Self {
                criterion: o.criterion,
                index: i + 1,
                source_url: o.source_url,
                details: o.details,
            })
            .collect()
    }
}
