//! Criterion lists arrive as comma-separated entries. Parsing is lazy: each
//! entry is parsed when the orchestrator reaches it, so a malformed entry
//! aborts the run only after the entries before it have been searched.

use crate::{SearchCriterion, WatchError};

const CONTRACT_FORMAT: &str = "expected '<contract_no>:<contract_name>'";
const NAICS_FORMAT: &str = "expected '<naics_code>:<agency_name>[:<agency_label>]'";

fn invalid(entry: &str, reason: &'static str) -> WatchError {
    #[cfg(feature = "tracing")]
    tracing::warn!(target: "fpds_watch::criteria", %entry, reason, "malformed criterion entry");
    WatchError::invalid_criterion(entry, reason)
}

fn entries(list: &str) -> impl Iterator<Item = &str> {
    let list = list.trim();
    // An empty list yields no entries rather than one empty entry.
    list.split(',').filter(move |_| !list.is_empty())
}

/// Parse one `<contract_no>:<contract_name>` entry.
///
/// Splits on the first `:`; the name may contain further colons.
///
/// # Errors
/// Returns `InvalidCriterion` when the entry has no `:`.
pub fn parse_contract_entry(entry: &str) -> Result<SearchCriterion, WatchError> {
    let (no, name) = entry
        .split_once(':')
        .ok_or_else(|| invalid(entry, CONTRACT_FORMAT))?;
    Ok(SearchCriterion::contract(no.trim(), name.trim()))
}

/// Parse one `<naics_code>:<agency_name>[:<agency_label>]` entry.
///
/// # Errors
/// Returns `InvalidCriterion` unless the entry has exactly two or three
/// `:`-separated fields.
pub fn parse_naics_entry(entry: &str) -> Result<SearchCriterion, WatchError> {
    let fields: Vec<&str> = entry.split(':').map(str::trim).collect();
    match fields.as_slice() {
        [naics, agency] => Ok(SearchCriterion::naics(*naics, *agency)),
        [naics, agency, label] => Ok(SearchCriterion::naics_labeled(*naics, *agency, *label)),
        _ => Err(invalid(entry, NAICS_FORMAT)),
    }
}

/// Lazily parsed contract-number criteria from a comma-separated list.
pub fn contract_entries(
    list: &str,
) -> impl Iterator<Item = Result<SearchCriterion, WatchError>> + '_ {
    entries(list).map(parse_contract_entry)
}

/// Lazily parsed NAICS criteria from a comma-separated list.
pub fn naics_entries(list: &str) -> impl Iterator<Item = Result<SearchCriterion, WatchError>> + '_ {
    entries(list).map(parse_naics_entry)
}

/// Contract-number criteria followed by NAICS criteria, in processing order.
pub fn all_entries<'a>(
    contract_list: &'a str,
    naics_list: &'a str,
) -> impl Iterator<Item = Result<SearchCriterion, WatchError>> + 'a {
    contract_entries(contract_list).chain(naics_entries(naics_list))
}
