//! Report formatting for the chat card body.
//!
//! The output is a header block and a spacer, then one content block and
//! one spacer per result. Field values are inserted as-is, without escaping.

use chrono::NaiveDate;
use fpds_watch_core::{ContractDetail, CriterionResult, DisplayBlock, SearchCriterion};

/// `strftime` format of the header date, e.g. `Monday, 02/26/2024`.
pub const HEADER_DATE_FORMAT: &str = "%A, %m/%d/%Y";

const VIEW_UPDATES: &str = " - [View updates](";

/// Date-stamped header line.
#[must_use]
pub fn header(today: NaiveDate) -> String {
    format!("**{}.** Contract updates.", today.format(HEADER_DATE_FORMAT))
}

/// First line of a result's content block.
#[must_use]
pub fn heading(result: &CriterionResult) -> String {
    let CriterionResult {
        index, source_url, ..
    } = result;
    match &result.criterion {
        SearchCriterion::ContractNumber {
            contract_no,
            contract_name,
        } => format!("**{index}. {contract_name} -** {contract_no}{VIEW_UPDATES}{source_url})"),
        SearchCriterion::Naics {
            naics_code,
            agency_label,
            ..
        } => format!(
            "**{index}. All of NAICS {naics_code} - {agency_label}{VIEW_UPDATES}{source_url})**"
        ),
    }
}

/// One bullet line for a detail; newlines in the description become spaces.
#[must_use]
pub fn detail_line(detail: &ContractDetail) -> String {
    format!(
        "- **Date Signed:** {} | **Company:** [{}]({}) | **Reason:** {} | **Obligation:** {} | **Description:** {}",
        detail.date_signed,
        detail.company_name,
        detail.company_url,
        detail.modification_reason,
        detail.obligation,
        detail.description.replace('\n', " "),
    )
}

/// Full content block text for one result.
#[must_use]
pub fn content(result: &CriterionResult) -> String {
    let mut text = heading(result);
    for detail in &result.details {
        text.push_str("\n\n");
        text.push_str(&detail_line(detail));
    }
    text
}

/// Display blocks for `results`; empty input yields no blocks at all.
#[must_use]
pub fn format_results(results: &[CriterionResult], today: NaiveDate) -> Vec<DisplayBlock> {
    if results.is_empty() {
        return Vec::new();
    }
    let mut blocks = Vec::with_capacity(2 + 2 * results.len());
    blocks.push(DisplayBlock::text(header(today)));
    blocks.push(DisplayBlock::spacer());
    for result in results {
        blocks.push(DisplayBlock::text(content(result)));
        blocks.push(DisplayBlock::spacer());
    }
    blocks
}

/// Which criterion a heading was rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingKey {
    /// Contract number from a contract heading.
    ContractNumber(String),
    /// NAICS code from a NAICS heading.
    Naics(String),
}

/// Values recovered from a rendered heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeading {
    /// Report index.
    pub index: usize,
    /// Contract number or NAICS code.
    pub key: HeadingKey,
    /// Search URL behind "View updates".
    pub source_url: String,
}

fn split_index(s: &str) -> Option<(usize, &str)> {
    let (index, rest) = s.split_once(". ")?;
    Some((index.parse().ok()?, rest))
}

/// Parse the heading line of a content block produced by [`content`].
///
/// Returns `None` for text not shaped like a heading.
#[must_use]
pub fn parse_heading(block: &str) -> Option<ParsedHeading> {
    let line = block.split("\n\n").next()?.strip_prefix("**")?;

    if let Some(inner) = line.strip_suffix(")**") {
        let (left, source_url) = inner.rsplit_once(VIEW_UPDATES)?;
        let (index, rest) = split_index(left)?;
        let (naics, _label) = rest.strip_prefix("All of NAICS ")?.split_once(" - ")?;
        return Some(ParsedHeading {
            index,
            key: HeadingKey::Naics(naics.to_string()),
            source_url: source_url.to_string(),
        });
    }

    let (left, source_url) = line.strip_suffix(')')?.rsplit_once(VIEW_UPDATES)?;
    let (title, contract_no) = left.rsplit_once(" -** ")?;
    let (index, _name) = split_index(title)?;
    Some(ParsedHeading {
        index,
        key: HeadingKey::ContractNumber(contract_no.to_string()),
        source_url: source_url.to_string(),
    })
}
