//! Turns a loaded results page into [`ContractDetail`] records.

use std::time::Duration;

use fpds_watch_core::markup::{
    ACTION_OBLIGATION_LABEL, DATE_SIGNED_LABEL, DESCRIPTION_SELECTOR, LEGAL_BUSINESS_NAME_LABEL,
    REASON_SELECTOR,
};
use fpds_watch_core::{
    ContractDetail, DetailPage, QueryBuilder, ResultRow, ResultsPage, WatchError,
};

use crate::core::call_with_timeout;

/// Normalize a labeled cell's text: leading and trailing whitespace only.
#[must_use]
pub fn cell_value(raw: &str) -> String {
    raw.trim().to_string()
}

/// Extract every result row of `page` in DOM order.
///
/// Zero rows is an empty vector. Detail pages are left open; closing the
/// session releases them.
///
/// # Errors
/// A missing labeled cell or detail field, a portal failure, or a detail page
/// that does not finish loading within `detail_timeout`.
pub async fn extract_details(
    page: &dyn ResultsPage,
    queries: &QueryBuilder,
    detail_timeout: Duration,
) -> Result<Vec<ContractDetail>, WatchError> {
    let rows = page.rows().await?;
    tracing::debug!(rows = rows.len(), "result rows located");
    let mut details = Vec::with_capacity(rows.len());
    for row in &rows {
        details.push(extract_row(row.as_ref(), queries, detail_timeout).await?);
    }
    Ok(details)
}

async fn labeled(row: &dyn ResultRow, label: &str) -> Result<String, WatchError> {
    row.labeled_value(label)
        .await?
        .map(|raw| cell_value(&raw))
        .ok_or_else(|| WatchError::missing(format!("'{label}' cell")))
}

async fn field(detail: &dyn DetailPage, selector: &str) -> Result<String, WatchError> {
    detail
        .field_value(selector)
        .await?
        .ok_or_else(|| WatchError::missing(format!("detail field {selector}")))
}

/// Extract one row, following its "(View)" link for the detail fields.
///
/// # Errors
/// See [`extract_details`].
pub async fn extract_row(
    row: &dyn ResultRow,
    queries: &QueryBuilder,
    detail_timeout: Duration,
) -> Result<ContractDetail, WatchError> {
    let date_signed = labeled(row, DATE_SIGNED_LABEL).await?;
    let company_name = labeled(row, LEGAL_BUSINESS_NAME_LABEL).await?;
    let obligation = labeled(row, ACTION_OBLIGATION_LABEL).await?;
    let company_url = queries.company_url(&company_name);

    let detail = call_with_timeout("detail page", detail_timeout, row.open_detail()).await?;
    let modification_reason = field(detail.as_ref(), REASON_SELECTOR).await?;
    let description = field(detail.as_ref(), DESCRIPTION_SELECTOR).await?;

    Ok(ContractDetail {
        date_signed,
        company_name,
        company_url,
        obligation,
        modification_reason,
        description,
    })
}
