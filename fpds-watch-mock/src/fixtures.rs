//! HTML builders shaped like the portal's result and detail pages.

use fpds_watch_core::markup::{
    ACTION_OBLIGATION_LABEL, DATE_SIGNED_LABEL, LEGAL_BUSINESS_NAME_LABEL, VIEW_LINK_TEXT,
};

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Field values of one fixture result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFixture {
    /// Rendered text of the "Date Signed:" cell, padding included.
    pub date_signed: String,
    /// Rendered text of the "Legal Business Name:" cell.
    pub company_name: String,
    /// Rendered text of the "Action Obligation:" cell.
    pub obligation: String,
    /// Target of the row's "(View)" link.
    pub detail_href: String,
}

impl RowFixture {
    /// A row with the given values and detail link.
    pub fn new(
        date_signed: impl Into<String>,
        company_name: impl Into<String>,
        obligation: impl Into<String>,
        detail_href: impl Into<String>,
    ) -> Self {
        Self {
            date_signed: date_signed.into(),
            company_name: company_name.into(),
            obligation: obligation.into(),
            detail_href: detail_href.into(),
        }
    }

    /// Result-row table markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        let cell = |label: &str, value: &str| {
            format!(
                "<td><span class=\"label\">{}</span></td><td>{}</td>",
                escape(label),
                escape(value)
            )
        };
        format!(
            "<table class=\"resultbox1\"><tbody>\
             <tr>{}{}</tr>\
             <tr>{}</tr>\
             <tr><td><a href=\"{}\" target=\"_blank\">{VIEW_LINK_TEXT}</a></td></tr>\
             </tbody></table>",
            cell(DATE_SIGNED_LABEL, &self.date_signed),
            cell(ACTION_OBLIGATION_LABEL, &self.obligation),
            cell(LEGAL_BUSINESS_NAME_LABEL, &self.company_name),
            escape(&self.detail_href),
        )
    }
}

/// A results page holding `rows` in order, wrapped in unrelated layout tables.
#[must_use]
pub fn results_page(rows: &[RowFixture]) -> String {
    let body: String = rows.iter().map(RowFixture::to_html).collect();
    format!(
        "<!DOCTYPE html><html><head><title>ezSearch</title></head><body>\
         <table class=\"layout\"><tr><td><span>Date Signed:</span></td><td>not a row</td></tr></table>\
         {body}</body></html>"
    )
}

/// A detail page exposing the modification reason and requirement description.
#[must_use]
pub fn detail_page(reason: &str, description: &str) -> String {
    format!(
        "<!DOCTYPE html><html><body><form>\
         <input type=\"text\" name=\"reasonForModification\" value=\"{}\">\
         <textarea id=\"descriptionOfContractRequirement\">{}</textarea>\
         </form></body></html>",
        escape(reason),
        escape(description)
    )
}
