use chrono::{Days, NaiveDate};

use crate::{SearchCriterion, WatchConfig};

/// Format of the cutoff date in `SIGNED_DATE` range queries.
pub const CUTOFF_FORMAT: &str = "%Y/%m/%d";

/// The prior calendar day of `today`, formatted for the portal's date range.
#[must_use]
pub fn cutoff_date(today: NaiveDate) -> String {
    today
        .checked_sub_days(Days::new(1))
        .unwrap_or(today)
        .format(CUTOFF_FORMAT)
        .to_string()
}

/// Builds portal search URLs.
///
/// The portal silently returns zero rows for a malformed query, so the
/// encodings here are exact and field values are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    base_url: String,
    template_name: String,
}

impl QueryBuilder {
    /// Query builder for the portal described by `cfg`.
    #[must_use]
    pub fn new(cfg: &WatchConfig) -> Self {
        Self {
            base_url: cfg.portal_base_url.clone(),
            template_name: cfg.template_name.clone(),
        }
    }

    fn prefix(&self) -> String {
        format!("{}?q=", self.base_url)
    }

    fn suffix(&self) -> String {
        format!(
            "&templateName={}&indexName=awardfull&sortBy=SIGNED_DATE&desc=Y",
            self.template_name
        )
    }

    /// URL listing awards for `criterion` signed on or after `cutoff` (`YYYY/MM/DD`).
    #[must_use]
    pub fn search_url(&self, criterion: &SearchCriterion, cutoff: &str) -> String {
        let term = match criterion {
            SearchCriterion::ContractNumber { contract_no, .. } => {
                format!("{contract_no}%20%20SIGNED_DATE%3A%5B{cutoff}%2C%29")
            }
            SearchCriterion::Naics {
                naics_code,
                agency_name,
                ..
            } => format!(
                "CONTRACTING_AGENCY_NAME%3A%22{}%22+PRINCIPAL_NAICS_CODE%3A%22{naics_code}%22++SIGNED_DATE%3A%5B{cutoff}%2C%29",
                agency_name.replace(' ', "+")
            ),
        };
        format!("{}{term}{}", self.prefix(), self.suffix())
    }

    /// URL listing every award to the business named `company`.
    #[must_use]
    pub fn company_url(&self, company: &str) -> String {
        format!(
            "{}UEI_NAME%3A%22{}%22{}",
            self.prefix(),
            company.replace(' ', "%20"),
            self.suffix()
        )
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(&WatchConfig::default())
    }
}
