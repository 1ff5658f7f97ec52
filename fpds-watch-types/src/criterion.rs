use std::fmt;

use serde::{Deserialize, Serialize};

/// One user-specified filter driving one portal search.
///
/// The variant decides both the query that is built and how the findings are
/// labeled in the report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchCriterion {
    /// Awards modifying one specific contract.
    ContractNumber {
        /// Contract (PIID) number searched verbatim.
        contract_no: String,
        /// Friendly name shown in the report heading.
        contract_name: String,
    },
    /// All awards under a NAICS code issued by one contracting agency.
    Naics {
        /// Principal NAICS code.
        naics_code: String,
        /// Contracting agency name as the portal indexes it.
        agency_name: String,
        /// Label shown in the report heading instead of the full agency name.
        agency_label: String,
    },
}

impl SearchCriterion {
    /// Build a contract-number criterion.
    pub fn contract(contract_no: impl Into<String>, contract_name: impl Into<String>) -> Self {
        Self::ContractNumber {
            contract_no: contract_no.into(),
            contract_name: contract_name.into(),
        }
    }

    /// Build a NAICS criterion labeled with the agency name itself.
    pub fn naics(naics_code: impl Into<String>, agency_name: impl Into<String>) -> Self {
        let agency_name = agency_name.into();
        Self::Naics {
            naics_code: naics_code.into(),
            agency_label: agency_name.clone(),
            agency_name,
        }
    }

    /// Build a NAICS criterion with a distinct report label (e.g. an abbreviation).
    pub fn naics_labeled(
        naics_code: impl Into<String>,
        agency_name: impl Into<String>,
        agency_label: impl Into<String>,
    ) -> Self {
        Self::Naics {
            naics_code: naics_code.into(),
            agency_name: agency_name.into(),
            agency_label: agency_label.into(),
        }
    }

    /// Short kind label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ContractNumber { .. } => "contract",
            Self::Naics { .. } => "naics",
        }
    }
}

impl fmt::Display for SearchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContractNumber { contract_no, .. } => write!(f, "contract {contract_no}"),
            Self::Naics {
                naics_code,
                agency_label,
                ..
            } => write!(f, "NAICS {naics_code} / {agency_label}"),
        }
    }
}
