//! Selectors and labels the portal renders. Every portal implementation
//! (browser-backed or fixture-backed) locates elements with these.

/// Result rows are tables whose class starts with `resultbox`.
pub const RESULT_ROW_SELECTOR: &str = r#"table[class^="resultbox"]"#;

/// Label marker element inside a labeled cell.
pub const LABEL_MARKER_TAG: &str = "span";

/// Label of the signed-date cell.
pub const DATE_SIGNED_LABEL: &str = "Date Signed:";
/// Label of the awardee name cell.
pub const LEGAL_BUSINESS_NAME_LABEL: &str = "Legal Business Name:";
/// Label of the obligation amount cell.
pub const ACTION_OBLIGATION_LABEL: &str = "Action Obligation:";

/// Text of the link that opens a row's detail page.
pub const VIEW_LINK_TEXT: &str = "(View)";

/// Reason-for-modification input on the detail page.
pub const REASON_SELECTOR: &str = r#"input[name="reasonForModification"]"#;
/// Description-of-requirement text area on the detail page.
pub const DESCRIPTION_SELECTOR: &str = "textarea#descriptionOfContractRequirement";
