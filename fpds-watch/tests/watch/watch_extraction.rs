use fpds_watch::{SearchCriterion, WatchError};
use fpds_watch_core::QueryBuilder;
use fpds_watch_mock::{FixturePortal, RecordingNotifier};

use crate::helpers::{CONTRACT_HIT, portal, today, watch};

#[tokio::test]
async fn rows_are_extracted_in_order_with_trimmed_cells() {
    let portal = portal();
    let watch = watch(&portal, &RecordingNotifier::new());
    let outcome = watch
        .search(&SearchCriterion::contract(CONTRACT_HIT, "Range"), "2024/02/25")
        .await
        .unwrap();

    assert_eq!(outcome.details.len(), 2);
    let first = &outcome.details[0];
    assert_eq!(first.date_signed, "02/25/2024");
    assert_eq!(first.company_name, "Test Company");
    assert_eq!(first.obligation, "$50");
    assert_eq!(
        first.company_url,
        QueryBuilder::default().company_url("Test Company")
    );
    assert_eq!(first.modification_reason, "Exercise An Option");
    assert_eq!(first.description, "This exercises\noption year.");
    assert_eq!(outcome.details[1].company_name, "Other Co");

    assert_eq!(portal.opened_details(), vec!["/detail/1", "/detail/2"]);
    assert_eq!(portal.closed_sessions(), 1);
}

#[tokio::test]
async fn zero_rows_is_not_an_error() {
    let portal = FixturePortal::new();
    let watch = watch(&portal, &RecordingNotifier::new());
    let outcome = watch
        .search(&SearchCriterion::contract("", ""), "2024/02/25")
        .await
        .unwrap();
    assert!(outcome.details.is_empty());
    assert_eq!(portal.closed_sessions(), 1);
}

#[tokio::test]
async fn missing_labeled_cell_is_a_data_error() {
    let portal = FixturePortal::new().with_results(
        "BARE",
        r#"<html><body><table class="resultbox1"><tr><td>no labels here</td></tr></table></body></html>"#,
    );
    let watch = watch(&portal, &RecordingNotifier::new());
    let err = watch
        .collect("BARE:Bare", "", today())
        .await
        .unwrap_err();
    assert!(matches!(err, WatchError::Data(ref m) if m.contains("Date Signed:")), "got {err:?}");
    assert_eq!(portal.closed_sessions(), 1);
}

#[tokio::test]
async fn portal_failure_aborts() {
    let portal = FixturePortal::new().with_failure("DOWN", "net::ERR_CONNECTION_RESET");
    let watch = watch(&portal, &RecordingNotifier::new());
    let err = watch.collect("DOWN:x", "", today()).await.unwrap_err();
    assert_eq!(err, WatchError::portal("net::ERR_CONNECTION_RESET"));
}
