use fpds_watch::WatchError;
use fpds_watch_mock::RecordingNotifier;

use crate::helpers::{CONTRACT_HIT, portal, today, watch};

#[tokio::test]
async fn entries_before_a_malformed_one_are_searched() {
    let portal = portal();
    let notifier = RecordingNotifier::new();
    let watch = watch(&portal, &notifier);

    let err = watch
        .run_on(&format!("{CONTRACT_HIT}:Range,broken"), "", today())
        .await
        .unwrap_err();

    assert!(matches!(err, WatchError::InvalidCriterion { ref entry, .. } if entry == "broken"));
    assert_eq!(portal.opened_urls().len(), 1);
    assert!(notifier.posts().is_empty());
}

#[tokio::test]
async fn malformed_naics_entry_follows_all_contracts() {
    let portal = portal();
    let watch = watch(&portal, &RecordingNotifier::new());

    let err = watch
        .collect(&format!("{CONTRACT_HIT}:Range"), "541512", today())
        .await
        .unwrap_err();

    assert!(matches!(err, WatchError::InvalidCriterion { .. }));
    assert_eq!(portal.opened_urls().len(), 1);
}

#[tokio::test]
async fn malformed_first_entry_searches_nothing() {
    let portal = portal();
    let watch = watch(&portal, &RecordingNotifier::new());
    assert!(watch.collect("broken", "", today()).await.is_err());
    assert!(portal.opened_urls().is_empty());
}
