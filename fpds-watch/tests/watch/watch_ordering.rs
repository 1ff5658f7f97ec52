use fpds_watch::SearchCriterion;
use fpds_watch_mock::RecordingNotifier;

use crate::helpers::{CONTRACT_HIT, CONTRACT_MISS, NAICS_PATTERN, portal, today, watch};

#[tokio::test]
async fn contracts_precede_naics_and_indices_are_dense() {
    let portal = portal();
    let watch = watch(&portal, &RecordingNotifier::new());

    let results = watch
        .collect(
            &format!("{CONTRACT_MISS}:Empty One, {CONTRACT_HIT}:Range Support"),
            "541512:DEPT OF THE ARMY:Army",
            today(),
        )
        .await
        .unwrap();

    let indexed: Vec<_> = results
        .iter()
        .map(|r| (r.index, r.criterion.clone()))
        .collect();
    assert_eq!(
        indexed,
        vec![
            (1, SearchCriterion::contract(CONTRACT_HIT, "Range Support")),
            (
                2,
                SearchCriterion::naics_labeled("541512", "DEPT OF THE ARMY", "Army")
            ),
        ]
    );

    let opened = portal.opened_urls();
    assert_eq!(opened.len(), 3);
    assert!(opened[0].contains(CONTRACT_MISS));
    assert!(opened[1].contains(CONTRACT_HIT));
    assert!(opened[2].contains(NAICS_PATTERN));
    assert!(opened.iter().all(|u| u.contains("SIGNED_DATE%3A%5B2024/02/25%2C%29")));
    assert_eq!(portal.closed_sessions(), 3);
    assert_eq!(results[0].source_url, opened[1]);
}

#[tokio::test]
async fn all_empty_criteria_yield_no_results() {
    let portal = portal();
    let watch = watch(&portal, &RecordingNotifier::new());
    let results = watch
        .collect(&format!("{CONTRACT_MISS}:Empty"), "", today())
        .await
        .unwrap();
    assert!(results.is_empty());
}
