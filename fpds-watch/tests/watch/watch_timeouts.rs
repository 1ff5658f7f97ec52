use std::sync::Arc;
use std::time::Duration;

use fpds_watch::{Watch, WatchError};
use fpds_watch_mock::fixtures::{RowFixture, results_page};
use fpds_watch_mock::{FixturePortal, RecordingNotifier};

use crate::helpers::{CONTRACT_HIT, portal, today};

fn bounded(portal: &FixturePortal, delay: Duration) -> Watch {
    Watch::builder()
        .with_portal(Arc::new(portal.clone()))
        .with_notifier(Arc::new(RecordingNotifier::new()))
        .page_timeout(Duration::from_secs(30))
        .detail_timeout(Duration::from_secs(10))
        .search_delay(delay)
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn detail_page_that_never_opens_aborts_the_run() {
    let portal = FixturePortal::new().with_results(
        "ORPHAN",
        results_page(&[RowFixture::new("02/25/2024", "Co", "$1", "/nowhere")]),
    );
    let err = bounded(&portal, Duration::ZERO)
        .collect("ORPHAN:x", "", today())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        WatchError::Timeout {
            what: "detail page".into(),
            after_ms: 10_000
        }
    );
    assert_eq!(portal.closed_sessions(), 1);
}

#[tokio::test(start_paused = true)]
async fn results_page_that_never_loads_aborts_the_run() {
    let portal = FixturePortal::new().with_stalled_results("SLOW");
    let err = bounded(&portal, Duration::ZERO)
        .collect("SLOW:x", "", today())
        .await
        .unwrap_err();
    assert!(matches!(err, WatchError::Timeout { ref what, after_ms: 30_000 } if what == "results page"));
    assert_eq!(portal.closed_sessions(), 0);
}

#[tokio::test(start_paused = true)]
async fn delay_follows_each_search() {
    let portal = portal();
    let start = tokio::time::Instant::now();
    bounded(&portal, Duration::from_secs(5))
        .collect(&format!("{CONTRACT_HIT}:a,NONE:b"), "", today())
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_secs(10));
}
