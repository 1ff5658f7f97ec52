// Shared fixtures for orchestrator tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use fpds_watch::Watch;
use fpds_watch_mock::fixtures::{RowFixture, detail_page, results_page};
use fpds_watch_mock::{FixturePortal, RecordingNotifier};

/// Contract number with two rows.
pub const CONTRACT_HIT: &str = "W912DY24C0001";
/// Contract number the portal has nothing for.
pub const CONTRACT_MISS: &str = "N0001924C0002";
/// Pattern matching the NAICS query for 541512 / DEPT OF THE ARMY.
pub const NAICS_PATTERN: &str = "PRINCIPAL_NAICS_CODE%3A%22541512%22";

/// Run date; searches cover awards signed since 2024/02/25.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 26).unwrap()
}

/// Portal with results for `CONTRACT_HIT` and the NAICS pattern.
pub fn portal() -> FixturePortal {
    FixturePortal::new()
        .with_results(
            CONTRACT_HIT,
            results_page(&[
                RowFixture::new("\n  02/25/2024  ", "  Test Company ", "$50", "/detail/1"),
                RowFixture::new("02/25/2024", "Other Co", "$1,000.00", "/detail/2"),
            ]),
        )
        .with_results(
            NAICS_PATTERN,
            results_page(&[RowFixture::new(
                "02/26/2024",
                "Army Vendor LLC",
                "$12.00",
                "/detail/3",
            )]),
        )
        .with_detail(
            "/detail/1",
            detail_page("Exercise An Option", "This exercises\noption year."),
        )
        .with_detail("/detail/2", detail_page("Funding Only Action", "Incremental funding"))
        .with_detail("/detail/3", detail_page("", "New award"))
}

/// Orchestrator over `portal` and `notifier` with no search delay.
pub fn watch(portal: &FixturePortal, notifier: &RecordingNotifier) -> Watch {
    Watch::builder()
        .with_portal(Arc::new(portal.clone()))
        .with_notifier(Arc::new(notifier.clone()))
        .search_delay(Duration::ZERO)
        .page_timeout(Duration::from_secs(5))
        .detail_timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
