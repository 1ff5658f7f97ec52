use std::sync::Arc;
use std::time::Duration;

use fpds_watch::{Watch, WatchConfig, WatchError};
use fpds_watch_mock::{FixturePortal, RecordingNotifier};

#[test]
fn build_requires_portal_and_notifier() {
    let no_portal = Watch::builder()
        .with_notifier(Arc::new(RecordingNotifier::new()))
        .build();
    assert!(matches!(no_portal, Err(WatchError::InvalidArg(_))));

    let no_notifier = Watch::builder()
        .with_portal(Arc::new(FixturePortal::new()))
        .build();
    assert!(matches!(no_notifier, Err(WatchError::InvalidArg(_))));
}

#[test]
fn modifiers_override_config() {
    let watch = Watch::builder()
        .with_portal(Arc::new(FixturePortal::new()))
        .with_notifier(Arc::new(RecordingNotifier::new()))
        .config(WatchConfig {
            template_name: "9.9".into(),
            ..WatchConfig::default()
        })
        .detail_timeout(Duration::from_secs(3))
        .search_delay(Duration::ZERO)
        .build()
        .unwrap();
    let cfg = watch.config();
    assert_eq!(cfg.template_name, "9.9");
    assert_eq!(cfg.detail_timeout, Duration::from_secs(3));
    assert_eq!(cfg.page_timeout, Duration::from_secs(60));
    assert!(cfg.search_delay.is_zero());
}
