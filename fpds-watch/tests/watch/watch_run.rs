use fpds_watch::report::{HeadingKey, parse_heading};
use fpds_watch::{RunOutcome, WatchError};
use fpds_watch_mock::RecordingNotifier;

use crate::helpers::{CONTRACT_HIT, CONTRACT_MISS, portal, today, watch};

#[tokio::test]
async fn nothing_found_posts_nothing() {
    let portal = portal();
    let notifier = RecordingNotifier::new();
    let outcome = watch(&portal, &notifier)
        .run_on(&format!("{CONTRACT_MISS}:Empty"), "", today())
        .await
        .unwrap();
    assert_eq!(outcome, RunOutcome::NoUpdates);
    assert!(notifier.posts().is_empty());
}

#[tokio::test]
async fn empty_inputs_post_nothing() {
    let portal = portal();
    let notifier = RecordingNotifier::new();
    let outcome = watch(&portal, &notifier).run_on("", "", today()).await.unwrap();
    assert_eq!(outcome, RunOutcome::NoUpdates);
    assert!(portal.opened_urls().is_empty());
}

#[tokio::test]
async fn findings_are_posted_once() {
    let portal = portal();
    let notifier = RecordingNotifier::new();
    let outcome = watch(&portal, &notifier)
        .run_on(
            &format!("{CONTRACT_HIT}:Range Support"),
            "541512:DEPT OF THE ARMY:Army",
            today(),
        )
        .await
        .unwrap();

    let RunOutcome::Posted { blocks } = outcome else {
        panic!("expected a post");
    };
    assert_eq!(notifier.posts(), vec![blocks.clone()]);
    assert_eq!(blocks.len(), 6);
    assert_eq!(blocks[0].content, "**Monday, 02/26/2024.** Contract updates.");

    let contract = parse_heading(&blocks[2].content).unwrap();
    assert_eq!(contract.index, 1);
    assert_eq!(contract.key, HeadingKey::ContractNumber(CONTRACT_HIT.into()));
    assert!(blocks[2].content.contains("**Description:** This exercises option year."));
    assert_eq!(blocks[2].content.matches("\n\n- **Date Signed:**").count(), 2);

    let naics = parse_heading(&blocks[4].content).unwrap();
    assert_eq!(naics.index, 2);
    assert_eq!(naics.key, HeadingKey::Naics("541512".into()));
    assert!(blocks[4].content.contains(" - Army - [View updates]("));
}

#[tokio::test]
async fn post_failure_is_returned() {
    let portal = portal();
    let notifier = RecordingNotifier::failing(WatchError::Webhook {
        status: 400,
        body: "Bad payload".into(),
    });
    let err = watch(&portal, &notifier)
        .run_on(&format!("{CONTRACT_HIT}:Range"), "", today())
        .await
        .unwrap_err();
    assert!(matches!(err, WatchError::Webhook { status: 400, .. }));
    assert_eq!(notifier.posts().len(), 1);
}
