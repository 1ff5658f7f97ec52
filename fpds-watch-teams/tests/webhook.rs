use fpds_watch_core::{DisplayBlock, Notifier, WatchError};
use fpds_watch_teams::TeamsWebhook;
use httpmock::prelude::*;
use serde_json::json;

fn report() -> Vec<DisplayBlock> {
    vec![
        DisplayBlock::text("**Monday, 02/26/2024.** Contract updates."),
        DisplayBlock::spacer(),
    ]
}

#[tokio::test]
async fn posts_adaptive_card_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/hook")
                .header("content-type", "application/json")
                .json_body(json!({
                    "type": "message",
                    "attachments": [{
                        "contentType": "application/vnd.microsoft.card.adaptive",
                        "content": {
                            "type": "AdaptiveCard",
                            "version": "1.0",
                            "body": [{
                                "type": "Container",
                                "items": [
                                    {"type": "TextBlock", "text": "**Monday, 02/26/2024.** Contract updates.", "wrap": true},
                                    {"type": "TextBlock", "text": "", "wrap": true}
                                ]
                            }],
                            "msteams": {"width": "Full"}
                        }
                    }]
                }));
            then.status(200).body("1");
        })
        .await;

    let hook = TeamsWebhook::parse(&server.url("/hook")).unwrap();
    hook.post(&report()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_a_webhook_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/hook");
            then.status(500).body("boom");
        })
        .await;

    let hook = TeamsWebhook::parse(&server.url("/hook")).unwrap();
    let err = hook.post(&report()).await.unwrap_err();
    assert_eq!(
        err,
        WatchError::Webhook {
            status: 500,
            body: "boom".to_string()
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Port 9 (discard) on loopback is closed in test environments.
    let hook = TeamsWebhook::parse("http://127.0.0.1:9/hook").unwrap();
    let err = hook.post(&report()).await.unwrap_err();
    assert!(matches!(err, WatchError::Transport(_)), "got {err:?}");
}

#[test]
fn rejects_invalid_urls() {
    assert!(matches!(
        TeamsWebhook::parse("not a url"),
        Err(WatchError::InvalidArg(_))
    ));
    assert!(matches!(
        TeamsWebhook::parse("ftp://example.com/hook"),
        Err(WatchError::InvalidArg(_))
    ));
    assert_eq!(
        TeamsWebhook::parse("https://example.com/hook").unwrap().url().as_str(),
        "https://example.com/hook"
    );
}
