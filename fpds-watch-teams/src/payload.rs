//! Adaptive card envelope accepted by Teams incoming webhooks.

use fpds_watch_core::DisplayBlock;
use serde::{Deserialize, Serialize};

/// `contentType` of an adaptive card attachment.
pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
/// Adaptive card schema version the webhook is sent.
pub const ADAPTIVE_CARD_VERSION: &str = "1.0";

/// Top-level webhook message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    /// Always `"message"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Exactly one adaptive card attachment.
    pub attachments: Vec<Attachment>,
}

/// One message attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// MIME type of `content`.
    pub content_type: String,
    /// The card itself.
    pub content: AdaptiveCard,
}

/// Adaptive card body holding a single container of text blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveCard {
    /// Always `"AdaptiveCard"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Card schema version.
    pub version: String,
    /// Card body.
    pub body: Vec<Container>,
    /// Teams rendering hints.
    pub msteams: MsTeams,
}

/// Container element grouping the report blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Always `"Container"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Report blocks in order.
    pub items: Vec<DisplayBlock>,
}

/// Teams-specific card options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsTeams {
    /// `"Full"` renders the card across the whole conversation width.
    pub width: String,
}

impl WebhookMessage {
    /// Wrap `blocks` in a full-width adaptive card message.
    ///
    /// Pure: the same blocks always yield the same message.
    #[must_use]
    pub fn from_blocks(blocks: &[DisplayBlock]) -> Self {
        Self {
            kind: "message".to_string(),
            attachments: vec![Attachment {
                content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
                content: AdaptiveCard {
                    kind: "AdaptiveCard".to_string(),
                    version: ADAPTIVE_CARD_VERSION.to_string(),
                    body: vec![Container {
                        kind: "Container".to_string(),
                        items: blocks.to_vec(),
                    }],
                    msteams: MsTeams {
                        width: "Full".to_string(),
                    },
                },
            }],
        }
    }
}
