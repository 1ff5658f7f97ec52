use serde::{Deserialize, Serialize};

/// Wire kind of a display block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BlockKind {
    /// Wrapped markdown text.
    #[default]
    TextBlock,
}

/// One atomic text unit of the outbound chat-card body.
///
/// Serializes as `{"type": "TextBlock", "text": ..., "wrap": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayBlock {
    /// Block kind.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Markdown content; empty for spacer blocks.
    #[serde(rename = "text")]
    pub content: String,
    /// Always true for blocks this crate produces.
    pub wrap: bool,
}

impl DisplayBlock {
    /// A wrapped text block.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::TextBlock,
            content: content.into(),
            wrap: true,
        }
    }

    /// An empty block used to separate entries.
    #[must_use]
    pub fn spacer() -> Self {
        Self::text("")
    }

    /// True for spacer blocks.
    #[must_use]
    pub fn is_spacer(&self) -> bool {
        self.content.is_empty()
    }
}
