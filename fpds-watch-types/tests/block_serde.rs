use fpds_watch_types::{BlockKind, DisplayBlock};

#[test]
fn text_block_wire_shape() {
    let block = DisplayBlock::text("**1. Name -** 123");
    let json = serde_json::to_value(&block).expect("serialize block");
    assert_eq!(
        json,
        serde_json::json!({"type": "TextBlock", "text": "**1. Name -** 123", "wrap": true})
    );
}

#[test]
fn spacer_is_empty_wrapped_text() {
    let spacer = DisplayBlock::spacer();
    assert!(spacer.is_spacer());
    assert!(spacer.wrap);
    assert_eq!(spacer.kind, BlockKind::TextBlock);
    assert_eq!(
        serde_json::to_string(&spacer).expect("serialize spacer"),
        r#"{"type":"TextBlock","text":"","wrap":true}"#
    );
}

#[test]
fn block_roundtrip() {
    let block = DisplayBlock::text("a\n\nb");
    let json = serde_json::to_string(&block).expect("serialize block");
    let de: DisplayBlock = serde_json::from_str(&json).expect("deserialize block");
    assert_eq!(de, block);
}
