use quill_core::error::CoreError;
use quill_core::models::text_piece::{NewTextPiece, TextPiece};

#[test]
fn content_is_kept_verbatim() {
    let piece = NewTextPiece::new("  Test Content\n").unwrap();
    assert_eq!(piece.content(), "  Test Content\n");
}

#[test]
fn empty_content_is_rejected() {
    let err = NewTextPiece::new("").unwrap_err();
    assert!(matches!(err, CoreError::EmptyField(ref f) if f == "content"));
}

#[test]
fn whitespace_only_content_is_accepted() {
    assert!(NewTextPiece::new("   ").is_ok());
}

#[test]
fn missing_field_is_rejected() {
    let err = NewTextPiece::from_field(None).unwrap_err();
    assert!(matches!(err, CoreError::MissingField(ref f) if f == "content"));
    assert_eq!(err.to_string(), "missing required field: content");
}

#[test]
fn present_field_is_validated() {
    assert!(NewTextPiece::from_field(Some(String::new())).is_err());
    let piece = NewTextPiece::from_field(Some("hello".to_string())).unwrap();
    assert_eq!(piece.into_content(), "hello");
}

#[test]
fn text_piece_serializes_as_flat_object() {
    let piece = TextPiece {
        id: 3_000_000_000,
        content: "Test Content".to_string(),
    };
    let json = serde_json::to_value(&piece).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 3_000_000_000i64, "content": "Test Content" }));
}

#[test]
fn errors_name_their_field() {
    assert_eq!(NewTextPiece::new("").unwrap_err().field(), "content");
    assert_eq!(CoreError::InvalidEncoding("content".to_string()).field(), "content");
}
