use quill_core::error::CoreError;
use quill_web::form::decode_field;

#[test]
fn plus_and_percent_escapes_are_decoded() {
    let value = decode_field(b"content=Test+Content%21", "content").unwrap();
    assert_eq!(value.as_deref(), Some("Test Content!"));
}

#[test]
fn multibyte_utf8_is_decoded() {
    let value = decode_field(b"content=caf%C3%A9", "content").unwrap();
    assert_eq!(value.as_deref(), Some("café"));
}

#[test]
fn other_fields_are_ignored() {
    let value = decode_field(b"title=x&content=body&extra", "content").unwrap();
    assert_eq!(value.as_deref(), Some("body"));
}

#[test]
fn absent_field_is_none() {
    assert_eq!(decode_field(b"title=x", "content").unwrap(), None);
    assert_eq!(decode_field(b"", "content").unwrap(), None);
}

#[test]
fn field_without_value_is_empty() {
    assert_eq!(decode_field(b"content", "content").unwrap().as_deref(), Some(""));
    assert_eq!(decode_field(b"content=", "content").unwrap().as_deref(), Some(""));
}

#[test]
fn first_occurrence_wins() {
    let value = decode_field(b"content=first&content=second", "content").unwrap();
    assert_eq!(value.as_deref(), Some("first"));
}

#[test]
fn invalid_utf8_is_an_error() {
    let err = decode_field(b"content=%FF", "content").unwrap_err();
    assert!(matches!(err, CoreError::InvalidEncoding(ref f) if f == "content"));
}

#[test]
fn invalid_utf8_in_other_fields_is_ignored() {
    let value = decode_field(b"junk=%FF&content=ok", "content").unwrap();
    assert_eq!(value.as_deref(), Some("ok"));
}
