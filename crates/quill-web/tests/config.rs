use std::collections::HashMap;

use quill_web::config::QuillConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = QuillConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.database_url, "sqlite://quill.db?mode=rwc");
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
}

#[test]
fn variables_override_defaults() {
    let config = QuillConfig::from_lookup(lookup(&[
        ("QUILL_DATABASE_URL", "sqlite::memory:"),
        ("QUILL_BIND_ADDR", "0.0.0.0:8080"),
    ]))
    .unwrap();
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.bind_addr.port(), 8080);
}

#[test]
fn bad_bind_addr_is_an_error() {
    let err = QuillConfig::from_lookup(lookup(&[("QUILL_BIND_ADDR", "not-an-addr")])).unwrap_err();
    assert!(err.to_string().contains("QUILL_BIND_ADDR"));
}
