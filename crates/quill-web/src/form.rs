use percent_encoding::percent_decode;

use quill_core::error::CoreError;

/// Pull one field out of an `application/x-www-form-urlencoded` body.
///
/// Unlike a serde form extractor this decodes strictly: percent-escapes that
/// do not form valid UTF-8 are rejected instead of being replaced with
/// U+FFFD. The first occurrence of the field wins.
pub fn decode_field(body: &[u8], field: &str) -> Result<Option<String>, CoreError> {
    for pair in body.split(|&b| b == b'&') {
        if pair.is_empty() {
            continue;
        }

        let (name, value) = match pair.iter().position(|&b| b == b'=') {
            Some(eq) => (&pair[..eq], &pair[eq + 1..]),
            None => (pair, &[][..]),
        };
        if decode(name).as_deref() != Some(field) {
            continue;
        }

        return decode(value)
            .map(Some)
            .ok_or_else(|| CoreError::InvalidEncoding(field.to_string()));
    }

    Ok(None)
}

fn decode(raw: &[u8]) -> Option<String> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}
