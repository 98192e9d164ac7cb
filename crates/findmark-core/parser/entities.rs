//! Character reference decoding for text and attribute values
//!
//! Handles the named set CMS output actually uses plus numeric references.
//! Anything unrecognized passes through literally, so decoding never fails.

/// Longest entity body we will attempt to decode, in bytes
const MAX_ENTITY_LEN: usize = 32;

/// Decode character references in a run of character data
pub(crate) fn decode(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        if let Some((decoded, consumed)) = decode_one(tail) {
            out.push(decoded);
            rest = &tail[consumed..];
        } else {
            out.push('&');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Decode a single reference at the start of `tail` (which begins with `&`)
///
/// Returns the decoded character and the number of bytes consumed, or `None`
/// when the reference is unknown or malformed.
fn decode_one(tail: &str) -> Option<(char, usize)> {
    let semi = tail[1..].find(';')?;
    if semi == 0 || semi > MAX_ENTITY_LEN {
        return None;
    }
    let body = &tail[1..=semi];
    let decoded = if let Some(numeric) = body.strip_prefix('#') {
        decode_numeric(numeric)?
    } else {
        match body {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            _ => return None,
        }
    };
    Some((decoded, semi + 2))
}

fn decode_numeric(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    if code == 0 {
        return None;
    }
    char::from_u32(code)
}
