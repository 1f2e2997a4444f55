//! Percent-decoding for query parameter values.

use crate::error::DecodeError;

/// Decodes a query parameter value.
///
/// `+` becomes a space and `%XX` becomes the byte `0xXX`. Every other
/// character is copied through unchanged. Only query values go through this;
/// keys, host, path and fragment stay raw.
///
/// # Errors
///
/// Returns `DecodeError` if:
/// - a `%` is followed by fewer than two characters
/// - either character after `%` is not a hexadecimal digit
/// - the decoded bytes are not valid UTF-8
///
/// # Examples
///
/// ```
/// use lite_url::{decode, DecodeError};
///
/// assert_eq!(decode("a%20b+c").unwrap(), "a b c");
/// assert_eq!(decode("a%2"), Err(DecodeError::InvalidEncoding { position: 1 }));
/// ```
pub fn decode(value: &str) -> Result<String, DecodeError> {
    let bytes = value.as_bytes();

    // Nothing to rewrite, skip the byte buffer.
    if !bytes.iter().any(|&b| b == b'%' || b == b'+') {
        return Ok(value.to_string());
    }

    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let [hi, lo, ..] = bytes[i + 1..] else {
                    return Err(DecodeError::InvalidEncoding { position: i });
                };
                let Some(hi) = hex_value(hi) else {
                    return Err(DecodeError::NonHexDigit { position: i + 1 });
                };
                let Some(lo) = hex_value(lo) else {
                    return Err(DecodeError::NonHexDigit { position: i + 2 });
                };
                decoded.push((hi << 4) | lo);
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|_| DecodeError::NotUtf8)
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
