//! Single-pass URL scanner.
//!
//! ```text
//! url       = scheme ":" "//" [ user [ ":" password ] "@" ] host [ ":" port ]
//!             [ "/" path [ "?" query ] [ "#" fragment ] ]
//! host      = "[" *( %x00-5C / %x5E-FF ) "]" / *( any except ":" "/" )
//! ```
//!
//! The scanner walks the input once, left to right, and never backtracks.
//! Every stop character is ASCII, so each slice it hands out starts and ends
//! on a UTF-8 boundary.

use crate::constants::AUTHORITY_PREFIX;
use crate::error::ParseErrorKind;
use crate::scheme;

/// Borrowed components of a scanned URL.
///
/// The scheme is still in its original case; the caller lower-cases it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Parts<'a> {
    pub scheme: &'a str,
    pub user_name: Option<&'a str>,
    pub password: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Cursor over the input.
///
/// # Invariants
///
/// `pos <= input.len()`, `pos` never decreases and always sits on a UTF-8
/// code point boundary.
struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    const fn new(input: &'a str) -> Self {
        Reader { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.input.len()
    }

    // Only called with ASCII bytes, keeping `pos` on a boundary.
    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.input[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consumes bytes up to (not including) the first one matching `stop`.
    fn read_until(&mut self, stop: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        let len = self.input.as_bytes()[start..]
            .iter()
            .position(|&b| stop(b))
            .unwrap_or(self.input.len() - start);
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Returns the first byte matching `stop` without consuming anything.
    fn look_ahead(&self, stop: impl Fn(u8) -> bool) -> Option<u8> {
        self.input.as_bytes()[self.pos..]
            .iter()
            .copied()
            .find(|&b| stop(b))
    }

    fn read_rest(&mut self) -> &'a str {
        let rest = &self.input[self.pos..];
        self.pos = self.input.len();
        rest
    }
}

/// Scans `input` into borrowed components.
///
/// Query values are not decoded here.
pub(crate) fn scan(input: &str) -> Result<Parts<'_>, ParseErrorKind> {
    let mut parts = Parts::default();

    let (end, width) = scheme_boundary(input)?;
    let candidate = &input[..end];
    if !scheme::is_valid(candidate) {
        return Err(ParseErrorKind::InvalidSchemeName {
            scheme: candidate.to_string(),
        });
    }
    parts.scheme = candidate;

    let mut reader = Reader::new(input);
    reader.pos = end + width;

    if !reader.eat_str(AUTHORITY_PREFIX) {
        return Err(ParseErrorKind::NoDoubleSlash {
            position: reader.pos,
        });
    }

    if reader.look_ahead(|b| b == b'@' || b == b'/') == Some(b'@') {
        read_credentials(&mut reader, &mut parts)?;
    }

    parts.host = read_host(&mut reader);

    if reader.eat(b':') {
        parts.port = Some(reader.read_until(|b| b == b'/'));
    }

    if !reader.has_remaining() {
        return Ok(parts);
    }

    if !reader.eat(b'/') {
        return Err(ParseErrorKind::NoSlash {
            position: reader.pos,
        });
    }
    parts.path = reader.read_until(|b| b == b'#' || b == b'?');

    if reader.eat(b'?') {
        parts.query = Some(reader.read_until(|b| b == b'#'));
    }

    if reader.eat(b'#') {
        parts.fragment = Some(reader.read_rest());
    }

    Ok(parts)
}

/// Locates the end of the scheme and the width of the delimiter after it.
///
/// The delimiter is the first `:`. Without one, the character just before
/// the first `/` stands in for it, which lets `http//host` scan as scheme
/// `htt`. A leading `/` has nothing before it and yields no boundary. Only
/// one byte stands in for `:`, so a non-ASCII character there would leave
/// part of itself in the scheme and the scheme is rejected.
fn scheme_boundary(input: &str) -> Result<(usize, usize), ParseErrorKind> {
    if let Some(colon) = input.find(':') {
        return Ok((colon, 1));
    }

    let slash = input.find('/').ok_or(ParseErrorKind::NoUrlCharacter)?;
    let (i, c) = input[..slash]
        .char_indices()
        .next_back()
        .ok_or(ParseErrorKind::NoUrlCharacter)?;

    if !c.is_ascii() {
        return Err(ParseErrorKind::InvalidSchemeName {
            scheme: input[..slash].to_string(),
        });
    }

    Ok((i, 1))
}

fn read_credentials<'a>(
    reader: &mut Reader<'a>,
    parts: &mut Parts<'a>,
) -> Result<(), ParseErrorKind> {
    parts.user_name = Some(reader.read_until(|b| b == b':' || b == b'@'));

    if reader.eat(b':') {
        parts.password = Some(reader.read_until(|b| b == b'@'));
    }

    if !reader.eat(b'@') {
        return Err(ParseErrorKind::NoAtSign {
            position: reader.pos,
        });
    }

    Ok(())
}

/// Reads a host. A bracketed IPv6 literal runs through its closing `]`
/// (brackets kept); anything else runs to `:`, `/` or the end.
fn read_host<'a>(reader: &mut Reader<'a>) -> &'a str {
    let start = reader.pos;

    if reader.eat(b'[') {
        reader.read_until(|b| b == b']');
        reader.eat(b']');
    } else {
        reader.read_until(|b| b == b':' || b == b'/');
    }

    &reader.input[start..reader.pos]
}
