//! Scheme name validation.
//!
//! ```text
//! scheme = 1*( ALPHA / "+" / "-" / "." )
//! ```
//!
//! Programs interpreting URLs treat upper case letters as equivalent to lower
//! case in scheme names, so accepted schemes are stored lower-cased.

use crate::constants::SCHEME_EXTRA_CHARS;

/// Returns true if `name` is a non-empty run of ASCII letters, `+`, `-` or `.`.
///
/// # Examples
///
/// ```
/// use lite_url::is_valid_scheme;
///
/// assert!(is_valid_scheme("svn+ssh"));
/// assert!(!is_valid_scheme("h2c"));
/// assert!(!is_valid_scheme(""));
/// ```
#[must_use]
pub fn is_valid(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_scheme_byte)
}

fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || SCHEME_EXTRA_CHARS.contains(&b)
}

/// Lower-cases a scheme that already passed [`is_valid`].
pub(crate) fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}
