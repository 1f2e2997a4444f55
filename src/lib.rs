//! Lightweight URL and URI parser (RFC 1738, RFC 3986).
//!
//! This crate splits a URL string into its structural components in a single
//! left-to-right pass. It does no network I/O, no normalization beyond
//! lower-casing the scheme, and decodes nothing except query values.
//!
//! # Overview
//!
//! URLs are read with the structure:
//!
//! ```text
//! scheme://[user[:password]@]host[:port][/path[?query][#fragment]]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lite_url::ParsedUrl;
//!
//! let url = ParsedUrl::parse("https://user:pw@example.com:8080/a/b?k=v%21#top").unwrap();
//!
//! assert_eq!(url.scheme(), "https");
//! assert_eq!(url.user_name(), Some("user"));
//! assert_eq!(url.host(), "example.com");
//! assert_eq!(url.port(), Some(8080));
//! assert_eq!(url.path(), "a/b");
//! assert_eq!(url.query_param("k"), Some("v!"));
//! assert_eq!(url.fragment(), Some("top"));
//! ```
//!
//! # Errors
//!
//! Parsing stops at the first grammar violation and reports it as a
//! [`ParseErrorKind`]:
//!
//! | Kind | Cause |
//! |------|-------|
//! | `NoUrlCharacter` | no `:` (or usable `/`) ends the scheme |
//! | `InvalidSchemeName` | scheme empty or not letters, `+`, `-`, `.` |
//! | `NoDoubleSlash` | scheme not followed by `//` |
//! | `NoAtSign` | credentials not closed by `@` |
//! | `NoSlash` | authority followed by something other than `/` |
//! | `InvalidQuery` | a query value has a bad `%` escape |
//!
//! The port is validated lazily: a URL with port `99999` parses, but
//! [`ParsedUrl::port`] returns `None` for it.
//!
//! # Features
//!
//! - `serde`: (de)serialize [`ParsedUrl`] as its source string
//! - `log`: emit `debug`/`trace` records through the `log` facade

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod logging;
mod percent;
pub mod prelude;
mod query;
mod scanner;
mod scheme;
mod url;

pub use constants::{MAX_PORT, MIN_PORT};
pub use error::{DecodeError, ParseError, ParseErrorKind, PortError, QueryError};
pub use percent::decode;
pub use query::QueryParams;
pub use scheme::is_valid as is_valid_scheme;
pub use url::ParsedUrl;

/// Parses a URL from a string.
///
/// Shorthand for [`ParsedUrl::parse`].
///
/// # Errors
///
/// Returns `ParseError` if the input does not scan as a URL or a query value
/// cannot be decoded.
///
/// # Examples
///
/// ```
/// use lite_url::ParseErrorKind;
///
/// let url = lite_url::parse("ws://[::1]:9000/socket").unwrap();
/// assert_eq!(url.host(), "[::1]");
///
/// let err = lite_url::parse("ws:/socket").unwrap_err();
/// assert!(matches!(err.kind, ParseErrorKind::NoDoubleSlash { .. }));
/// ```
pub fn parse(input: &str) -> Result<ParsedUrl, ParseError> {
    ParsedUrl::parse(input)
}
