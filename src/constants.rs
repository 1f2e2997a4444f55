//! Constants for URL scanning and port validation.

/// Lowest port number accepted by [`ParsedUrl::port`](crate::ParsedUrl::port).
pub const MIN_PORT: u16 = 1;

/// Highest port number accepted by [`ParsedUrl::port`](crate::ParsedUrl::port).
pub const MAX_PORT: u16 = u16::MAX;

/// Characters allowed in a scheme name besides ASCII letters.
pub(crate) const SCHEME_EXTRA_CHARS: &[u8] = b"+-.";

/// The marker that introduces the authority after the scheme.
pub(crate) const AUTHORITY_PREFIX: &str = "//";
