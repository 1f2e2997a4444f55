//! Error types for URL parsing.

use std::error::Error;
use std::fmt;

/// Errors that can occur when parsing a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// Every variant is terminal: the scan stops at the first violation and no
/// partially populated result is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Neither `:` nor a usable `/` marks the end of the scheme
    NoUrlCharacter,
    /// Scheme is empty or contains characters other than letters, `+`, `-`, `.`
    InvalidSchemeName {
        /// The rejected scheme text
        scheme: String,
    },
    /// The scheme is not followed by `//`
    NoDoubleSlash {
        /// Byte offset where `//` was expected
        position: usize,
    },
    /// Credentials are not terminated by `@`
    NoAtSign {
        /// Byte offset where `@` was expected
        position: usize,
    },
    /// Something other than `/` follows the authority
    NoSlash {
        /// Byte offset where `/` was expected
        position: usize,
    },
    /// A query value could not be decoded
    InvalidQuery(QueryError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URL '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUrlCharacter => {
                write!(f, "no ':' or '/' found to terminate the scheme")
            }
            Self::InvalidSchemeName { scheme } => write!(
                f,
                "invalid scheme '{scheme}'; only letters, '+', '-' and '.' allowed"
            ),
            Self::NoDoubleSlash { position } => {
                write!(f, "expected '//' after scheme at position {position}")
            }
            Self::NoAtSign { position } => {
                write!(f, "expected '@' after credentials at position {position}")
            }
            Self::NoSlash { position } => {
                write!(f, "expected '/' after authority at position {position}")
            }
            Self::InvalidQuery(e) => write!(f, "invalid query string: {e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidQuery(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors for query string decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A parameter value is not valid percent-encoded text
    InvalidPercentEncoding {
        /// Parameter name
        name: String,
        /// The raw value
        value: String,
        /// Why decoding failed
        error: DecodeError,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPercentEncoding { name, value, error } => {
                write!(f, "value '{value}' of parameter '{name}': {error}")
            }
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPercentEncoding { error, .. } => Some(error),
        }
    }
}

/// Errors for percent-decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer than two characters follow a `%`
    InvalidEncoding {
        /// Byte offset of the `%`
        position: usize,
    },
    /// A character after `%` is not a hexadecimal digit
    NonHexDigit {
        /// Byte offset of the offending character
        position: usize,
    },
    /// The decoded bytes are not valid UTF-8
    NotUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding { position } => {
                write!(f, "truncated percent escape at position {position}")
            }
            Self::NonHexDigit { position } => {
                write!(f, "invalid hex digit at position {position}")
            }
            Self::NotUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
        }
    }
}

impl Error for DecodeError {}

/// Errors for converting the raw port string into a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    /// The URL has no port
    Missing,
    /// A `:` follows the host but no port text
    Empty,
    /// The port contains characters other than ASCII digits
    NotNumeric {
        /// The raw port text
        value: String,
    },
    /// The port is 0 or greater than 65535
    OutOfRange {
        /// The raw port text
        value: String,
    },
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no port specified"),
            Self::Empty => write!(f, "port cannot be empty"),
            Self::NotNumeric { value } => {
                write!(f, "port '{value}' is not a decimal number")
            }
            Self::OutOfRange { value } => {
                write!(f, "port '{value}' is outside the range 1-65535")
            }
        }
    }
}

impl Error for PortError {}
