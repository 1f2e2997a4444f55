//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use lite_url::prelude::*;
//!
//! let url = ParsedUrl::parse("http://example.com/").unwrap();
//! assert_eq!(url.port(), None);
//! ```

pub use crate::{
    // Core types
    ParsedUrl, QueryParams,
    // Errors
    DecodeError, ParseError, ParseErrorKind, PortError, QueryError,
    // Constants
    MAX_PORT, MIN_PORT,
};
