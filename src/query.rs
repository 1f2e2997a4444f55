//! Query parameters of a parsed URL.

use std::collections::BTreeMap;

use crate::error::QueryError;
use crate::logging;
use crate::percent;

/// Decoded query parameters.
///
/// Keys are kept raw and values are percent-decoded. When a key appears more
/// than once the last occurrence wins. Iteration is sorted by key.
///
/// # Examples
///
/// ```
/// use lite_url::QueryParams;
///
/// let params = QueryParams::parse("q=rust+lang&page=2&page=3").unwrap();
/// assert_eq!(params.get("q"), Some("rust lang"));
/// assert_eq!(params.get("page"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses query parameters from a raw query string (without leading '?').
    ///
    /// Pairs are separated by `&` and split on their first `=`. A pair
    /// without `=` maps to an empty value, so an empty pair is the empty key.
    /// A single trailing `&` does not start another pair.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if a value is not valid percent-encoded text.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let mut params = BTreeMap::new();

        for pair in input.split_terminator('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));

            let decoded =
                percent::decode(value).map_err(|error| QueryError::InvalidPercentEncoding {
                    name: name.to_string(),
                    value: value.to_string(),
                    error,
                })?;

            if params.insert(name.to_string(), decoded).is_some() {
                logging::trace!("query parameter '{name}' repeated; keeping last value");
            }
        }

        Ok(Self { params })
    }

    /// Returns the decoded value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of distinct parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.params.serialize(serializer)
    }
}
