//! Property-based tests validating the scanner against the URL grammar.
//!
//! These tests generate random URLs component by component and verify the
//! parser hands every component back unchanged.

use proptest::prelude::*;

use lite_url::{ParseErrorKind, ParsedUrl, PortError, decode, is_valid_scheme};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Valid scheme characters
    const SCHEME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ+-.";

    /// Characters safe in user names, passwords and hosts (no delimiters)
    const AUTH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~";

    /// Characters safe in a path (no '?' or '#')
    const PATH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~/:@!$'()*,;=";

    /// Characters safe in a query key or unencoded value (no '&', '=', '#', '%', '+')
    const QUERY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~/:@!$'()*,;";

    fn text(chars: &'static [u8], len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(chars.to_vec()), len)
            .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
    }

    /// Generate a valid scheme (1-12 chars)
    pub fn scheme() -> impl Strategy<Value = String> {
        text(SCHEME_CHARS, 1..=12)
    }

    /// Generate a user name or password
    pub fn credential() -> impl Strategy<Value = String> {
        text(AUTH_CHARS, 0..=12)
    }

    /// Generate a registered name host (never empty)
    pub fn reg_name() -> impl Strategy<Value = String> {
        text(AUTH_CHARS, 1..=24)
    }

    /// Generate a bracketed IPv6 literal (full form)
    pub fn ipv6_literal() -> impl Strategy<Value = String> {
        prop::collection::vec(0u16..=0xffff, 8).prop_map(|groups| {
            let addr = groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<_>>()
                .join(":");
            format!("[{addr}]")
        })
    }

    /// Generate a host (registered name or IPv6 literal)
    pub fn host() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => reg_name(),
            1 => ipv6_literal(),
        ]
    }

    /// Generate a path without the leading slash
    pub fn path() -> impl Strategy<Value = String> {
        text(PATH_CHARS, 0..=32)
    }

    /// Generate a query key
    pub fn query_key() -> impl Strategy<Value = String> {
        text(QUERY_CHARS, 1..=8)
    }

    /// Generate a query value with no encoding
    pub fn query_value() -> impl Strategy<Value = String> {
        text(QUERY_CHARS, 0..=12)
    }

    /// Generate a fragment (anything after '#' is kept verbatim)
    pub fn fragment() -> impl Strategy<Value = String> {
        text(PATH_CHARS, 0..=16)
    }

    /// Generate arbitrary UTF-8 text for encoding round-trips
    pub fn any_text() -> impl Strategy<Value = String> {
        ".{0,16}"
    }
}

/// Percent-encodes every byte, spaces as '+'.
fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| if b == b' ' { "+".to_string() } else { format!("%{b:02X}") })
        .collect()
}

mod scheme_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_schemes_are_accepted(s in scheme()) {
            prop_assert!(is_valid_scheme(&s), "rejected scheme: {}", s);
        }

        #[test]
        fn scheme_is_lowercased(s in scheme(), h in reg_name()) {
            let url = ParsedUrl::parse(&format!("{s}://{h}")).unwrap();
            prop_assert_eq!(url.scheme(), s.to_ascii_lowercase());
        }

        #[test]
        fn digit_in_scheme_is_rejected(s in scheme(), d in 0u8..=9, h in reg_name()) {
            let input = format!("{s}{d}://{h}");
            let err = ParsedUrl::parse(&input).unwrap_err();
            let is_invalid_scheme = matches!(err.kind, ParseErrorKind::InvalidSchemeName { .. });
            prop_assert!(is_invalid_scheme);
        }

        #[test]
        fn missing_double_slash_is_rejected(s in scheme(), h in reg_name()) {
            let err = ParsedUrl::parse(&format!("{s}:{h}")).unwrap_err();
            prop_assert_eq!(err.kind, ParseErrorKind::NoDoubleSlash { position: s.len() + 1 });
        }
    }
}

mod authority_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn scheme_host_only(s in scheme(), h in host()) {
            let url = ParsedUrl::parse(&format!("{s}://{h}")).unwrap();
            prop_assert_eq!(url.host(), h.as_str());
            prop_assert_eq!(url.path(), "");
            prop_assert_eq!(url.query(), None);
            prop_assert_eq!(url.fragment(), None);
        }

        #[test]
        fn credentials_are_recovered(
            s in scheme(),
            user in credential(),
            pass in prop::option::of(credential()),
            h in host(),
        ) {
            let creds = match &pass {
                Some(p) => format!("{user}:{p}"),
                None => user.clone(),
            };
            let url = ParsedUrl::parse(&format!("{s}://{creds}@{h}/")).unwrap();

            prop_assert_eq!(url.user_name(), Some(user.as_str()));
            prop_assert_eq!(url.password(), pass.as_deref());
            prop_assert_eq!(url.host(), h.as_str());
        }

        #[test]
        fn valid_ports_convert(s in scheme(), h in host(), port in 1u16..=65535) {
            let url = ParsedUrl::parse(&format!("{s}://{h}:{port}/x")).unwrap();
            prop_assert_eq!(url.host(), h.as_str());
            prop_assert_eq!(url.port(), Some(port));
        }

        #[test]
        fn oversized_ports_parse_but_do_not_convert(h in reg_name(), port in 65536u32..=9_999_999) {
            let url = ParsedUrl::parse(&format!("http://{h}:{port}/")).unwrap();
            let expected = port.to_string();
            prop_assert_eq!(url.port_str(), Some(expected.as_str()));
            prop_assert_eq!(url.try_port(), Err(PortError::OutOfRange { value: expected }));
        }
    }
}

mod full_url_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn every_component_is_recovered(
            s in scheme(),
            h in host(),
            port in prop::option::of(1u16..=65535),
            p in path(),
            pairs in prop::collection::vec((query_key(), query_value()), 0..=4),
            frag in prop::option::of(fragment()),
        ) {
            let mut input = format!("{s}://{h}");
            if let Some(port) = port {
                input.push_str(&format!(":{port}"));
            }
            input.push('/');
            input.push_str(&p);

            let query = pairs
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            if !pairs.is_empty() {
                input.push('?');
                input.push_str(&query);
            }
            if let Some(frag) = &frag {
                input.push('#');
                input.push_str(frag);
            }

            let url = ParsedUrl::parse(&input).unwrap();

            prop_assert_eq!(url.host(), h.as_str());
            prop_assert_eq!(url.port(), port);
            prop_assert_eq!(url.path(), p.as_str());
            prop_assert_eq!(url.fragment(), frag.as_deref());
            if pairs.is_empty() {
                prop_assert_eq!(url.query(), None);
            } else {
                prop_assert_eq!(url.query(), Some(query.as_str()));
            }

            // Later duplicates overwrite earlier ones.
            for (k, _) in &pairs {
                let last = pairs.iter().rev().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
                prop_assert_eq!(url.query_param(k), last);
            }
        }

        #[test]
        fn reparse_scheme_host_path(s in scheme(), h in host(), p in path(), q in query_value()) {
            let url = ParsedUrl::parse(&format!("{s}://{h}/{p}?k={q}#f")).unwrap();
            let rebuilt = format!("{}://{}/{}", url.scheme(), url.host(), url.path());
            let reparsed = ParsedUrl::parse(&rebuilt).unwrap();

            prop_assert_eq!(reparsed.scheme(), url.scheme());
            prop_assert_eq!(reparsed.host(), url.host());
            prop_assert_eq!(reparsed.path(), url.path());
        }

        #[test]
        fn parse_never_panics(input in ".{0,64}") {
            let _ = ParsedUrl::parse(&input);
        }
    }
}

mod decode_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn encoded_text_decodes_back(t in any_text()) {
            prop_assert_eq!(decode(&encode(&t)), Ok(t));
        }

        #[test]
        fn encoded_query_value_decodes_back(t in any_text()) {
            let url = ParsedUrl::parse(&format!("http://h/?v={}", encode(&t))).unwrap();
            prop_assert_eq!(url.query_param("v"), Some(t.as_str()));
        }

        #[test]
        fn unencoded_text_is_unchanged(v in query_value()) {
            prop_assert_eq!(decode(&v), Ok(v.clone()));
        }
    }
}

mod edge_case_tests {
    use super::*;

    #[test]
    fn protocol_relative_input_has_no_scheme() {
        let err = ParsedUrl::parse("//cdn.example.com/lib.js").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoUrlCharacter);
    }

    #[test]
    fn slash_fallback_consumes_character_before_slash() {
        let url = ParsedUrl::parse("http//example.com/index").unwrap();
        assert_eq!(url.scheme(), "htt");
        assert_eq!(url.host(), "example.com");
        assert_eq!(url.path(), "index");
    }

    #[test]
    fn slash_fallback_with_non_ascii_is_invalid_scheme() {
        let err = ParsedUrl::parse("hé//host").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidSchemeName {
                scheme: "hé".to_string()
            }
        );
        assert!(!ParsedUrl::is_valid("HTTPü//x"));
    }

    #[test]
    fn empty_query_pair_is_empty_key() {
        let url = ParsedUrl::parse("http://h/p?a=1&&b=2").unwrap();
        assert_eq!(url.query_param(""), Some(""));
        assert_eq!(url.query_params().len(), 3);

        let url = ParsedUrl::parse("http://h/p?&").unwrap();
        assert_eq!(url.query_param(""), Some(""));
    }

    #[test]
    fn truncated_escape_fails_parse() {
        let err = ParsedUrl::parse("http://h/?a=%2").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::InvalidQuery(_)));
    }

    #[test]
    fn decode_space_forms() {
        assert_eq!(decode("a%20b+c").unwrap(), "a b c");
    }
}
