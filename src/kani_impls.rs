//! Kani proof harnesses for the scanner and decoder.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{ParsedUrl, percent, scanner, scheme};

/// Bytes the scanner treats specially, plus a few ordinary ones.
const URL_BYTES: &[u8] = b"aZ1:/@[]?#&=%+.-_";

/// Generate an ASCII string of `N` grammar-relevant characters
fn arbitrary_url_text<const N: usize>() -> String {
    (0..N)
        .map(|_| {
            let idx: usize = kani::any();
            URL_BYTES[idx % URL_BYTES.len()] as char
        })
        .collect()
}

/// Proof: the scanner never panics and every slice it returns lies inside the input
#[kani::proof]
#[kani::unwind(10)]
fn proof_scan_never_panics() {
    let input = arbitrary_url_text::<8>();
    if let Ok(parts) = scanner::scan(&input) {
        assert!(parts.scheme.len() <= input.len());
        assert!(parts.host.len() <= input.len());
        assert!(parts.path.len() <= input.len());
    }
}

/// Proof: an accepted scheme is non-empty and free of digits
#[kani::proof]
#[kani::unwind(10)]
fn proof_scheme_is_valid_after_scan() {
    let input = arbitrary_url_text::<8>();
    if let Ok(parts) = scanner::scan(&input) {
        assert!(scheme::is_valid(parts.scheme));
        assert!(!parts.scheme.bytes().any(|b| b.is_ascii_digit()));
    }
}

/// Proof: decoding never panics and never grows its input
#[kani::proof]
#[kani::unwind(8)]
fn proof_decode_never_grows() {
    let input = arbitrary_url_text::<6>();
    if let Ok(decoded) = percent::decode(&input) {
        assert!(decoded.len() <= input.len());
    }
}

/// Proof: a parsed port is always within 1..=65535
#[kani::proof]
#[kani::unwind(12)]
fn proof_port_in_range() {
    let digits: [u8; 5] = kani::any();
    kani::assume(digits.iter().all(u8::is_ascii_digit));
    let port: String = digits.iter().map(|&b| b as char).collect();

    let url = ParsedUrl::parse(&format!("h://x:{port}")).expect("digits-only port scans");
    if let Some(p) = url.port() {
        assert!(p >= 1);
    }
}
