//! Extension Tokenizer Tests.
//!
//! Verifies both token grammars against concrete inputs, including the
//! delimiter back-off rule and the malformed and version-overflow cases.
//!
//! # Coverage Matrix
//!
//! - Short form: bare letter, major only, major and minor, bare `p`.
//! - Long form: unversioned, major only, major and minor, `p` inside the name.
//! - Delimiters: optional `_`, doubled `_`, adjacent tokens without `_`.
//! - Errors: uppercase letters, invalid bytes in long names, version overflow.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvhwcap_core::common::{DecimalError, TokenError};
use rvhwcap_core::isa::token::{ExtensionToken, is_long_prefix, next_token, tokens};

/// Compact view of a token: (name, major, minor, long).
type Decoded = (String, Option<u32>, u32, bool);

fn decoded(token: &ExtensionToken<'_>) -> Decoded {
    (
        String::from_utf8_lossy(token.name).into_owned(),
        token.major,
        token.minor,
        token.long,
    )
}

fn decode(isa: &str) -> Vec<Decoded> {
    tokens(isa).map(|t| decoded(&t)).collect()
}

fn short(name: &str, major: Option<u32>, minor: u32) -> Decoded {
    (name.to_string(), major, minor, false)
}

fn long(name: &str, major: Option<u32>, minor: u32) -> Decoded {
    (name.to_string(), major, minor, true)
}

// ──────────────────────────────────────────────────────────
// Short form
// ──────────────────────────────────────────────────────────

#[test]
fn test_base_letters_without_versions() {
    assert_eq!(
        decode("imafdc"),
        vec![
            short("i", None, 0),
            short("m", None, 0),
            short("a", None, 0),
            short("f", None, 0),
            short("d", None, 0),
            short("c", None, 0),
        ]
    );
}

#[rstest]
#[case("i2", short("i", Some(2), 0))]
#[case("m2p0", short("m", Some(2), 0))]
#[case("a2p1", short("a", Some(2), 1))]
#[case("f10p22", short("f", Some(10), 22))]
#[case("v1p0", short("v", Some(1), 0))]
fn test_short_form_versions(#[case] isa: &str, #[case] expected: Decoded) {
    let (token, next) = next_token(isa.as_bytes(), 0);
    assert_eq!(decoded(&token), expected);
    assert_eq!(token.error, None);
    assert_eq!(next, isa.len());
}

#[test]
fn test_short_form_version_then_next_letter() {
    assert_eq!(
        decode("i2p1m2a"),
        vec![
            short("i", Some(2), 1),
            short("m", Some(2), 0),
            short("a", None, 0)
        ]
    );
}

#[test]
fn test_short_form_bare_p_is_not_consumed() {
    let (token, next) = next_token(b"i2p", 0);
    assert_eq!(decoded(&token), short("i", Some(2), 0));
    assert_eq!(next, 2, "the `p` starts the next token");
    assert_eq!(decode("i2p"), vec![short("i", Some(2), 0), short("p", None, 0)]);
}

#[test]
fn test_short_form_bare_p_before_delimiter() {
    assert_eq!(
        decode("m2p_c"),
        vec![short("m", Some(2), 0), short("p", None, 0), short("c", None, 0)]
    );
}

#[rstest]
#[case("I")]
#[case("M2p0")]
#[case("_")]
#[case("4")]
#[case("-")]
fn test_short_form_non_lowercase_is_malformed(#[case] isa: &str) {
    let (token, next) = next_token(isa.as_bytes(), 0);
    assert!(token.is_malformed());
    assert_eq!(token.name, &isa.as_bytes()[..1]);
    assert_eq!(next, 1);
}

#[test]
fn test_malformed_token_does_not_consume_following_letter() {
    let decoded: Vec<_> = tokens("Imac").map(|t| (t.name[0], t.is_malformed())).collect();
    assert_eq!(
        decoded,
        vec![(b'I', true), (b'm', false), (b'a', false), (b'c', false)]
    );
}

#[test]
fn test_short_form_major_overflow() {
    let (token, next) = next_token(b"a99999999999", 0);
    assert_eq!(token.name, b"a");
    assert_eq!(token.major, None);
    assert_eq!(token.error, Some(TokenError::Version(DecimalError::Overflow)));
    assert!(!token.is_malformed());
    assert!(token.has_version_error());
    assert_eq!(next, 12);
}

#[test]
fn test_short_form_minor_overflow_keeps_major() {
    let (token, next) = next_token(b"m2p99999999999_c", 0);
    assert_eq!(token.major, Some(2));
    assert_eq!(token.minor, 0);
    assert_eq!(token.error, Some(TokenError::Version(DecimalError::Overflow)));
    assert_eq!(next, 15);
}

#[test]
fn test_short_form_both_versions_overflow() {
    let (token, next) = next_token(b"m99999999999p99999999999_c", 0);
    assert_eq!(token.major, None);
    assert_eq!(token.minor, 0);
    assert_eq!(token.error, Some(TokenError::Version(DecimalError::Overflow)));
    assert_eq!(next, 25);
}

#[test]
fn test_short_form_letter_accessor() {
    let (token, _) = next_token(b"c", 0);
    assert_eq!(token.letter(), Some(b'c'));
    let (token, _) = next_token(b"C", 0);
    assert_eq!(token.letter(), None);
}

// ──────────────────────────────────────────────────────────
// Long form
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(b's', true)]
#[case(b'x', true)]
#[case(b'z', true)]
#[case(b'i', false)]
#[case(b'h', false)]
#[case(b'S', false)]
fn test_long_prefix(#[case] byte: u8, #[case] expected: bool) {
    assert_eq!(is_long_prefix(byte), expected);
}

#[rstest]
#[case("zba", long("zba", None, 0))]
#[case("zihintpause", long("zihintpause", None, 0))]
#[case("svpbmt1p0", long("svpbmt", Some(1), 0))]
#[case("zicbom2", long("zicbom", Some(2), 0))]
#[case("zksed12p34", long("zksed", Some(12), 34))]
#[case("xvendor0p7", long("xvendor", Some(0), 7))]
#[case("s", long("s", None, 0))]
#[case("x1p2", long("x", Some(1), 2))]
fn test_long_form_versions(#[case] isa: &str, #[case] expected: Decoded) {
    let (token, next) = next_token(isa.as_bytes(), 0);
    assert_eq!(decoded(&token), expected);
    assert_eq!(token.error, None);
    assert_eq!(next, isa.len());
}

#[test]
fn test_long_form_p_without_leading_digits_stays_in_name() {
    let (token, _) = next_token(b"zihintp1", 0);
    assert_eq!(decoded(&token), long("zihintp", Some(1), 0));
}

#[test]
fn test_long_form_name_ending_in_p_with_version_pair() {
    let (token, _) = next_token(b"zap3p4", 0);
    assert_eq!(decoded(&token), long("zap", Some(3), 4));
}

#[test]
fn test_long_form_runs_to_delimiter() {
    let (token, next) = next_token(b"svpbmt1p0_zba", 0);
    assert_eq!(decoded(&token), long("svpbmt", Some(1), 0));
    assert_eq!(next, 10, "the delimiter is skipped");
}

#[test]
fn test_long_form_swallows_following_letters_without_delimiter() {
    assert_eq!(decode("zbaim"), vec![long("zbaim", None, 0)]);
}

#[rstest]
#[case("zBa")]
#[case("zb-a")]
#[case("sv.pbmt")]
fn test_long_form_invalid_byte_is_malformed(#[case] isa: &str) {
    let (token, next) = next_token(isa.as_bytes(), 0);
    assert!(token.is_malformed());
    assert_eq!(token.name, isa.as_bytes(), "scan runs to the boundary");
    assert_eq!(next, isa.len());
}

#[test]
fn test_long_form_major_overflow() {
    let (token, _) = next_token(b"zba4294967296", 0);
    assert_eq!(token.name, b"zba");
    assert_eq!(token.major, None);
    assert_eq!(token.error, Some(TokenError::Version(DecimalError::Overflow)));
}

#[test]
fn test_long_form_minor_overflow_keeps_major() {
    let (token, _) = next_token(b"zba1p4294967296", 0);
    assert_eq!(token.name, b"zba");
    assert_eq!(token.major, Some(1));
    assert_eq!(token.error, Some(TokenError::Version(DecimalError::Overflow)));
}

#[test]
fn test_long_form_both_versions_overflow() {
    let (token, next) = next_token(b"zba4294967296p4294967296_c", 0);
    assert_eq!(token.name, b"zba");
    assert_eq!(token.major, None);
    assert_eq!(token.minor, 0);
    assert_eq!(token.error, Some(TokenError::Version(DecimalError::Overflow)));
    assert_eq!(next, 25);
}

#[test]
fn test_long_form_accepts_u32_max_major() {
    let (token, _) = next_token(b"zba4294967295", 0);
    assert_eq!(token.major, Some(u32::MAX));
    assert_eq!(token.error, None);
}

// ──────────────────────────────────────────────────────────
// Delimiters and whole strings
// ──────────────────────────────────────────────────────────

#[test]
fn test_optional_delimiter_between_short_tokens() {
    assert_eq!(decode("i_m"), decode("im"));
}

#[test]
fn test_double_delimiter_yields_malformed_token() {
    let decoded: Vec<_> = tokens("i__m").map(|t| (t.name.to_vec(), t.is_malformed())).collect();
    assert_eq!(
        decoded,
        vec![
            (b"i".to_vec(), false),
            (b"_".to_vec(), true),
            (b"m".to_vec(), false)
        ]
    );
}

#[test]
fn test_trailing_delimiter_ends_iteration() {
    assert_eq!(decode("imac_"), decode("imac"));
    assert_eq!(decode("zba_"), vec![long("zba", None, 0)]);
}

#[test]
fn test_mixed_string() {
    assert_eq!(
        decode("imafdc_zba_zihintpause_svpbmt1p0"),
        vec![
            short("i", None, 0),
            short("m", None, 0),
            short("a", None, 0),
            short("f", None, 0),
            short("d", None, 0),
            short("c", None, 0),
            long("zba", None, 0),
            long("zihintpause", None, 0),
            long("svpbmt", Some(1), 0),
        ]
    );
}

#[test]
fn test_empty_string_has_no_tokens() {
    assert_eq!(tokens("").count(), 0);
}

#[test]
fn test_non_ascii_input_is_malformed_without_panicking() {
    let all: Vec<_> = tokens("ié_m").collect();
    assert_eq!(all.first().map(|t| t.name), Some(&b"i"[..]));
    assert!(all.iter().any(ExtensionToken::is_malformed));
    assert_eq!(all.last().map(|t| t.name), Some(&b"m"[..]));
}
