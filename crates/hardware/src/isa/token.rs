//! Extension tokenizer.
//!
//! Splits an ISA string (already past its `rv32`/`rv64` prefix) into extension tokens.
//! It provides:
//! 1. **Token Type:** [`ExtensionToken`], a borrowed view of one extension and its version.
//! 2. **Scanner:** [`next_token`], a pure function from `(input, position)` to `(token, next position)`.
//! 3. **Iteration:** [`Tokens`], an iterator yielding every token of a string, malformed ones included.
//!
//! # Grammar
//!
//! * **Long form** (`s`, `x`, `z` prefix): the name runs to the next `_` or the end of input and
//!   its version is recovered by scanning the run backwards (`svpbmt1p0`, `zba`, `zicbom2`).
//! * **Short form** (any other letter): the name is one letter followed by an optional forward
//!   version (`i`, `m2`, `a2p1`).
//!
//! After a token, a single `_` delimiter is skipped. Any other byte is left for the next token.

use super::decimal::{digit_run, parse_decimal};
use crate::common::TokenError;
use crate::common::constants::{EXT_DELIMITER, VERSION_SEPARATOR};

/// One extension token decoded from an ISA string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtensionToken<'a> {
    /// Extension name without version digits. A single letter for short-form tokens.
    pub name: &'a [u8],
    /// Major version, or `None` when the token carries no version.
    pub major: Option<u32>,
    /// Minor version, `0` when absent.
    pub minor: u32,
    /// Whether the token used the multi-letter grammar.
    pub long: bool,
    /// Problem recorded while scanning, if any.
    pub error: Option<TokenError>,
}

impl<'a> ExtensionToken<'a> {
    /// Returns true if the token breaks the grammar and must not contribute capabilities.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self.error, Some(TokenError::Malformed))
    }

    /// Returns true if a version number failed to parse.
    #[inline]
    pub fn has_version_error(&self) -> bool {
        matches!(self.error, Some(TokenError::Version(_)))
    }

    /// Returns the name as a string slice, if it is valid UTF-8.
    pub fn name_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.name).ok()
    }

    /// Returns true if the name matches `name` exactly.
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name.as_bytes()
    }

    /// Returns the base letter of a well-formed short-form token.
    pub fn letter(&self) -> Option<u8> {
        match self.name {
            [c] if !self.long && c.is_ascii_lowercase() => Some(*c),
            _ => None,
        }
    }
}

/// Returns true if `b` opens a multi-letter extension name.
#[inline]
pub const fn is_long_prefix(b: u8) -> bool {
    matches!(b, b's' | b'x' | b'z')
}

/// Byte at `pos`, or NUL past the end of input.
#[inline]
fn byte_at(isa: &[u8], pos: usize) -> u8 {
    isa.get(pos).copied().unwrap_or(0)
}

/// Length of the digit run ending at the end of `bytes`.
#[inline]
fn trailing_digits(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|b| b.is_ascii_digit()).count()
}

/// Scans one extension token starting at `pos`.
///
/// The scan always makes progress: the returned position is strictly greater than `pos`,
/// even for malformed input, so repeated calls terminate.
///
/// # Arguments
///
/// * `isa` - The ISA string bytes, width prefix already removed.
/// * `pos` - Offset of the first byte of the token.
///
/// # Returns
///
/// The decoded token and the offset at which the next token starts.
pub fn next_token(isa: &[u8], pos: usize) -> (ExtensionToken<'_>, usize) {
    let (token, end) = if is_long_prefix(byte_at(isa, pos)) {
        scan_long(isa, pos)
    } else {
        scan_short(isa, pos)
    };

    let next = if byte_at(isa, end) == EXT_DELIMITER {
        end + 1
    } else {
        end
    };
    (token, next)
}

/// Scans a multi-letter token. Returns the token and the offset just past its name run.
fn scan_long(isa: &[u8], start: usize) -> (ExtensionToken<'_>, usize) {
    let end = isa[start..]
        .iter()
        .position(|&b| b == EXT_DELIMITER)
        .map_or(isa.len(), |n| start + n);
    let run = &isa[start..end];

    let mut token = ExtensionToken {
        name: run,
        major: None,
        minor: 0,
        long: true,
        error: None,
    };

    if !run[1..]
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        token.error = Some(TokenError::Malformed);
        return (token, end);
    }

    // run[0] is a letter, so every digit run below starts at index 1 or later.
    let last_start = run.len() - trailing_digits(run);
    if last_start == run.len() {
        return (token, end);
    }

    let last = parse_decimal(&run[last_start..]);
    let has_minor = last_start >= 2
        && run[last_start - 1] == VERSION_SEPARATOR
        && run[last_start - 2].is_ascii_digit();

    if !has_minor {
        token.name = &run[..last_start];
        match last {
            Ok((major, _)) => token.major = Some(major),
            Err(e) => token.error = Some(e.into()),
        }
        return (token, end);
    }

    let sep = last_start - 1;
    let major_start = sep - trailing_digits(&run[..sep]);
    token.name = &run[..major_start];
    match last {
        Ok((minor, _)) => token.minor = minor,
        Err(e) => token.error = Some(e.into()),
    }
    match parse_decimal(&run[major_start..sep]) {
        Ok((major, _)) => token.major = Some(major),
        Err(e) => {
            if token.error.is_none() {
                token.error = Some(e.into());
            }
        }
    }
    (token, end)
}

/// Scans a single-letter token. Returns the token and the offset just past its version.
fn scan_short(isa: &[u8], start: usize) -> (ExtensionToken<'_>, usize) {
    let mut token = ExtensionToken {
        name: isa.get(start..=start).unwrap_or_default(),
        major: None,
        minor: 0,
        long: false,
        error: None,
    };
    let mut cur = start + 1;

    if !byte_at(isa, start).is_ascii_lowercase() {
        token.error = Some(TokenError::Malformed);
        return (token, cur);
    }

    let rest = isa.get(cur..).unwrap_or_default();
    let major_len = digit_run(rest);
    if major_len == 0 {
        return (token, cur);
    }
    match parse_decimal(rest) {
        Ok((major, _)) => token.major = Some(major),
        Err(e) => token.error = Some(e.into()),
    }
    cur += major_len;

    if byte_at(isa, cur) != VERSION_SEPARATOR {
        return (token, cur);
    }
    let rest = isa.get(cur + 1..).unwrap_or_default();
    let minor_len = digit_run(rest);
    if minor_len == 0 {
        // A bare `p` is left in place and starts the next token.
        return (token, cur);
    }
    match parse_decimal(rest) {
        Ok((minor, _)) => token.minor = minor,
        Err(e) => {
            if token.error.is_none() {
                token.error = Some(e.into());
            }
        }
    }
    cur += 1 + minor_len;
    (token, cur)
}

/// Iterator over every extension token of an ISA string.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    isa: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    /// Creates an iterator over `isa`, which must already be past its width prefix.
    pub const fn new(isa: &'a [u8]) -> Self {
        Self { isa, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = ExtensionToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.isa.len() {
            return None;
        }
        let (token, next) = next_token(self.isa, self.pos);
        self.pos = next;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Returns an iterator over the extension tokens of `isa`.
pub fn tokens(isa: &str) -> Tokens<'_> {
    Tokens::new(isa.as_bytes())
}
