//! Decimal version-number parser.
//!
//! Extension versions are unsigned decimal digit runs. The parser reports how many
//! bytes it consumed so the tokenizer can advance its own position.

use crate::common::DecimalError;

/// Parses the leading run of ASCII digits in `bytes` as a `u32`.
///
/// Overflow is detected before the accumulator is updated, so a value never wraps.
///
/// # Arguments
///
/// * `bytes` - Input starting at the first digit.
///
/// # Returns
///
/// The parsed value and the number of digit bytes consumed, or
/// [`DecimalError::InvalidDigit`] if `bytes` does not start with a digit, or
/// [`DecimalError::Overflow`] if the run exceeds `u32::MAX`.
pub fn parse_decimal(bytes: &[u8]) -> Result<(u32, usize), DecimalError> {
    if !bytes.first().is_some_and(u8::is_ascii_digit) {
        return Err(DecimalError::InvalidDigit);
    }

    let mut value: u32 = 0;
    let mut consumed = 0;
    for &b in bytes.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = u32::from(b - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecimalError::Overflow)?;
        consumed += 1;
    }
    Ok((value, consumed))
}

/// Returns the length of the ASCII digit run at the start of `bytes`.
#[inline]
pub fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
