//! Register width and ISA string width prefixes.

use std::str::FromStr;

use serde::Deserialize;

use crate::common::ParseXlenError;
use crate::common::constants::{RV32_PREFIX, RV64_PREFIX};

/// Native register width of a hart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Xlen {
    /// 32-bit harts (`rv32` prefix).
    Rv32,
    /// 64-bit harts (`rv64` prefix).
    Rv64,
}

impl Xlen {
    /// ISA string prefix naming this width.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Rv32 => RV32_PREFIX,
            Self::Rv64 => RV64_PREFIX,
        }
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }
}

impl FromStr for Xlen {
    type Err = ParseXlenError;

    /// Parses the prefix spelling, `rv32` or `rv64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RV32_PREFIX => Ok(Self::Rv32),
            RV64_PREFIX => Ok(Self::Rv64),
            other => Err(ParseXlenError(other.to_string())),
        }
    }
}

/// Removes the width prefix from an ISA string.
///
/// With `Some(xlen)` only that width's prefix is removed; a string naming the other
/// width is returned unchanged. With `None` either prefix is removed.
pub fn strip_width_prefix(isa: &str, xlen: Option<Xlen>) -> &str {
    match xlen {
        Some(xlen) => isa.strip_prefix(xlen.prefix()).unwrap_or(isa),
        None => isa
            .strip_prefix(RV64_PREFIX)
            .or_else(|| isa.strip_prefix(RV32_PREFIX))
            .unwrap_or(isa),
    }
}
