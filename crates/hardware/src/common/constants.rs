//! Capability model constants.
//!
//! This module defines the fixed dimensions of the capability bitmap and the
//! boundaries of its sub-ranges. It provides:
//! 1. **Bitmap Size:** Upper bound on distinct extension indices and the backing word count.
//! 2. **Base Range:** The 26 single-letter extensions `a`..`z`, one bit each.
//! 3. **Width Prefixes:** The `rv32`/`rv64` prefixes stripped before tokenizing.

/// Number of single-letter (base) extensions, `a` through `z`.
pub const NUM_ALPHA_EXTS: usize = (b'z' - b'a' + 1) as usize;

/// First bitmap index available to multi-letter extensions.
///
/// Indices below this value are reserved for the base letters.
pub const ISA_EXT_BASE: usize = NUM_ALPHA_EXTS;

/// Upper bound on the number of distinct extension indices in a bitmap.
pub const ISA_EXT_MAX: usize = 128;

/// Number of bits in one bitmap storage word.
pub const BITS_PER_WORD: usize = u64::BITS as usize;

/// Number of `u64` words backing an [`IsaBitmap`](crate::feature::IsaBitmap).
pub const ISA_EXT_WORDS: usize = ISA_EXT_MAX.div_ceil(BITS_PER_WORD);

/// Mask selecting the base-letter sub-range of the first bitmap word.
pub const BASE_EXT_MASK: u64 = (1 << NUM_ALPHA_EXTS) - 1;

/// ISA string prefix naming a 32-bit hart.
pub const RV32_PREFIX: &str = "rv32";

/// ISA string prefix naming a 64-bit hart.
pub const RV64_PREFIX: &str = "rv64";

/// Delimiter separating extension tokens.
pub const EXT_DELIMITER: u8 = b'_';

/// Separator between major and minor version numbers.
pub const VERSION_SEPARATOR: u8 = b'p';
