//! ISA String Decoding.
//!
//! Turns the textual ISA description of a hart into structured extension tokens.
//!
//! # Components
//!
//! * `decimal`: Overflow-checked version-number parser.
//! * `token`: Extension tokenizer for short-form and long-form names.
//! * `ext`: Bitmap indices for base letters and recognized multi-letter extensions.
//! * `hwcap`: ELF capability bits for the legacy single-letter extensions.
//! * `xlen`: Register width and `rv32`/`rv64` prefix handling.

/// Decimal version-number parsing.
pub mod decimal;

/// Extension name to bitmap index mapping.
pub mod ext;

/// ELF hardware capability mask.
pub mod hwcap;

/// Extension tokenizer.
pub mod token;

/// Register width and ISA string prefixes.
pub mod xlen;

pub use ext::IsaExt;
pub use hwcap::ElfHwcap;
pub use token::{ExtensionToken, Tokens, next_token, tokens};
pub use xlen::{Xlen, strip_width_prefix};
