//! Common types and constants shared by the decoder and the detection pass.
//!
//! This module provides:
//! 1. **Constants:** Bitmap dimensions, base-letter range, and grammar bytes.
//! 2. **Error Handling:** Decimal, token, and detection error types.

/// Capability model constants.
pub mod constants;

/// Error types for parsing and detection.
pub mod error;

pub use constants::{ISA_EXT_BASE, ISA_EXT_MAX, NUM_ALPHA_EXTS};
pub use error::{DecimalError, HwcapError, ParseXlenError, TokenError};
