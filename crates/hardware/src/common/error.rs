//! Error definitions for ISA decoding and capability detection.
//!
//! This module defines the error taxonomy used throughout the crate. It provides:
//! 1. **Decimal Errors:** Failures of the version-number parser.
//! 2. **Token Errors:** Per-token outcomes recorded by the tokenizer.
//! 3. **Detection Errors:** Hart-level and process-level failures of the detection pass.
//!
//! None of these are fatal to a detection pass: parse errors are recovered per token and
//! hart errors exclude a single hart from the reduction.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of the decimal version parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The first byte was not an ASCII digit.
    #[error("expected a decimal digit")]
    InvalidDigit,

    /// The digit run does not fit in a `u32`.
    #[error("decimal value does not fit in 32 bits")]
    Overflow,
}

/// Problem recorded against a single extension token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token contains bytes outside the grammar. It contributes no capability bits.
    #[error("malformed extension token")]
    Malformed,

    /// A version number could not be parsed. The extension name is still usable.
    #[error("invalid extension version: {0}")]
    Version(#[from] DecimalError),
}

/// A register width name other than `rv32` or `rv64`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown register width '{0}', expected rv32 or rv64")]
pub struct ParseXlenError(pub String);

/// Errors raised while enumerating harts or publishing the host capabilities.
#[derive(Debug, Error)]
pub enum HwcapError {
    /// The hart exposes no ISA description string.
    #[error("hart {hartid}: unable to find \"riscv,isa\" description")]
    MissingHartDescription {
        /// Hart identifier as reported by the hart source.
        hartid: u64,
    },

    /// The hart is not in the `okay` state and takes no part in detection.
    #[error("hart {hartid}: not available")]
    HartUnavailable {
        /// Hart identifier as reported by the hart source.
        hartid: u64,
    },

    /// Host capabilities were already published for this process.
    #[error("host capabilities are already initialized")]
    AlreadyInitialized,

    /// The detection configuration is not valid JSON for the expected schema.
    #[error("invalid detection configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// The platform description is not valid JSON for the expected schema.
    #[error("invalid platform description: {0}")]
    Platform(#[from] serde_json::Error),

    /// The platform description file could not be read.
    #[error("could not read platform description '{}': {source}", .path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
