//! RISC-V ISA string decoding and host capability detection.
//!
//! This crate turns the ISA description strings of a platform's harts into one
//! conservative capability set with the following:
//! 1. **ISA:** Version-number parsing and the extension tokenizer for `rv64imafdc_zba`-style strings.
//! 2. **Feature:** Per-hart bitmaps, cross-hart intersection, and the published host capabilities.
//! 3. **Platform:** Hart enumeration and JSON platform descriptions.
//! 4. **Configuration:** Register width and reporting options for a detection pass.

/// Common constants and error types.
pub mod common;
/// Detection configuration.
pub mod config;
/// Capability bitmaps, reduction, and the host query surface.
pub mod feature;
/// ISA string tokenizer and extension identifiers.
pub mod isa;
/// Hart enumeration and platform descriptions.
pub mod platform;

/// Detection configuration; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Reduced system-wide capabilities.
pub use crate::feature::HostCapabilities;
/// Extension presence bitmap.
pub use crate::feature::IsaBitmap;
/// JSON-backed hart source.
pub use crate::platform::Platform;
