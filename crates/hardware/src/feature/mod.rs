//! Capability Detection.
//!
//! Builds the system-wide capability set from the ISA strings of all harts.
//!
//! # Pipeline
//!
//! * `hart`: Decodes one hart's ISA string into a bitmap and an ELF mask.
//! * `reduce`: Intersects per-hart results and applies the F-without-D rule.
//! * `detect`: Drives the pass over a hart source and publishes the result.
//! * `host`: Process-wide result and the query surface over it.
//! * `report`: Letter and name rendering for diagnostics.

/// Extension presence bitmap.
pub mod bitmap;

/// Detection pass over a hart source.
pub mod detect;

/// Per-hart accumulation.
pub mod hart;

/// Process-wide capabilities and queries.
pub mod host;

/// Cross-hart reduction.
pub mod reduce;

/// Diagnostic rendering.
pub mod report;

pub use bitmap::IsaBitmap;
pub use detect::{fill_hwcap, init_host};
pub use hart::HartIsa;
pub use host::{HostCapabilities, isa_extension_available, isa_extension_base};
pub use reduce::{CapabilityReducer, reduce};
