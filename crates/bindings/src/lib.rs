//! Python bindings for the RISC-V ISA decoder and capability detection.
//!
//! This crate exposes the decoder to Python via PyO3. It provides:
//! 1. **Tokens:** `parse_isa` and `ExtensionToken` for inspecting how a string decodes.
//! 2. **Detection:** `detect`, `detect_platform` and `Capabilities` for the reduced result.
//! 3. **Utilities:** Version string, log setup, and dict conversion helpers.

use pyo3::prelude::*;

/// Capability detection binding (`PyCapabilities`).
pub mod capabilities;
/// Python dict to Rust `Config`/`Platform` conversion.
pub mod conversion;
/// Extension token binding (`PyExtensionToken`).
pub mod token;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all classes and functions onto the given Python module.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_hwcap_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<capabilities::PyCapabilities>()?;
    m.add_class::<token::PyExtensionToken>()?;

    m.add_function(wrap_pyfunction!(capabilities::detect, m)?)?;
    m.add_function(wrap_pyfunction!(capabilities::detect_platform, m)?)?;
    m.add_function(wrap_pyfunction!(token::parse_isa, m)?)?;
    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_hwcap_module(m)
}
