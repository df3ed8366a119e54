//! Utility functions exposed to Python.
//!
//! Provides the version string and log setup for the `rvhwcap` module.

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the package version string (e.g., for scripting or diagnostics).
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Routes detection logs to stderr.
///
/// # Arguments
///
/// * `filter` - An `EnvFilter` directive such as `"info"` or `"rvhwcap_core=debug"`.
///
/// # Returns
///
/// `True` if logging was installed, `False` if a subscriber was already active.
#[pyfunction]
#[pyo3(signature = (filter="info"))]
pub fn init_logging(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
