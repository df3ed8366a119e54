//! Python↔Rust configuration conversion.
//!
//! Converts Python dicts into the core `Config` and `Platform` types via JSON
//! serialization, so the same schema is used from both Python and the CLI.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rvhwcap_core::common::ParseXlenError;
use rvhwcap_core::config::Config;
use rvhwcap_core::isa::Xlen;
use rvhwcap_core::platform::Platform;
use serde::de::DeserializeOwned;

/// Serializes a Python object with `json.dumps` and deserializes it as `T`.
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `obj` - A JSON-compatible Python object (dict, list, ...).
/// * `what` - Name used in the error message.
fn py_to_json<T: DeserializeOwned>(
    py: Python<'_>,
    obj: &Bound<'_, PyAny>,
    what: &str,
) -> PyResult<T> {
    let json = py.import("json")?;
    let dumps = json.getattr("dumps")?;
    let json_str: String = dumps.call1((obj,))?.extract()?;

    serde_json::from_str(&json_str)
        .map_err(|e| PyValueError::new_err(format!("Invalid {what}: {e}")))
}

/// Converts a Python dict to a detection `Config`.
///
/// Keys must match the Rust config structure (`xlen`, `report`). `None` yields the defaults.
pub fn py_dict_to_config(py: Python<'_>, dict: Option<&Bound<'_, PyAny>>) -> PyResult<Config> {
    dict.map_or_else(|| Ok(Config::default()), |d| py_to_json(py, d, "config"))
}

/// Converts a Python dict such as `{"harts": [{"hartid": 0, "isa": "rv64imac"}]}` to a `Platform`.
pub fn py_dict_to_platform(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<Platform> {
    py_to_json(py, dict, "platform")
}

/// Parses a register width name (`"rv32"` or `"rv64"`).
pub fn parse_xlen(name: &str) -> PyResult<Xlen> {
    name.parse().map_err(|e: ParseXlenError| PyValueError::new_err(e.to_string()))
}
