//! Extension token Python binding.
//!
//! Exposes the tokenizer: `parse_isa` returns one `ExtensionToken` per token of the
//! string, malformed tokens included, so scripts can inspect how a string decodes.

use crate::conversion::parse_xlen;
use pyo3::prelude::*;
use rvhwcap_core::isa::{ExtensionToken, Tokens, strip_width_prefix};

/// Python-exposed extension token: an owned copy of one decoded token.
#[pyclass(name = "ExtensionToken", frozen)]
#[derive(Clone, Debug)]
pub struct PyExtensionToken {
    name: String,
    major: Option<u32>,
    minor: u32,
    long: bool,
    error: Option<String>,
    malformed: bool,
}

impl From<&ExtensionToken<'_>> for PyExtensionToken {
    fn from(token: &ExtensionToken<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(token.name).into_owned(),
            major: token.major,
            minor: token.minor,
            long: token.long,
            error: token.error.map(|e| e.to_string()),
            malformed: token.is_malformed(),
        }
    }
}

#[pymethods]
impl PyExtensionToken {
    /// Extension name without version digits.
    #[getter]
    fn name(&self) -> &str {
        &self.name
    }

    /// Major version, or `None` when unversioned.
    #[getter]
    fn major(&self) -> Option<u32> {
        self.major
    }

    #[getter]
    fn minor(&self) -> u32 {
        self.minor
    }

    /// Whether the token is a multi-letter extension.
    #[getter]
    fn long(&self) -> bool {
        self.long
    }

    /// Whether the token is ignored for capability purposes.
    #[getter]
    fn malformed(&self) -> bool {
        self.malformed
    }

    /// Error message, or `None` for a clean token.
    #[getter]
    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn __repr__(&self) -> String {
        let version = match self.major {
            Some(major) => format!("{major}p{}", self.minor),
            None => "-".to_string(),
        };
        match &self.error {
            Some(e) => format!("ExtensionToken({}, {version}, error={e:?})", self.name),
            None => format!("ExtensionToken({}, {version})", self.name),
        }
    }
}

/// Decodes an ISA string into its extension tokens.
///
/// # Arguments
///
/// * `isa` - ISA string such as `"rv64imafdc_zba"`.
/// * `xlen` - `"rv32"` or `"rv64"` to strip only that prefix; `None` strips either.
#[pyfunction]
#[pyo3(signature = (isa, xlen=None))]
pub fn parse_isa(isa: &str, xlen: Option<&str>) -> PyResult<Vec<PyExtensionToken>> {
    let xlen = xlen.map(parse_xlen).transpose()?;
    let body = strip_width_prefix(isa, xlen);
    Ok(Tokens::new(body.as_bytes())
        .map(|token| PyExtensionToken::from(&token))
        .collect())
}
