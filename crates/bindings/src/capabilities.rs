//! Capability detection Python binding.
//!
//! Runs a detection pass from Python and exposes the reduced result. Detection here
//! never publishes the process-wide host state; each call returns an independent value.

use crate::conversion::{py_dict_to_config, py_dict_to_platform};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rvhwcap_core::feature::report::{letters, long_extensions};
use rvhwcap_core::feature::{HostCapabilities, fill_hwcap};
use rvhwcap_core::isa::IsaExt;
use rvhwcap_core::isa::ext::letter_bit;
use rvhwcap_core::platform::{HartDescriptor, HartStatus, Platform};

/// Python-exposed capabilities: wraps the reduced `HostCapabilities`.
#[pyclass(name = "Capabilities", frozen)]
#[derive(Clone, Debug)]
pub struct PyCapabilities {
    pub inner: HostCapabilities,
}

#[pymethods]
impl PyCapabilities {
    /// ELF `AT_HWCAP` word.
    #[getter]
    fn elf_hwcap(&self) -> u64 {
        self.inner.elf_hwcap.bits()
    }

    /// Base-letter word; bit `n` is letter `'a' + n`.
    #[getter]
    fn base_word(&self) -> u64 {
        self.inner.base_word()
    }

    /// Number of harts that contributed.
    #[getter]
    fn harts(&self) -> usize {
        self.inner.harts
    }

    #[getter]
    fn fpu_enabled(&self) -> bool {
        self.inner.fpu_enabled()
    }

    /// Base letters present, e.g. `"acdfim"`.
    #[getter]
    fn isa_letters(&self) -> String {
        letters(self.inner.base_word())
    }

    /// Letters present in the ELF mask.
    #[getter]
    fn elf_letters(&self) -> String {
        letters(self.inner.elf_hwcap.bits())
    }

    /// Recognized multi-letter extensions present.
    #[getter]
    fn extensions(&self) -> Vec<&'static str> {
        long_extensions(&self.inner.isa)
            .into_iter()
            .map(IsaExt::name)
            .collect()
    }

    /// Returns whether bitmap index `bit` is set; `False` when out of range.
    fn has_extension(&self, bit: usize) -> bool {
        self.inner.has_extension(bit)
    }

    /// Returns whether the named extension (a base letter or a known multi-letter name) is present.
    fn has(&self, name: &str) -> PyResult<bool> {
        let bit = match name.as_bytes() {
            [letter] => letter_bit(*letter),
            bytes => IsaExt::from_name(bytes).map(IsaExt::id),
        };
        bit.map(|bit| self.inner.has_extension(bit))
            .ok_or_else(|| PyValueError::new_err(format!("Unknown extension '{name}'")))
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Capabilities(isa={:?}, elf={:?}, harts={})",
            self.isa_letters(),
            self.elf_letters(),
            self.inner.harts
        )
    }
}

/// Detects capabilities from one ISA string per hart.
///
/// A `None` entry stands for a hart without an ISA description and is left out.
///
/// # Arguments
///
/// * `isa_strings` - One entry per hart, in hart order.
/// * `config` - Optional config dict (`xlen`, `report`).
#[pyfunction]
#[pyo3(signature = (isa_strings, config=None))]
pub fn detect(
    py: Python<'_>,
    isa_strings: Vec<Option<String>>,
    config: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyCapabilities> {
    let config = py_dict_to_config(py, config)?;
    let harts = (0..)
        .zip(isa_strings)
        .map(|(hartid, isa)| HartDescriptor {
            hartid,
            status: HartStatus::Okay,
            isa,
        })
        .collect();
    let platform = Platform { harts };
    Ok(PyCapabilities {
        inner: fill_hwcap(&platform, &config),
    })
}

/// Detects capabilities from a platform dict (`{"harts": [...]}`).
#[pyfunction]
#[pyo3(signature = (platform, config=None))]
pub fn detect_platform(
    py: Python<'_>,
    platform: &Bound<'_, PyAny>,
    config: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyCapabilities> {
    let platform = py_dict_to_platform(py, platform)?;
    let config = py_dict_to_config(py, config)?;
    Ok(PyCapabilities {
        inner: fill_hwcap(&platform, &config),
    })
}
