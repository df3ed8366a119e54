//! Hart enumeration.
//!
//! Describes the harts of a platform and their ISA strings. It provides:
//! 1. **Hart Source:** [`HartSource`], the seam through which detection enumerates harts.
//! 2. **Descriptors:** [`HartDescriptor`] and [`HartStatus`], one entry per hart.
//! 3. **Platform:** [`Platform`], a JSON-backed hart source, e.g.
//!    `{"harts": [{"hartid": 0, "isa": "rv64imafdc"}]}`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::HwcapError;

/// Availability of a hart, following the device-tree `status` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HartStatus {
    /// The hart is usable. Device trees also spell this `ok`.
    #[default]
    #[serde(alias = "ok")]
    Okay,
    /// The hart is present but switched off.
    Disabled,
    /// The hart failed and must not be used.
    Fail,
}

/// One hart and its ISA description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HartDescriptor {
    /// Hart identifier.
    pub hartid: u64,

    /// Availability; harts that are not `okay` are skipped.
    #[serde(default)]
    pub status: HartStatus,

    /// ISA description string, e.g. `rv64imafdc_zba`.
    #[serde(default)]
    pub isa: Option<String>,
}

impl HartDescriptor {
    /// Creates an available hart with the given ISA string.
    pub fn new(hartid: u64, isa: impl Into<String>) -> Self {
        Self {
            hartid,
            status: HartStatus::Okay,
            isa: Some(isa.into()),
        }
    }

    /// Returns the hart's ISA string if it can take part in detection.
    ///
    /// # Returns
    ///
    /// The ISA string, [`HwcapError::HartUnavailable`] if the hart is not `okay`, or
    /// [`HwcapError::MissingHartDescription`] if it reports no ISA string.
    pub fn isa(&self) -> Result<&str, HwcapError> {
        if self.status != HartStatus::Okay {
            return Err(HwcapError::HartUnavailable {
                hartid: self.hartid,
            });
        }
        self.isa
            .as_deref()
            .ok_or(HwcapError::MissingHartDescription {
                hartid: self.hartid,
            })
    }
}

/// Source of hart descriptions for a detection pass.
pub trait HartSource {
    /// Returns every hart of the platform, in enumeration order.
    fn harts(&self) -> Vec<HartDescriptor>;
}

/// Platform description: the list of harts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Platform {
    /// Harts in enumeration order.
    #[serde(default)]
    pub harts: Vec<HartDescriptor>,
}

impl Platform {
    /// Builds a platform whose harts carry the given ISA strings, numbered from 0.
    pub fn from_isa_strings<I, S>(isa: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let harts = (0..)
            .zip(isa)
            .map(|(hartid, isa)| HartDescriptor::new(hartid, isa))
            .collect();
        Self { harts }
    }

    /// Parses a platform description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, HwcapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a platform description from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HwcapError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| HwcapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl HartSource for Platform {
    fn harts(&self) -> Vec<HartDescriptor> {
        self.harts.clone()
    }
}
