//! Detection configuration.
//!
//! Settings that shape a detection pass without describing the hardware itself.
//! The hardware side lives in [`platform`](crate::platform).
//!
//! Configuration is supplied as JSON (from Python or a file) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::HwcapError;
use crate::isa::Xlen;

/// Root configuration for a detection pass.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Width the consumer is built for. Only this width's `rvNN` prefix is stripped.
    /// `None` strips either prefix.
    #[serde(default)]
    pub xlen: Option<Xlen>,

    /// Log the ISA and ELF capability report once detection completes.
    #[serde(default = "Config::default_report")]
    pub report: bool,
}

impl Config {
    /// Reporting is on unless disabled.
    const fn default_report() -> bool {
        true
    }

    /// Creates a configuration for a fixed register width.
    pub const fn for_xlen(xlen: Xlen) -> Self {
        Self {
            xlen: Some(xlen),
            report: true,
        }
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, HwcapError> {
        serde_json::from_str(json).map_err(HwcapError::Config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            xlen: None,
            report: Self::default_report(),
        }
    }
}
