//! Boot-time detection pass.
//!
//! Walks every hart of a [`HartSource`], decodes its ISA string, reduces the
//! results and optionally publishes them as the host capabilities.

use tracing::{debug, info, warn};

use super::hart::HartIsa;
use super::host::{self, HostCapabilities};
use super::reduce::CapabilityReducer;
use super::report::long_extension_names;
use crate::common::HwcapError;
use crate::config::Config;
use crate::platform::HartSource;

/// Decodes and reduces the capabilities of every usable hart.
///
/// Harts that are not available or lack an ISA string are left out of the
/// intersection. If no hart contributes, the result is empty.
///
/// # Arguments
///
/// * `source` - Enumerates the harts and their ISA strings.
/// * `config` - Detection settings.
pub fn fill_hwcap(source: &dyn HartSource, config: &Config) -> HostCapabilities {
    let mut reducer = CapabilityReducer::new();

    for hart in source.harts() {
        match hart.isa() {
            Ok(isa) => {
                debug!(hartid = hart.hartid, isa, "decoding hart ISA");
                reducer.fold(HartIsa::parse(isa, config.xlen));
            }
            Err(e @ HwcapError::HartUnavailable { .. }) => debug!("{e}"),
            Err(e) => warn!("{e}"),
        }
    }

    if reducer.harts() == 0 {
        warn!("no hart reported a usable ISA description");
    }
    reducer.finish()
}

/// Runs detection and publishes the result as the host capabilities.
///
/// # Returns
///
/// The published capabilities, or [`HwcapError::AlreadyInitialized`] if a previous
/// pass already published them.
pub fn init_host(
    source: &dyn HartSource,
    config: &Config,
) -> Result<&'static HostCapabilities, HwcapError> {
    let caps = fill_hwcap(source, config);
    let caps = host::install(caps)?;

    if config.report {
        for line in caps.to_string().lines() {
            info!("{line}");
        }
        let long = long_extension_names(&caps.isa);
        if !long.is_empty() {
            info!("riscv: multi-letter extensions {long}");
        }
    }
    if caps.fpu_enabled() {
        debug!("enabling FPU fast path");
    }
    Ok(caps)
}
