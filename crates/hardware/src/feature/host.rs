//! System-wide capability state and query surface.
//!
//! This module holds the process-wide result of capability detection. It provides:
//! 1. **Result Type:** [`HostCapabilities`], the reduced bitmap and ELF mask.
//! 2. **Publication:** [`install`], which stores the result exactly once.
//! 3. **Queries:** [`isa_extension_base`] and [`isa_extension_available`], which read either
//!    a caller-supplied bitmap or the published host bitmap.
//!
//! Until [`install`] succeeds the host bitmap and ELF mask read as empty.

use std::fmt;
use std::sync::OnceLock;

use super::bitmap::IsaBitmap;
use super::report::letters;
use crate::common::HwcapError;
use crate::isa::ElfHwcap;

/// Capabilities common to every contributing hart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Extension presence bitmap.
    pub isa: IsaBitmap,
    /// ELF capability mask exposed to user programs.
    pub elf_hwcap: ElfHwcap,
    /// Number of harts that contributed to the result.
    pub harts: usize,
}

impl HostCapabilities {
    /// Base-letter word of the bitmap.
    #[inline]
    pub const fn base_word(&self) -> u64 {
        self.isa.base_word()
    }

    /// Returns whether bitmap index `bit` is set.
    #[inline]
    pub const fn has_extension(&self, bit: usize) -> bool {
        self.isa.test(bit)
    }

    /// Returns true if the floating-point fast path may be enabled.
    #[inline]
    pub const fn fpu_enabled(&self) -> bool {
        self.elf_hwcap.has_fpu()
    }
}

impl fmt::Display for HostCapabilities {
    /// Writes the two report lines: base letters in the bitmap, then in the ELF mask.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "riscv: ISA extensions {}", letters(self.base_word()))?;
        write!(f, "riscv: ELF capabilities {}", letters(self.elf_hwcap.bits()))
    }
}

static HOST: OnceLock<HostCapabilities> = OnceLock::new();

/// Publishes the host capabilities for the rest of the process.
///
/// # Returns
///
/// The published value, or [`HwcapError::AlreadyInitialized`] if capabilities were
/// already published.
pub fn install(caps: HostCapabilities) -> Result<&'static HostCapabilities, HwcapError> {
    HOST.set(caps).map_err(|_| HwcapError::AlreadyInitialized)?;
    HOST.get().ok_or(HwcapError::AlreadyInitialized)
}

/// Published host capabilities, if detection has completed.
pub fn host() -> Option<&'static HostCapabilities> {
    HOST.get()
}

/// Host bitmap, empty before publication.
fn host_isa() -> IsaBitmap {
    host().map(|caps| caps.isa).unwrap_or_default()
}

/// Host ELF capability mask, empty before publication.
pub fn elf_hwcap() -> ElfHwcap {
    host().map(|caps| caps.elf_hwcap).unwrap_or_default()
}

/// Returns true if the host floating-point fast path is enabled.
pub fn cpu_hwcap_fpu() -> bool {
    host().is_some_and(HostCapabilities::fpu_enabled)
}

/// Base-letter word of `bitmap`, or of the host bitmap when `None`.
pub fn isa_extension_base(bitmap: Option<&IsaBitmap>) -> u64 {
    bitmap.map_or_else(|| host_isa().base_word(), IsaBitmap::base_word)
}

/// Returns whether extension index `bit` is set in `bitmap`, or in the host bitmap when `None`.
///
/// Indices at or above [`ISA_EXT_MAX`](crate::common::ISA_EXT_MAX) are never set.
pub fn isa_extension_available(bitmap: Option<&IsaBitmap>, bit: usize) -> bool {
    bitmap.map_or_else(|| host_isa().test(bit), |b| b.test(bit))
}
