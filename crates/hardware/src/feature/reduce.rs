//! Cross-hart reduction.
//!
//! Intersects the capabilities of every contributing hart so that a capability
//! is claimed system-wide only when all harts claim it, then applies the
//! cross-extension consistency rules.

use tracing::info;

use super::hart::HartIsa;
use super::host::HostCapabilities;
use crate::isa::ElfHwcap;

/// Running intersection of per-hart capabilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct CapabilityReducer {
    acc: Option<HartIsa>,
    harts: usize,
}

impl CapabilityReducer {
    /// Creates a reducer that has seen no hart.
    pub const fn new() -> Self {
        Self {
            acc: None,
            harts: 0,
        }
    }

    /// Folds one hart into the running result.
    ///
    /// The first hart initializes the result; every later hart can only remove capabilities.
    pub fn fold(&mut self, hart: HartIsa) {
        self.harts += 1;
        self.acc = Some(match self.acc {
            None => hart,
            Some(acc) => HartIsa {
                isa: acc.isa & hart.isa,
                elf_hwcap: acc.elf_hwcap & hart.elf_hwcap,
            },
        });
    }

    /// Number of harts folded so far.
    pub const fn harts(&self) -> usize {
        self.harts
    }

    /// Applies the consistency rules and returns the final capabilities.
    ///
    /// Returns empty capabilities if no hart was folded.
    pub fn finish(self) -> HostCapabilities {
        let acc = self.acc.unwrap_or_default();
        HostCapabilities {
            isa: acc.isa,
            elf_hwcap: mask_f_without_d(acc.elf_hwcap),
            harts: self.harts,
        }
    }
}

impl FromIterator<HartIsa> for CapabilityReducer {
    fn from_iter<I: IntoIterator<Item = HartIsa>>(iter: I) -> Self {
        let mut reducer = Self::new();
        iter.into_iter().for_each(|hart| reducer.fold(hart));
        reducer
    }
}

/// Clears `F` when `D` is absent; single-precision-only FPUs are not supported.
pub fn mask_f_without_d(hwcap: ElfHwcap) -> ElfHwcap {
    if hwcap.contains(ElfHwcap::F) && !hwcap.contains(ElfHwcap::D) {
        info!("This kernel does not support systems with F but not D");
        return hwcap.difference(ElfHwcap::F);
    }
    hwcap
}

/// Reduces a set of harts into the final system-wide capabilities.
pub fn reduce<I: IntoIterator<Item = HartIsa>>(harts: I) -> HostCapabilities {
    harts.into_iter().collect::<CapabilityReducer>().finish()
}
