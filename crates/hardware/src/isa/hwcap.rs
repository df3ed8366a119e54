//! ELF hardware capability mask.
//!
//! The mask handed to user programs carries one bit per legacy single-letter
//! extension, at bit `LETTER - 'A'`. Only `I`, `M`, `A`, `F`, `D` and `C` are
//! defined; every other letter maps to an empty mask.

use bitflags::bitflags;

bitflags! {
    /// ELF `AT_HWCAP` bits for the legacy single-letter extensions.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElfHwcap: u64 {
        /// Atomic instructions.
        const A = 1 << (b'A' - b'A');
        /// Compressed instructions.
        const C = 1 << (b'C' - b'A');
        /// Double-precision floating point.
        const D = 1 << (b'D' - b'A');
        /// Single-precision floating point.
        const F = 1 << (b'F' - b'A');
        /// Base integer instruction set.
        const I = 1 << (b'I' - b'A');
        /// Integer multiply and divide.
        const M = 1 << (b'M' - b'A');
    }
}

impl ElfHwcap {
    /// Returns the capability bit for an extension letter, in either case.
    pub const fn from_letter(letter: u8) -> Self {
        match letter.to_ascii_lowercase() {
            b'i' => Self::I,
            b'm' => Self::M,
            b'a' => Self::A,
            b'f' => Self::F,
            b'd' => Self::D,
            b'c' => Self::C,
            _ => Self::empty(),
        }
    }

    /// Returns true if any floating-point capability is present.
    #[inline]
    pub const fn has_fpu(self) -> bool {
        self.intersects(Self::F.union(Self::D))
    }
}
