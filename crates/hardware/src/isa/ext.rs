//! Extension identifiers.
//!
//! Maps extension names onto capability bitmap indices. Base letters occupy
//! indices `0..26`; recognized multi-letter extensions are numbered from
//! [`ISA_EXT_BASE`] upwards.

use std::fmt;

use crate::common::constants::{ISA_EXT_BASE, NUM_ALPHA_EXTS};

/// Bitmap index of a base letter, or `None` if `letter` is not `a`..`z`.
#[inline]
pub const fn letter_bit(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Base letter at bitmap index `bit`, or `None` outside the base range.
#[inline]
pub const fn bit_letter(bit: usize) -> Option<char> {
    if bit < NUM_ALPHA_EXTS {
        Some((b'a' + bit as u8) as char)
    } else {
        None
    }
}

/// Recognized multi-letter extensions and their bitmap indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum IsaExt {
    /// Count overflow and mode-based filtering.
    Sscofpmf = ISA_EXT_BASE,
    /// Page-based memory types.
    Svpbmt,
    /// Cache-block management instructions.
    Zicbom,
    /// Pause hint.
    Zihintpause,
    /// Supervisor-mode timer interrupts.
    Sstc,
    /// Fine-grained address-translation cache invalidation.
    Svinval,
    /// NAPOT translation contiguity.
    Svnapot,
    /// Address-generation bit manipulation.
    Zba,
    /// Basic bit manipulation.
    Zbb,
    /// Carry-less multiplication.
    Zbc,
    /// Single-bit instructions.
    Zbs,
    /// Cache-block zero instructions.
    Zicboz,
    /// ShangMi block cipher.
    Zksed,
    /// Data-independent execution latency.
    Zkt,
}

impl IsaExt {
    /// Every recognized multi-letter extension, in index order.
    pub const ALL: [Self; 14] = [
        Self::Sscofpmf,
        Self::Svpbmt,
        Self::Zicbom,
        Self::Zihintpause,
        Self::Sstc,
        Self::Svinval,
        Self::Svnapot,
        Self::Zba,
        Self::Zbb,
        Self::Zbc,
        Self::Zbs,
        Self::Zicboz,
        Self::Zksed,
        Self::Zkt,
    ];

    /// Bitmap index of this extension.
    #[inline]
    pub const fn id(self) -> usize {
        self as usize
    }

    /// Canonical lowercase name as it appears in an ISA string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sscofpmf => "sscofpmf",
            Self::Svpbmt => "svpbmt",
            Self::Zicbom => "zicbom",
            Self::Zihintpause => "zihintpause",
            Self::Sstc => "sstc",
            Self::Svinval => "svinval",
            Self::Svnapot => "svnapot",
            Self::Zba => "zba",
            Self::Zbb => "zbb",
            Self::Zbc => "zbc",
            Self::Zbs => "zbs",
            Self::Zicboz => "zicboz",
            Self::Zksed => "zksed",
            Self::Zkt => "zkt",
        }
    }

    /// Looks up an extension by exact name.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|ext| ext.name().as_bytes() == name)
    }

    /// Looks up an extension by bitmap index.
    pub fn from_id(id: usize) -> Option<Self> {
        id.checked_sub(ISA_EXT_BASE)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

impl fmt::Display for IsaExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
