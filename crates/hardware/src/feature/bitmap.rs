//! Extension presence bitmap.
//!
//! A fixed-size bitset with one flag per extension index. Indices `0..26` hold the
//! base letters; higher indices hold [`IsaExt`] entries.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::common::constants::{BASE_EXT_MASK, BITS_PER_WORD, ISA_EXT_MAX, ISA_EXT_WORDS};
use crate::isa::IsaExt;
use crate::isa::ext::letter_bit;

/// Set of present extensions, indexed `0..ISA_EXT_MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IsaBitmap {
    words: [u64; ISA_EXT_WORDS],
}

impl IsaBitmap {
    /// Bitmap with no extension set.
    pub const EMPTY: Self = Self {
        words: [0; ISA_EXT_WORDS],
    };

    /// Creates an empty bitmap.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a bitmap holding the given base-letter word (bit `n` is letter `'a' + n`).
    ///
    /// Bits above the base range are discarded.
    pub const fn from_base_word(word: u64) -> Self {
        let mut words = [0; ISA_EXT_WORDS];
        words[0] = word & BASE_EXT_MASK;
        Self { words }
    }

    /// Sets bit `bit`. Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, bit: usize) {
        if bit < ISA_EXT_MAX {
            self.words[bit / BITS_PER_WORD] |= 1 << (bit % BITS_PER_WORD);
        }
    }

    /// Clears bit `bit`. Out-of-range indices are ignored.
    #[inline]
    pub fn clear(&mut self, bit: usize) {
        if bit < ISA_EXT_MAX {
            self.words[bit / BITS_PER_WORD] &= !(1 << (bit % BITS_PER_WORD));
        }
    }

    /// Returns whether bit `bit` is set; `false` for out-of-range indices.
    #[inline]
    pub const fn test(&self, bit: usize) -> bool {
        bit < ISA_EXT_MAX && self.words[bit / BITS_PER_WORD] & (1 << (bit % BITS_PER_WORD)) != 0
    }

    /// Sets the bit of base letter `letter` (`a`..`z`). Other bytes are ignored.
    pub fn set_letter(&mut self, letter: u8) {
        if let Some(bit) = letter_bit(letter) {
            self.set(bit);
        }
    }

    /// Returns whether base letter `letter` is set.
    pub fn has_letter(&self, letter: u8) -> bool {
        letter_bit(letter).is_some_and(|bit| self.test(bit))
    }

    /// Sets the bit of a multi-letter extension.
    #[inline]
    pub fn set_ext(&mut self, ext: IsaExt) {
        self.set(ext.id());
    }

    /// Returns whether a multi-letter extension is set.
    #[inline]
    pub const fn has_ext(&self, ext: IsaExt) -> bool {
        self.test(ext.id())
    }

    /// Base-letter word: bit `n` is set when letter `'a' + n` is present.
    #[inline]
    pub const fn base_word(&self) -> u64 {
        self.words[0] & BASE_EXT_MASK
    }

    /// Returns true if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Raw storage words, least significant index first.
    pub const fn words(&self) -> &[u64; ISA_EXT_WORDS] {
        &self.words
    }

    /// Iterates over the indices of all set bits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..ISA_EXT_MAX).filter(|&bit| self.test(bit))
    }
}

impl BitAnd for IsaBitmap {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

impl BitAndAssign for IsaBitmap {
    fn bitand_assign(&mut self, rhs: Self) {
        for (w, r) in self.words.iter_mut().zip(rhs.words) {
            *w &= r;
        }
    }
}

impl BitOr for IsaBitmap {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl BitOrAssign for IsaBitmap {
    fn bitor_assign(&mut self, rhs: Self) {
        for (w, r) in self.words.iter_mut().zip(rhs.words) {
            *w |= r;
        }
    }
}
