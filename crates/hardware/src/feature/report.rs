//! Human-readable rendering of detected capabilities.

use super::bitmap::IsaBitmap;
use crate::common::constants::NUM_ALPHA_EXTS;
use crate::isa::IsaExt;
use crate::isa::ext::bit_letter;

/// Renders the base letters set in `word`, in ascending letter order.
///
/// Bit `n` stands for letter `'a' + n`; bits above `z` are ignored.
pub fn letters(word: u64) -> String {
    (0..NUM_ALPHA_EXTS)
        .filter(|&bit| word & (1 << bit) != 0)
        .filter_map(bit_letter)
        .collect()
}

/// Recognized multi-letter extensions present in `bitmap`, in index order.
pub fn long_extensions(bitmap: &IsaBitmap) -> Vec<IsaExt> {
    bitmap.iter().filter_map(IsaExt::from_id).collect()
}

/// Renders the multi-letter extensions present in `bitmap`, separated by `_`.
pub fn long_extension_names(bitmap: &IsaBitmap) -> String {
    long_extensions(bitmap)
        .iter()
        .map(|ext| ext.name())
        .collect::<Vec<_>>()
        .join("_")
}
