//! Per-hart capability accumulation.
//!
//! Runs the tokenizer over one hart's ISA string and collects the extension
//! presence bitmap and the ELF capability mask for that hart.

use tracing::{debug, info, warn};

use super::bitmap::IsaBitmap;
use crate::isa::{ElfHwcap, ExtensionToken, IsaExt, Tokens, Xlen, strip_width_prefix};

/// Extensions announced individually when a hart reports them.
const REPORTED_EXTS: [(&str, &str); 4] = [
    ("h", "H"),
    ("zba", "Zba"),
    ("zihintpause", "ZiHintPause"),
    ("zksed", "Zksed"),
];

/// Capabilities decoded from a single hart's ISA string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HartIsa {
    /// Extension presence bitmap.
    pub isa: IsaBitmap,
    /// ELF capability mask.
    pub elf_hwcap: ElfHwcap,
}

impl HartIsa {
    /// Decodes a complete ISA string such as `rv64imafdc_zba`.
    ///
    /// Malformed tokens are skipped; they contribute nothing to either result.
    ///
    /// # Arguments
    ///
    /// * `isa` - The hart's ISA description, with or without width prefix.
    /// * `xlen` - Width whose prefix may be stripped; `None` accepts either.
    pub fn parse(isa: &str, xlen: Option<Xlen>) -> Self {
        let body = strip_width_prefix(isa, xlen);
        let mut hart = Self::default();
        for token in Tokens::new(body.as_bytes()) {
            hart.add_token(&token);
        }
        hart
    }

    /// Folds one decoded token into this hart's capabilities.
    pub fn add_token(&mut self, token: &ExtensionToken<'_>) {
        if token.is_malformed() {
            debug!(token = ?String::from_utf8_lossy(token.name), "skipping malformed extension");
            return;
        }
        if token.has_version_error() {
            warn!(
                ext = %String::from_utf8_lossy(token.name),
                "extension version out of range, keeping extension"
            );
        }

        if let Some(letter) = token.letter() {
            self.isa.set_letter(letter);
            self.elf_hwcap |= ElfHwcap::from_letter(letter);
        } else if let Some(ext) = IsaExt::from_name(token.name) {
            self.isa.set_ext(ext);
        }

        for (name, label) in REPORTED_EXTS {
            if token.is_named(name) {
                info!("[FEATURE_TEST] {label} extension is supported.");
            }
        }
    }
}
