//! normalize.rs - Per-character folding shared by insertion and scanning.
//!
//! Every mapping here is one code point to one code point, so position `i` of the
//! normalized text is always position `i` of the original text.

use crate::config::NormalizeConfig;

const FULLWIDTH_START: u32 = 0xFF01;
const FULLWIDTH_END: u32 = 0xFF5E;
const FULLWIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    lowercase: bool,
    fold_width: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizeConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &NormalizeConfig) -> Self {
        Self {
            lowercase: config.lowercase,
            fold_width: config.fold_width,
        }
    }

    /// Normalizes a single code point.
    pub fn normalize_char(&self, c: char) -> char {
        let c = if self.fold_width { fold_width(c) } else { c };
        if self.lowercase {
            single_lowercase(c)
        } else {
            c
        }
    }

    /// Normalizes `text` into a vector of code points of the same length.
    pub fn normalize(&self, text: &str) -> Vec<char> {
        text.chars().map(|c| self.normalize_char(c)).collect()
    }
}

fn fold_width(c: char) -> char {
    let cp = c as u32;
    if (FULLWIDTH_START..=FULLWIDTH_END).contains(&cp) {
        char::from_u32(cp - FULLWIDTH_OFFSET).unwrap_or(c)
    } else if c == IDEOGRAPHIC_SPACE {
        ' '
    } else {
        c
    }
}

// Characters whose lower-case form spans several code points (e.g. 'İ') are kept as is.
fn single_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
