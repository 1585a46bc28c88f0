//! Text normalizer.
//!
//! Canonicalizes extracted description text so the rule tables can be
//! written once against lower-case, single-spaced, straight-quoted input.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

/// Curly and prime quote variants folded to `"`.
const QUOTE_VARIANTS: &[char] = &[
    '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}', '\u{2032}', // single
    '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{2033}', // double
];

/// Lower-cased, quote-unified, whitespace-collapsed text.
///
/// Only [`normalize`] can build one, so holding a `NormalizedText` means the
/// invariant holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fold case, map curly quotes to `"`, collapse whitespace runs to one
/// space and trim. Total over every input; `""` maps to `""`.
///
/// Case is folded after quotes and whitespace are canonical, since Greek
/// final sigma depends on the character that follows it.
pub fn normalize(raw: &str) -> NormalizedText {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().map(|c| {
            if QUOTE_VARIANTS.contains(&c) {
                '"'
            } else {
                c
            }
        }));
    }
    NormalizedText(fold_case(&out))
}

/// Lower-case such that `fold_case(s) == fold_case(&s.to_uppercase())`.
///
/// Plain `to_lowercase` is not enough: "ß" upper-cases to "SS", and "ı"
/// to "I". Round-tripping through upper case settles both, and the first
/// lowering turns "ẞ" into "ß" so the result is a fixed point.
fn fold_case(text: &str) -> String {
    text.to_lowercase().to_uppercase().to_lowercase()
}
