//! Built-in seed data and the plain-text seed file formats.
//!
//! Roots file: one root per line; surrounding whitespace and blank lines are
//! ignored. Derivatives file: `root,word1,word2,...` per line; the words are
//! tagged by position (see [`derivative_label`]).

use sarf_core::root::Derivative;
use serde::Serialize;

///
/// CONSTANTS
///

/// Roots seeded when the config names neither inline roots nor a roots file.
pub const DEFAULT_ROOTS: &[&str] = &[
    "كتب", "درس", "عمل", "قرأ", "خرج", "دخل", "علم", "فهم", "نصر", "رسم",
];

/// `(name, pattern)` pairs seeded when `default_schemes` is on.
pub const DEFAULT_SCHEMES: &[(&str, &str)] = &[
    ("اسم فاعل", "فَاعِل"),
    ("اسم مفعول", "مَفْعُول"),
    ("المصدر", "اِفْتِعَال"),
    ("الماضي", "فَعَلَ"),
    ("المضارع", "يَفْعَلُ"),
    ("اسم المكان", "مَفْعَل"),
    ("الطلب", "اِسْتِفْعَال"),
];

/// Scheme names given to derivative-file words by position; every word past
/// the last label reuses it.
const DERIVATIVE_LABELS: [&str; 3] = ["اسم فاعل", "اسم مفعول", "مصدر"];

///
/// DerivativeLine
/// One parsed line of a derivatives file.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivativeLine {
    pub root: String,
    pub derivatives: Vec<Derivative>,
}

///
/// SeedReport
/// What `LexiconConfig::build` actually loaded.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SeedReport {
    pub roots_created: usize,
    pub derivatives_added: usize,
    pub schemes: usize,
    pub skipped_roots: Vec<SkippedRoot>,
}

///
/// SkippedRoot
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SkippedRoot {
    pub root: String,
    pub reason: String,
}

/// Scheme name for the word at `position` on a derivatives line.
#[must_use]
pub fn derivative_label(position: usize) -> &'static str {
    DERIVATIVE_LABELS[position.min(DERIVATIVE_LABELS.len() - 1)]
}

/// Parse a roots file. Validation happens when the roots are inserted.
#[must_use]
pub fn parse_roots(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a derivatives file. Lines without at least one word after the root
/// are ignored, as are empty words.
#[must_use]
pub fn parse_derivatives(text: &str) -> Vec<DerivativeLine> {
    text.lines()
        .filter_map(|line| {
            let mut parts = line.trim().split(',').map(str::trim);
            let root = parts.next().filter(|root| !root.is_empty())?;

            let derivatives = parts
                .enumerate()
                .filter(|(_, word)| !word.is_empty())
                .map(|(i, word)| Derivative::new(word, derivative_label(i)))
                .collect::<Vec<_>>();

            (!derivatives.is_empty()).then(|| DerivativeLine {
                root: root.to_string(),
                derivatives,
            })
        })
        .collect()
}

///
/// TESTS
///
