//! Derivation engine.
//!
//! Stateless template substitution and validation over roots and schemes.
//! Nothing here knows Arabic morphology beyond the three marker positions:
//! a pattern is rendered character by character, markers become consonants and
//! everything else (vowel marks included) passes through untouched.

#[cfg(test)]
mod tests;

use crate::{
    root::{Consonants, RootError},
    scheme::Scheme,
};

///
/// CONSTANTS
///

/// Marker for the first root consonant.
pub const FA: char = 'ف';

/// Marker for the second root consonant.
pub const AIN: char = 'ع';

/// Marker for the third root consonant.
pub const LAM: char = 'ل';

impl Consonants {
    /// Substitute this root's consonants into `pattern`.
    #[must_use]
    pub fn render(&self, pattern: &str) -> String {
        pattern.chars().map(|c| self.substitute(c)).collect()
    }

    const fn substitute(&self, c: char) -> char {
        match c {
            FA => self.first(),
            AIN => self.second(),
            LAM => self.third(),
            literal => literal,
        }
    }
}

/// Render `pattern` against a three-letter `root`.
///
/// Only the root length is checked; letter-range validation is the caller's
/// concern.
pub fn apply_scheme(root: &str, pattern: &str) -> Result<String, RootError> {
    Consonants::from_root(root).map(|c| c.render(pattern))
}

///
/// Validation
/// Outcome of [`validate`]: the first scheme that reproduces the word, if any.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Validation<'a> {
    pub scheme: Option<&'a Scheme>,
}

impl<'a> Validation<'a> {
    const INVALID: Self = Self { scheme: None };

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.scheme.is_some()
    }

    #[must_use]
    pub const fn scheme(&self) -> Option<&'a Scheme> {
        self.scheme
    }
}

/// Check whether `word` is `root` rendered through one of `schemes`.
///
/// Schemes are tried in the order the iterator yields them and the first exact
/// match wins, so callers that care about ties must pass a stable order (the
/// scheme store's `iter()` is one). A root that is not three code points
/// never validates.
pub fn validate<'a, I>(word: &str, root: &str, schemes: I) -> Validation<'a>
where
    I: IntoIterator<Item = &'a Scheme>,
{
    let Ok(consonants) = Consonants::from_root(root) else {
        return Validation::INVALID;
    };

    Validation {
        scheme: schemes
            .into_iter()
            .find(|s| renders_to(consonants, &s.pattern, word)),
    }
}

///
/// RootMatch
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RootMatch<'r, 'a> {
    pub root: &'r str,
    pub scheme: &'a Scheme,
}

/// Brute-force reverse lookup: the first `(root, scheme)` pair, in the order
/// given, under which `word` validates.
///
/// Cost is `O(roots × schemes × pattern length)`; both collections are
/// expected to stay in the tens.
pub fn find_root_from_word<'r, 'a, R, S>(
    word: &str,
    schemes: S,
    known_roots: R,
) -> Option<RootMatch<'r, 'a>>
where
    R: IntoIterator<Item = &'r str>,
    S: IntoIterator<Item = &'a Scheme> + Clone,
{
    known_roots.into_iter().find_map(|root| {
        validate(word, root, schemes.clone())
            .scheme()
            .map(|scheme| RootMatch { root, scheme })
    })
}

// Compare the rendering against `word` without allocating.
fn renders_to(consonants: Consonants, pattern: &str, word: &str) -> bool {
    pattern
        .chars()
        .map(|c| consonants.substitute(c))
        .eq(word.chars())
}
