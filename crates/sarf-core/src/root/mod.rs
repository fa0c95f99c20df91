//! Root and derivative value types shared by the index, the engine, and the
//! lexicon facade.

mod derivative;

#[cfg(test)]
mod tests;

pub use derivative::{Derivative, DerivativeList};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, ops::RangeInclusive};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Number of consonants in a trilateral root.
pub const ROOT_LEN: usize = 3;

/// Code points accepted as root letters (hamza through yeh).
pub const ARABIC_LETTERS: RangeInclusive<char> = '\u{0621}'..='\u{064A}';

///
/// RootError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RootError {
    #[error("root must be exactly {ROOT_LEN} letters, found {found}")]
    Length { found: usize },

    #[error("'{letter}' at position {position} is not an Arabic letter")]
    Letter { letter: char, position: usize },
}

///
/// Root
///
/// A validated trilateral root. The inner string is exactly three code points
/// from the Arabic letter block; ordering is plain code-point ordering.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Root(String);

impl Root {
    /// Validate and wrap a root string. No trimming or normalization is applied.
    pub fn parse(input: &str) -> Result<Self, RootError> {
        let found = input.chars().count();
        if found != ROOT_LEN {
            return Err(RootError::Length { found });
        }

        if let Some((position, letter)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !ARABIC_LETTERS.contains(c))
        {
            return Err(RootError::Letter { letter, position });
        }

        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn consonants(&self) -> Consonants {
        let mut chars = self.0.chars();
        // Length was checked by `parse`.
        let mut next = || chars.next().unwrap_or_default();

        Consonants([next(), next(), next()])
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Root {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Root {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Root {
    type Error = RootError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Root {
    type Error = RootError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl<'de> Deserialize<'de> for Root {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

///
/// Consonants
///
/// The three positional consonants of a root. Only the length rule is checked
/// here; letter-range validation belongs to [`Root::parse`].
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Consonants([char; ROOT_LEN]);

impl Consonants {
    pub fn from_root(root: &str) -> Result<Self, RootError> {
        let mut out = ['\0'; ROOT_LEN];
        let mut found = 0;

        for c in root.chars() {
            if found < ROOT_LEN {
                out[found] = c;
            }
            found += 1;
        }

        if found == ROOT_LEN {
            Ok(Self(out))
        } else {
            Err(RootError::Length { found })
        }
    }

    #[must_use]
    pub const fn first(&self) -> char {
        self.0[0]
    }

    #[must_use]
    pub const fn second(&self) -> char {
        self.0[1]
    }

    #[must_use]
    pub const fn third(&self) -> char {
        self.0[2]
    }

    #[must_use]
    pub const fn as_array(&self) -> [char; ROOT_LEN] {
        self.0
    }
}
