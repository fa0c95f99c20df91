use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Deserializer, Serialize};

///
/// Derivative
///
/// A concrete word remembered under a root, tagged with the name of the
/// scheme that produced (or validated) it.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Derivative {
    pub word: String,
    pub scheme: String,
}

impl Derivative {
    pub fn new(word: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            scheme: scheme.into(),
        }
    }
}

///
/// DerivativeList
///
/// Insertion-ordered derivative list, unique by `word`.
/// A second derivative with an already-present word is dropped, whatever its
/// scheme tag says.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DerivativeList(#[into_iterator(owned, ref)] Vec<Derivative>);

impl DerivativeList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from arbitrary input, discarding later duplicate words.
    pub fn from_iter_dedup(items: impl IntoIterator<Item = Derivative>) -> Self {
        let mut list = Self::new();
        list.merge(items);

        list
    }

    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.0.iter().any(|d| d.word == word)
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Derivative> {
        self.0.iter().find(|d| d.word == word)
    }

    /// Append a derivative, returning `true` if its word was not yet present.
    pub fn insert(&mut self, derivative: Derivative) -> bool {
        if self.contains_word(&derivative.word) {
            return false;
        }

        self.0.push(derivative);

        true
    }

    /// Append every derivative whose word is new; returns how many were added.
    pub fn merge(&mut self, items: impl IntoIterator<Item = Derivative>) -> usize {
        items
            .into_iter()
            .map(|d| usize::from(self.insert(d)))
            .sum()
    }
}

impl<'de> Deserialize<'de> for DerivativeList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Derivative>::deserialize(deserializer)?;

        Ok(Self::from_iter_dedup(items))
    }
}
