//! Fixed-bucket scheme store.
//!
//! Schemes are placed by [`bucket_index`] on their name and kept in
//! insertion order inside each bucket. The bucket array never grows; a bucket
//! holding more than one record is a hash collision, never a duplicate name.

mod hash;


pub use hash::{HASH_MULTIPLIER, bucket_hash, bucket_index};

use crate::snapshot::SchemeTableSnapshot;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Bucket count used unless a store is built with an explicit count.
pub const DEFAULT_BUCKET_COUNT: usize = 31;

///
/// SchemeStoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemeStoreError {
    #[error("scheme store needs at least one bucket")]
    ZeroBuckets,
}

///
/// Scheme
///
/// A named template. `ف`, `ع` and `ل` in `pattern` stand for the first,
/// second and third root consonant; every other character is literal.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Scheme {
    pub name: String,
    pub pattern: String,
}

impl Scheme {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

///
/// SchemeStore
///

#[derive(Clone, Debug)]
pub struct SchemeStore {
    buckets: Vec<Vec<Scheme>>,
}

impl SchemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_BUCKET_COUNT],
        }
    }

    pub fn with_bucket_count(bucket_count: usize) -> Result<Self, SchemeStoreError> {
        if bucket_count == 0 {
            return Err(SchemeStoreError::ZeroBuckets);
        }

        Ok(Self {
            buckets: vec![Vec::new(); bucket_count],
        })
    }

    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of stored schemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    #[must_use]
    pub fn bucket_of(&self, name: &str) -> usize {
        // `with_bucket_count` rejects empty tables.
        bucket_index(name, self.buckets.len()).unwrap_or_default()
    }

    /// Upsert by name. A record with the same name keeps its position in the
    /// bucket and gets the new pattern; the replaced pattern is returned.
    pub fn insert(&mut self, scheme: Scheme) -> Option<String> {
        let index = self.bucket_of(&scheme.name);
        let bucket = &mut self.buckets[index];

        if let Some(existing) = bucket.iter_mut().find(|s| s.name == scheme.name) {
            return Some(std::mem::replace(&mut existing.pattern, scheme.pattern));
        }

        bucket.push(scheme);

        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scheme> {
        self.buckets[self.bucket_of(name)]
            .iter()
            .find(|s| s.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove by name; absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Scheme> {
        let index = self.bucket_of(name);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|s| s.name == name)?;

        Some(bucket.remove(position))
    }

    /// Every scheme, bucket by bucket in index order, then insertion order
    /// within a bucket. This order is the tie-break order for validation.
    pub fn iter(&self) -> impl Iterator<Item = &Scheme> + Clone {
        self.buckets.iter().flatten()
    }

    /// Owned copy of [`Self::iter`].
    #[must_use]
    pub fn get_all(&self) -> Vec<Scheme> {
        self.iter().cloned().collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|s| s.name.as_str())
    }

    /// The raw bucket array, for diagnostics.
    #[must_use]
    pub fn buckets(&self) -> &[Vec<Scheme>] {
        &self.buckets
    }

    /// Indices of buckets holding more than one scheme.
    #[must_use]
    pub fn collisions(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| bucket.len() > 1)
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }

    #[must_use]
    pub fn snapshot(&self) -> SchemeTableSnapshot {
        SchemeTableSnapshot {
            bucket_count: self.buckets.len(),
            buckets: self.buckets.clone(),
        }
    }
}

impl Default for SchemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Scheme> for SchemeStore {
    fn extend<I: IntoIterator<Item = Scheme>>(&mut self, iter: I) {
        for scheme in iter {
            self.insert(scheme);
        }
    }
}
