//! Lexicon facade.
//!
//! Owns one root index, one scheme store and a word-to-root inverse index,
//! and is the only place those three are mutated together. Input that the
//! bare structures accept without question (scheme name uniqueness, root
//! letter range) is checked here before anything is touched, so a rejected
//! command leaves the lexicon unchanged.


use crate::{
    engine,
    error::InternalError,
    index::RootIndex,
    obs::sink::{self, MetricsEvent},
    root::{Derivative, Root},
    scheme::{Scheme, SchemeStore},
    snapshot::{LexiconReport, RootTreeSnapshot, SchemeTableSnapshot},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

///
/// Analysis
/// A word traced back to one known root and the scheme that produces it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Analysis {
    pub root: Root,
    pub scheme: Scheme,

    /// `true` when the root came from the inverse index rather than a scan.
    pub cached: bool,
}

///
/// Lexicon
///

#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    roots: RootIndex,
    schemes: SchemeStore,
    words: HashMap<String, Root>,
}

impl Lexicon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing (possibly pre-filled) scheme store.
    #[must_use]
    pub fn with_schemes(schemes: SchemeStore) -> Self {
        Self {
            roots: RootIndex::new(),
            schemes,
            words: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn roots(&self) -> &RootIndex {
        &self.roots
    }

    #[must_use]
    pub const fn schemes(&self) -> &SchemeStore {
        &self.schemes
    }

    /// Root a recorded word was last filed under.
    #[must_use]
    pub fn root_of(&self, word: &str) -> Option<&Root> {
        self.words.get(word)
    }

    ///
    /// ROOTS
    ///

    /// Register a root; returns `true` if it was not already known.
    pub fn add_root(&mut self, root: &str) -> Result<bool, InternalError> {
        let created = !self.roots.contains(root);
        self.roots
            .insert(root, [])
            .map_err(|err| InternalError::invalid_root(root, err))?;

        sink::record(MetricsEvent::RootInserted { root, created });

        Ok(created)
    }

    /// Register a root (if needed) and file `derivatives` under it.
    /// Returns how many derivatives were new.
    pub fn record_derivatives(
        &mut self,
        root: &str,
        derivatives: impl IntoIterator<Item = Derivative>,
    ) -> Result<usize, InternalError> {
        self.add_root(root)?;

        Ok(derivatives
            .into_iter()
            .map(|d| usize::from(self.record(root, d)))
            .sum())
    }

    ///
    /// SCHEMES
    ///

    /// Add a new scheme. Empty names or patterns and already-used names are
    /// rejected.
    pub fn add_scheme(&mut self, scheme: Scheme) -> Result<(), InternalError> {
        check_scheme(&scheme)?;
        if self.schemes.contains(&scheme.name) {
            return Err(InternalError::scheme_conflict(scheme.name));
        }

        self.upsert_scheme(scheme);

        Ok(())
    }

    /// Unchecked upsert by name; returns the replaced pattern, if any.
    pub fn upsert_scheme(&mut self, scheme: Scheme) -> Option<String> {
        let name = scheme.name.clone();
        let replaced = self.schemes.insert(scheme);

        sink::record(MetricsEvent::SchemeUpserted {
            name: &name,
            replaced: replaced.is_some(),
        });

        replaced
    }

    /// Replace the scheme called `old_name` with `scheme`.
    ///
    /// Keeping the name replaces the pattern in place. A new name must not
    /// belong to another scheme; the old record is then removed and the new
    /// one inserted under its own bucket. Derivatives already filed under the
    /// old name keep their tag.
    pub fn edit_scheme(&mut self, old_name: &str, scheme: Scheme) -> Result<(), InternalError> {
        check_scheme(&scheme)?;
        if !self.schemes.contains(old_name) {
            return Err(InternalError::scheme_not_found(old_name));
        }

        let renamed = scheme.name != old_name;
        if renamed && self.schemes.contains(&scheme.name) {
            return Err(InternalError::scheme_conflict(scheme.name));
        }

        if renamed {
            self.remove_scheme(old_name);
        }
        self.upsert_scheme(scheme);

        Ok(())
    }

    pub fn remove_scheme(&mut self, name: &str) -> Option<Scheme> {
        let removed = self.schemes.remove(name)?;
        sink::record(MetricsEvent::SchemeRemoved { name });

        Some(removed)
    }

    ///
    /// DERIVATION
    ///

    /// Render `root` through the named scheme and file the result under the
    /// root, registering the root first if needed.
    pub fn generate(&mut self, root: &str, scheme_name: &str) -> Result<String, InternalError> {
        let scheme = self
            .schemes
            .get(scheme_name)
            .ok_or_else(|| InternalError::scheme_not_found(scheme_name))?;
        let consonants = Root::parse(root)
            .map_err(|err| InternalError::invalid_root(root, err))?
            .consonants();
        let word = consonants.render(&scheme.pattern);

        sink::record(MetricsEvent::Generate {
            root,
            scheme: scheme_name,
            word: &word,
        });

        self.record_derivatives(root, [Derivative::new(word.clone(), scheme_name)])?;

        Ok(word)
    }

    /// Check `word` against `root` under every stored scheme, in store order.
    ///
    /// A match is learned: the root is registered if needed and the word is
    /// filed under it with the matching scheme's name.
    pub fn validate(&mut self, word: &str, root: &str) -> Result<Option<Scheme>, InternalError> {
        Root::parse(root).map_err(|err| InternalError::invalid_root(root, err))?;

        let matched = engine::validate(word, root, self.schemes.iter())
            .scheme()
            .cloned();

        sink::record(MetricsEvent::Validate {
            word,
            root,
            matched: matched.as_ref().map(|s| s.name.as_str()),
        });

        if let Some(scheme) = &matched {
            self.record_derivatives(root, [Derivative::new(word, scheme.name.clone())])?;
        }

        Ok(matched)
    }

    /// Trace `word` back to a known root.
    ///
    /// The inverse index is consulted first; on a miss every root is tried in
    /// ascending order against every scheme in store order.
    #[must_use]
    pub fn analyze(&self, word: &str) -> Option<Analysis> {
        let cached = self.words.get(word).and_then(|root| {
            engine::validate(word, root.as_str(), self.schemes.iter())
                .scheme()
                .map(|scheme| Analysis {
                    root: root.clone(),
                    scheme: scheme.clone(),
                    cached: true,
                })
        });

        let analysis = cached.or_else(|| {
            let known = self.roots.iter().map(|node| node.root().as_str());
            let found = engine::find_root_from_word(word, self.schemes.iter(), known)?;

            self.roots.search(found.root).map(|node| Analysis {
                root: node.root().clone(),
                scheme: found.scheme.clone(),
                cached: false,
            })
        });

        sink::record(MetricsEvent::Analyze {
            word,
            cache_hit: analysis.as_ref().is_some_and(|a| a.cached),
            matched: analysis.is_some(),
        });

        analysis
    }

    ///
    /// VIEWS
    ///

    #[must_use]
    pub fn tree_snapshot(&self) -> Option<RootTreeSnapshot> {
        self.roots.snapshot()
    }

    #[must_use]
    pub fn scheme_table_snapshot(&self) -> SchemeTableSnapshot {
        self.schemes.snapshot()
    }

    #[must_use]
    pub fn report(&self) -> LexiconReport {
        LexiconReport {
            roots: self.roots.len(),
            derivatives: self.roots.iter().map(|n| n.derivatives().len()).sum(),
            tree_depth: self.roots.depth(),
            schemes: self.schemes.len(),
            bucket_count: self.schemes.bucket_count(),
            occupied_buckets: self.schemes.occupied_buckets(),
            collisions: self.schemes.collisions(),
            indexed_words: self.words.len(),
        }
    }

    // File one derivative under an already-registered root. Returns `false`
    // when the word is already recorded there.
    fn record(&mut self, root: &str, derivative: Derivative) -> bool {
        let Some(node) = self.roots.search(root) else {
            return false;
        };
        if node.derivatives().contains_word(&derivative.word) {
            return false;
        }

        sink::record(MetricsEvent::DerivativeRecorded {
            root,
            word: &derivative.word,
            scheme: &derivative.scheme,
        });

        self.words
            .insert(derivative.word.clone(), node.root().clone());

        self.roots.add_derivative(root, derivative)
    }
}

fn check_scheme(scheme: &Scheme) -> Result<(), InternalError> {
    if scheme.name.trim().is_empty() {
        return Err(InternalError::invalid_input("scheme name must not be empty"));
    }
    if scheme.pattern.trim().is_empty() {
        return Err(InternalError::invalid_input(format!(
            "scheme '{}' has an empty pattern",
            scheme.name
        )));
    }

    Ok(())
}
