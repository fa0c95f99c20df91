use crate::{
    error::ConfigError,
    seed::{
        DEFAULT_ROOTS, DEFAULT_SCHEMES, DerivativeLine, SeedReport, SkippedRoot,
        parse_derivatives, parse_roots,
    },
};
use sarf_core::{
    lexicon::Lexicon,
    root::Derivative,
    scheme::{DEFAULT_BUCKET_COUNT, Scheme, SchemeStore},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

///
/// LexiconConfig
/// Root of a `sarf.toml` file.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconConfig {
    pub schemes: SchemeTableConfig,
    pub seed: SeedConfig,
}

///
/// SchemeTableConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemeTableConfig {
    pub bucket_count: usize,
}

impl Default for SchemeTableConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

///
/// SeedConfig
///
/// Relative file paths resolve against the directory handed to
/// [`LexiconConfig::build`]. When `roots` and `roots_file` are both absent, or
/// together yield no roots, the built-in root list is used.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    pub roots: Option<Vec<String>>,
    pub roots_file: Option<PathBuf>,
    pub derivatives_file: Option<PathBuf>,
    pub default_schemes: bool,
    pub schemes: Vec<Scheme>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            roots: None,
            roots_file: None,
            derivatives_file: None,
            default_schemes: true,
            schemes: Vec::new(),
        }
    }
}

impl LexiconConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read(path)?)
    }

    /// Build a seeded lexicon.
    ///
    /// Schemes go in first: the built-in set (if enabled), then the configured
    /// ones, which replace built-ins of the same name. Roots follow in list
    /// order, each with the derivatives the derivatives file gives it; a later
    /// line for the same root replaces an earlier one, and lines for roots not
    /// being seeded are ignored. Roots that fail validation are skipped and
    /// reported rather than failing the build.
    pub fn build(&self, base_dir: &Path) -> Result<(Lexicon, SeedReport), ConfigError> {
        let mut lexicon = Lexicon::with_schemes(SchemeStore::with_bucket_count(
            self.schemes.bucket_count,
        )?);
        self.seed_schemes(&mut lexicon)?;

        let roots = self.seed.roots(base_dir)?;
        let lines = self.seed.derivative_lines(base_dir)?;
        let by_root = lines
            .iter()
            .map(|line| (line.root.as_str(), line.derivatives.as_slice()))
            .collect::<HashMap<_, _>>();

        let mut report = SeedReport {
            schemes: lexicon.schemes().len(),
            ..SeedReport::default()
        };

        for root in &roots {
            let created = !lexicon.roots().contains(root);
            let derivatives: &[Derivative] =
                by_root.get(root.as_str()).copied().unwrap_or_default();

            match lexicon.record_derivatives(root, derivatives.iter().cloned()) {
                Ok(added) => {
                    report.roots_created += usize::from(created);
                    report.derivatives_added += added;
                }
                Err(err) => report.skipped_roots.push(SkippedRoot {
                    root: root.clone(),
                    reason: err.message,
                }),
            }
        }

        Ok((lexicon, report))
    }

    fn seed_schemes(&self, lexicon: &mut Lexicon) -> Result<(), ConfigError> {
        if self.seed.default_schemes {
            for (name, pattern) in DEFAULT_SCHEMES {
                lexicon.upsert_scheme(Scheme::new(*name, *pattern));
            }
        }

        for scheme in &self.seed.schemes {
            let result = if lexicon.schemes().contains(&scheme.name) {
                lexicon.edit_scheme(&scheme.name, scheme.clone())
            } else {
                lexicon.add_scheme(scheme.clone())
            };
            result.map_err(ConfigError::SeedScheme)?;
        }

        Ok(())
    }
}

impl SeedConfig {
    fn roots(&self, base_dir: &Path) -> Result<Vec<String>, ConfigError> {
        let mut roots = self
            .roots
            .iter()
            .flatten()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect::<Vec<_>>();
        if let Some(file) = &self.roots_file {
            roots.extend(parse_roots(&read(&base_dir.join(file))?));
        }

        if roots.is_empty() {
            roots = DEFAULT_ROOTS.iter().map(|r| (*r).to_string()).collect();
        }

        Ok(roots)
    }

    fn derivative_lines(&self, base_dir: &Path) -> Result<Vec<DerivativeLine>, ConfigError> {
        match &self.derivatives_file {
            Some(file) => Ok(parse_derivatives(&read(&base_dir.join(file))?)),
            None => Ok(Vec::new()),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))
}

///
/// TESTS
///
