//! ## Crate layout
//! - `core`: root index, scheme store, derivation engine, lexicon facade, and
//!   observability.
//! - `config`: `sarf.toml` parsing and lexicon seeding.
//! - `error`: the stable public error type.
//!
//! The `prelude` module carries the domain vocabulary most callers need.

pub use sarf_config as config;
pub use sarf_core as core;

mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

use sarf_config::{CONFIG_FILE_NAME, LexiconConfig, SeedReport};
use sarf_core::lexicon::Lexicon;
use std::path::Path;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a seeded lexicon.
///
/// An explicit `config` path must exist; its seed files resolve against its
/// directory. Without one, `sarf.toml` in `dir` is used when present, and the
/// built-in seeds otherwise.
pub fn open(config: Option<&Path>, dir: &Path) -> Result<(Lexicon, SeedReport), Error> {
    let (config, base_dir) = match config {
        Some(path) => (
            LexiconConfig::load(path)?,
            path.parent().unwrap_or(dir).to_path_buf(),
        ),
        None => {
            let path = dir.join(CONFIG_FILE_NAME);
            let config = if path.is_file() {
                LexiconConfig::load(&path)?
            } else {
                LexiconConfig::default()
            };

            (config, dir.to_path_buf())
        }
    };

    Ok(config.build(&base_dir)?)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        engine::{apply_scheme, find_root_from_word, validate},
        lexicon::{Analysis, Lexicon},
        root::{Derivative, Root},
        scheme::Scheme,
    };
    pub use crate::{Error, ErrorKind};
}

///
/// TESTS
///
