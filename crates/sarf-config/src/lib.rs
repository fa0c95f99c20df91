//! `sarf.toml` loading and lexicon seeding.

mod config;
mod error;
pub mod seed;

pub use config::{LexiconConfig, SchemeTableConfig, SeedConfig};
pub use error::ConfigError;
pub use seed::{SeedReport, SkippedRoot, parse_derivatives, parse_roots};

/// Conventional config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "sarf.toml";
