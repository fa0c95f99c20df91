use sarf_core::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    scheme::SchemeStoreError,
};
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scheme table: {0}")]
    SchemeTable(#[from] SchemeStoreError),

    #[error("invalid seed scheme: {0}")]
    SeedScheme(#[source] InternalError),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::SeedScheme(inner) => inner,
            ConfigError::Io { .. } => {
                Self::new(ErrorClass::Internal, ErrorOrigin::Config, err.to_string())
            }
            ConfigError::Parse(_) | ConfigError::SchemeTable(_) => {
                Self::new(ErrorClass::InvalidInput, ErrorOrigin::Config, err.to_string())
            }
        }
    }
}
