use crate::{root::RootError, scheme::SchemeStoreError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Lookups that find nothing are `Option`s, not errors; this type only carries
/// rejected input and orchestration conflicts.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without structured detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a rejected-root error, keeping the root failure as detail.
    pub fn invalid_root(input: &str, err: RootError) -> Self {
        Self {
            class: ErrorClass::InvalidInput,
            origin: ErrorOrigin::Root,
            message: format!("invalid root '{input}': {err}"),
            detail: Some(ErrorDetail::Root(err)),
        }
    }

    /// Construct a lexicon-origin invalid input error.
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Lexicon, message)
    }

    pub fn scheme_not_found(name: impl Into<String>) -> Self {
        let name = name.into();

        Self::new(
            ErrorClass::NotFound,
            ErrorOrigin::Scheme,
            format!("scheme not found: '{name}'"),
        )
    }

    pub fn scheme_conflict(name: impl Into<String>) -> Self {
        let name = name.into();

        Self::new(
            ErrorClass::Conflict,
            ErrorOrigin::Scheme,
            format!("scheme already exists: '{name}'"),
        )
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<SchemeStoreError> for InternalError {
    fn from(err: SchemeStoreError) -> Self {
        Self {
            class: ErrorClass::InvalidInput,
            origin: ErrorOrigin::Scheme,
            message: err.to_string(),
            detail: Some(ErrorDetail::SchemeStore(err)),
        }
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Root(RootError),

    #[error("{0}")]
    SchemeStore(SchemeStoreError),
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    NotFound,
    Conflict,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Root,
    Scheme,
    Lexicon,
    Config,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Root => "root",
            Self::Scheme => "scheme",
            Self::Lexicon => "lexicon",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
