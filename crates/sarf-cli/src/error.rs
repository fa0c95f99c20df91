use rustyline::error::ReadlineError;
use sarf::core::error::InternalError;
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
pub(crate) enum CliError {
    #[error("{}: {}", .0.kind, .0)]
    Lexicon(#[from] sarf::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Readline(#[from] ReadlineError),

    #[error("failed to install log subscriber: {0}")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl CliError {
    /// Lexicon errors are reported and the shell keeps going; anything else
    /// ends the session.
    pub(crate) const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Lexicon(_))
    }
}

impl From<InternalError> for CliError {
    fn from(err: InternalError) -> Self {
        Self::Lexicon(err.into())
    }
}
