use sos_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordingError {
    #[error("Recording is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not access recording: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Recorded move #{index} was rejected: {source}")]
    InvalidMove { index: usize, source: GameError },
}

/// Failure of the optional move-suggestion service. Always absorbed by the caller's fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),
    #[error("Could not parse oracle reply {0:?}")]
    Unparsable(String),
}
