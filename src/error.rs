use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ScoreError {
    /// Expected transient state (between seasons, feed not yet populated).
    /// Callers should no-op or retry a later cycle rather than alarm.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("team {team_id}: {message}")]
    Team { team_id: i64, message: String },
}

impl From<StorageError> for ScoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl ScoreError {
    #[must_use]
    pub fn insufficient(message: impl Into<String>) -> Self {
        Self::InsufficientData(message.into())
    }

    /// True when the cycle should be skipped rather than reported as a failure.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::InsufficientData(_))
    }
}
