use crate::model::{Golfer, Team, TeamResult, TourCard, Tournament};
use crate::score::playoff::PlayoffContext;
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

/// The consistent read one scoring cycle computes from.
#[derive(Debug, Clone)]
pub struct TournamentSnapshot {
    pub tournament: Tournament,
    pub golfers: Vec<Golfer>,
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Persistence adapter around the scoring core. Implementations own the
/// snapshot reads, the playoff chronology (event index and carry-in map),
/// and the result writes; writes should diff against stored values and land
/// in a single transaction so a cycle commits all team rows or none.
#[async_trait]
pub trait Storage: Send + Sync {
    /// The tournament to score right now, or `None` between events.
    async fn current_tournament(&self) -> Result<Option<TournamentSnapshot>, StorageError>;

    async fn tour_cards(&self, season_id: i64) -> Result<Vec<TourCard>, StorageError>;

    /// Playoff inputs for the given tournament; `None` for regular-season
    /// events.
    async fn playoff_context(
        &self,
        tournament: &Tournament,
    ) -> Result<Option<PlayoffContext>, StorageError>;

    async fn store_team_results(
        &self,
        tournament_id: i64,
        results: &[TeamResult],
    ) -> Result<(), StorageError>;
}
