use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Strokes charged per unfinished round once a golfer withdraws or is
/// disqualified: par plus this many.
pub const MISSED_ROUND_PENALTY: i32 = 8;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GolferStatus {
    Active,
    Cut,
    Withdrawn,
    Disqualified,
}

impl GolferStatus {
    /// Decode the feed's position label ("CUT", "WD", "DQ", or a numeric
    /// position) once, at snapshot load. Everything downstream pattern-matches
    /// the enum instead of re-parsing strings.
    #[must_use]
    pub fn from_position_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("CUT") => Self::Cut,
            Some("WD") => Self::Withdrawn,
            Some("DQ") => Self::Disqualified,
            _ => Self::Active,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// One player's entry in a single tournament.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Golfer {
    /// Stable external id, shared with team rosters.
    pub id: i64,
    pub player_name: String,
    pub status: GolferStatus,
    /// Raw strokes for rounds 1-4; `None` until the round is complete.
    pub rounds: [Option<i32>; 4],
    pub tee_times: [Option<NaiveDateTime>; 4],
    /// Live strokes relative to par for the round in progress.
    pub today: Option<f64>,
    /// Holes completed in the round in progress.
    pub thru: Option<f64>,
    pub position: Option<String>,
    /// Cumulative strokes relative to par.
    pub score: Option<f64>,
}

impl Golfer {
    /// Raw strokes for a 1-based round. A withdrawn or disqualified golfer is
    /// charged `par + MISSED_ROUND_PENALTY` for every round they did not
    /// finish; anyone else stays `None` until the round is posted.
    #[must_use]
    pub fn round_strokes(&self, round: usize, par: i32) -> Option<i32> {
        let raw = round
            .checked_sub(1)
            .and_then(|idx| self.rounds.get(idx))
            .copied()
            .flatten();
        match raw {
            Some(strokes) => Some(strokes),
            None if matches!(
                self.status,
                GolferStatus::Withdrawn | GolferStatus::Disqualified
            ) =>
            {
                Some(par + MISSED_ROUND_PENALTY)
            }
            None => None,
        }
    }

    #[must_use]
    pub fn tee_time(&self, round: usize) -> Option<NaiveDateTime> {
        round
            .checked_sub(1)
            .and_then(|idx| self.tee_times.get(idx))
            .copied()
            .flatten()
    }
}
