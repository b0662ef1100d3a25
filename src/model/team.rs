use crate::model::tour_card::Bracket;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Position label shared by a fantasy team that misses the cut.
pub const CUT_POSITION: &str = "CUT";

/// A fantasy entry: a fixed roster of golfer ids drafted before the
/// tournament, owned by one tour card. Rosters are resolved against the
/// tournament's golfer pool at computation time, never denormalized.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Team {
    pub id: i64,
    pub tour_card_id: i64,
    pub golfer_ids: Vec<i64>,
}

/// The per-team output row of one scoring cycle. Assembled once by the
/// builder with every field present (nullable); the persistence adapter diffs
/// it against stored values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamResult {
    pub team_id: i64,
    pub tour_card_id: i64,
    pub tour_id: i64,
    pub bracket: Option<Bracket>,
    pub round: i32,
    pub round_one: Option<f64>,
    pub round_two: Option<f64>,
    pub round_three: Option<f64>,
    pub round_four: Option<f64>,
    pub today: Option<f64>,
    pub thru: Option<f64>,
    pub score: Option<f64>,
    pub position: Option<String>,
    pub past_position: Option<String>,
    pub round_one_tee_time: Option<NaiveDateTime>,
    pub round_two_tee_time: Option<NaiveDateTime>,
    pub round_three_tee_time: Option<NaiveDateTime>,
    pub round_four_tee_time: Option<NaiveDateTime>,
    pub points: Option<f64>,
    pub earnings: Option<f64>,
}

impl TeamResult {
    #[must_use]
    pub fn new(
        team_id: i64,
        tour_card_id: i64,
        tour_id: i64,
        bracket: Option<Bracket>,
        round: i32,
    ) -> Self {
        Self {
            team_id,
            tour_card_id,
            tour_id,
            bracket,
            round,
            round_one: None,
            round_two: None,
            round_three: None,
            round_four: None,
            today: None,
            thru: None,
            score: None,
            position: None,
            past_position: None,
            round_one_tee_time: None,
            round_two_tee_time: None,
            round_three_tee_time: None,
            round_four_tee_time: None,
            points: None,
            earnings: None,
        }
    }

    #[must_use]
    pub fn is_cut(&self) -> bool {
        self.position.as_deref() == Some(CUT_POSITION)
    }

    /// Cumulative score before today's round; feeds `past_position`.
    #[must_use]
    pub fn past_score(&self) -> Option<f64> {
        self.score.map(|s| s - self.today.unwrap_or(0.0))
    }

    /// Mean raw strokes for a 1-based round.
    #[must_use]
    pub fn round_raw(&self, round: usize) -> Option<f64> {
        match round {
            1 => self.round_one,
            2 => self.round_two,
            3 => self.round_three,
            4 => self.round_four,
            _ => None,
        }
    }

    pub fn set_round_raw(&mut self, round: usize, value: Option<f64>) {
        match round {
            1 => self.round_one = value,
            2 => self.round_two = value,
            3 => self.round_three = value,
            4 => self.round_four = value,
            _ => {}
        }
    }

    pub fn set_round_tee_time(&mut self, round: usize, value: Option<NaiveDateTime>) {
        match round {
            1 => self.round_one_tee_time = value,
            2 => self.round_two_tee_time = value,
            3 => self.round_three_tee_time = value,
            4 => self.round_four_tee_time = value,
            _ => {}
        }
    }
}
