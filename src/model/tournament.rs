use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub name: String,
    pub par: i32,
}

/// Points and payout schedules for one tournament tier, indexed by finishing
/// position (position 1 reads index 0). Playoff tiers reserve sub-ranges per
/// bracket; see the playoff rules module.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tier {
    pub name: String,
    pub points: Vec<f64>,
    pub payouts: Vec<f64>,
}

impl Tier {
    /// Points table entry for a 0-based position index; positions past the
    /// table award nothing.
    #[must_use]
    pub fn points_at(&self, index: usize) -> f64 {
        self.points.get(index).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn payout_at(&self, index: usize) -> f64 {
        self.payouts.get(index).copied().unwrap_or(0.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub season_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 1-4 while playing, 5 once the tournament is over.
    pub current_round: i32,
    pub live_play: bool,
    pub course: Course,
    pub tier: Tier,
    /// Tours whose members are entered in this event.
    pub tour_ids: Vec<i64>,
}

impl Tournament {
    #[must_use]
    pub fn par(&self) -> i32 {
        self.course.par
    }

    /// 1-based rounds with posted scores: everything before `current_round`,
    /// capped at the four real rounds.
    #[must_use]
    pub fn completed_rounds(&self) -> std::ops::Range<usize> {
        let last = self.current_round.clamp(1, 5) as usize;
        1..last.min(5)
    }
}
