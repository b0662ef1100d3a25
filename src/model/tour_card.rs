use serde::{Deserialize, Serialize};

/// Playoff division a qualifying tour card competes within.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    Gold,
    Silver,
}

impl Bracket {
    /// Decode the stored playoff flag: 1 = gold, 2 = silver, anything else
    /// means the card did not qualify.
    #[must_use]
    pub fn from_flag(flag: i32) -> Option<Self> {
        match flag {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            _ => None,
        }
    }

    /// Slots reserved in the tier's points table for this bracket's
    /// starting-stroke seeding.
    #[must_use]
    pub fn stroke_table_len(self) -> usize {
        match self {
            Self::Gold => 30,
            Self::Silver => 40,
        }
    }

    /// Where this bracket's slice of the shared playoff payout table begins.
    #[must_use]
    pub fn payout_offset(self) -> usize {
        match self {
            Self::Gold => 0,
            Self::Silver => 75,
        }
    }
}

/// A member's seasonal membership to one tour.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TourCard {
    pub id: i64,
    pub display_name: String,
    pub tour_id: i64,
    /// Season-cumulative points; seeds playoff starting strokes.
    pub season_points: f64,
    pub season_earnings: f64,
    pub bracket: Option<Bracket>,
}
