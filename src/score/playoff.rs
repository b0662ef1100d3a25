use crate::model::{Tier, TourCard, Tournament};
use crate::score::aggregate::round1;
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which of the season's three playoff tournaments is being scored.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoffEvent {
    One,
    Two,
    Three,
}

impl PlayoffEvent {
    /// How many of a team's golfers count toward the team total for a round.
    #[must_use]
    pub fn golfers_counted(self, round: i32) -> usize {
        match (self, round) {
            (Self::One, 1 | 2) => 10,
            (Self::One, _) | (Self::Two, _) => 5,
            (Self::Three, _) => 3,
        }
    }

    /// Only the final event pays out; the first two carry scores forward.
    #[must_use]
    pub fn awards_earnings(self) -> bool {
        matches!(self, Self::Three)
    }

    #[must_use]
    pub fn has_starting_strokes(self) -> bool {
        matches!(self, Self::One)
    }
}

/// Playoff inputs the persistence adapter derives from season chronology:
/// which event this is, and each tour card's final score from the prior
/// event.
#[derive(Clone, Debug)]
pub struct PlayoffContext {
    pub event: PlayoffEvent,
    pub carry_in: HashMap<i64, f64, RandomState>,
}

impl PlayoffContext {
    #[must_use]
    pub fn new(event: PlayoffEvent) -> Self {
        Self {
            event,
            carry_in: HashMap::default(),
        }
    }

    /// Score carried into this event for a tour card; teams without a prior
    /// result start from scratch.
    #[must_use]
    pub fn carry_in_for(&self, tour_card_id: i64) -> f64 {
        self.carry_in.get(&tour_card_id).copied().unwrap_or(0.0)
    }
}

/// A tournament is part of the playoff series when its name or tier name
/// says so.
#[must_use]
pub fn is_playoff(tournament: &Tournament) -> bool {
    tournament.name.to_lowercase().contains("playoff")
        || tournament.tier.name.to_lowercase().contains("playoff")
}

/// Which playoff event a tournament is, by chronological order of the
/// season's playoff-tagged tournaments. `None` when the tournament is not a
/// playoff or the season somehow carries more than three.
#[must_use]
pub fn playoff_event_for(
    tournament: &Tournament,
    season_tournaments: &[Tournament],
) -> Option<PlayoffEvent> {
    let mut playoffs: Vec<&Tournament> = season_tournaments
        .iter()
        .filter(|t| is_playoff(t))
        .collect();
    playoffs.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
    match playoffs.iter().position(|t| t.id == tournament.id)? {
        0 => Some(PlayoffEvent::One),
        1 => Some(PlayoffEvent::Two),
        2 => Some(PlayoffEvent::Three),
        _ => None,
    }
}

/// Event-one handicap for one tour card: rank the card's bracket by
/// descending season points and read the tier's stroke table at the count of
/// strictly better cards. Ties average the stroke entries across the tied
/// rank range, to 1 decimal. Ranks past the table clamp to its last entry.
#[must_use]
pub fn starting_strokes(card: &TourCard, field: &[TourCard], tier: &Tier) -> f64 {
    let Some(bracket) = card.bracket else {
        return 0.0;
    };
    let table_len = bracket.stroke_table_len().min(tier.points.len());
    let table = &tier.points[..table_len];
    if table.is_empty() {
        return 0.0;
    }

    let peers = field.iter().filter(|c| c.bracket == Some(bracket));
    let mut better = 0usize;
    let mut tied = 0usize;
    for peer in peers {
        if peer.season_points > card.season_points {
            better += 1;
        } else if peer.season_points == card.season_points {
            tied += 1;
        }
    }
    let tied = tied.max(1); // the card itself when absent from the field

    let sum: f64 = (better..better + tied)
        .map(|rank| table[rank.min(table.len() - 1)])
        .sum();
    round1(sum / tied as f64)
}

/// Fallback contribution for an ineligible team: the worst (highest) value
/// among its eligible bracket peers, or even par when no peer is eligible.
#[must_use]
pub fn worst_of_day(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .fold(None, |worst: Option<f64>, v| {
            Some(worst.map_or(v, |w| w.max(v)))
        })
        .unwrap_or(0.0)
}
