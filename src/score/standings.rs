use crate::model::{Bracket, CUT_POSITION, TeamResult, Tier};
use crate::score::aggregate::{round1, round2};
use crate::score::playoff::PlayoffEvent;
use ahash::RandomState;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum GroupKey {
    Tour(i64),
    Bracket(Bracket),
}

/// Assign tie-aware positions, past positions, and points/earnings across
/// the full result set. Regular-season teams compare within their tour;
/// playoff teams within their bracket. CUT rows and rows without a score
/// never enter a comparison.
pub fn assign_standings(results: &mut [TeamResult], tier: &Tier, playoff: Option<PlayoffEvent>) {
    for row in results.iter_mut() {
        if row.is_cut() {
            row.past_position = Some(CUT_POSITION.to_string());
            row.points = Some(0.0);
            row.earnings = Some(0.0);
        }
    }

    let mut groups: HashMap<GroupKey, Vec<usize>, RandomState> = HashMap::default();
    for (idx, row) in results.iter().enumerate() {
        if row.is_cut() || row.score.is_none() {
            continue;
        }
        let key = match playoff {
            Some(_) => match row.bracket {
                Some(bracket) => GroupKey::Bracket(bracket),
                None => continue, // no bracket, nothing to compare within
            },
            None => GroupKey::Tour(row.tour_id),
        };
        groups.entry(key).or_default().push(idx);
    }

    // Groups are disjoint, so per-row output is independent of the map's
    // iteration order and recomputation stays deterministic.
    for (key, members) in groups {
        rank_group(results, &members, tier, playoff, key);
    }
}

/// Rank = 1 + the number of strictly better scores; teams sharing a score
/// share a `T<rank>` label and split the corresponding table slice evenly.
fn rank_and_ties(scores: &[f64], value: f64) -> (usize, usize) {
    let better = scores.iter().filter(|s| **s < value).count();
    let tied = scores.iter().filter(|s| **s == value).count();
    (better + 1, tied.max(1))
}

fn position_label(rank: usize, tied: usize) -> String {
    if tied > 1 {
        format!("T{rank}")
    } else {
        rank.to_string()
    }
}

fn table_average(entry_at: impl Fn(usize) -> f64, start: usize, len: usize) -> f64 {
    let sum: f64 = (start..start + len).map(entry_at).sum();
    sum / len as f64
}

fn rank_group(
    results: &mut [TeamResult],
    members: &[usize],
    tier: &Tier,
    playoff: Option<PlayoffEvent>,
    key: GroupKey,
) {
    let scores: Vec<f64> = members
        .iter()
        .map(|&i| results[i].score.unwrap_or(0.0))
        .collect();
    let past_scores: Vec<f64> = members
        .iter()
        .map(|&i| round1(results[i].past_score().unwrap_or(0.0)))
        .collect();

    for (pos, &idx) in members.iter().enumerate() {
        let (rank, tied) = rank_and_ties(&scores, scores[pos]);
        results[idx].position = Some(position_label(rank, tied));

        let (past_rank, past_tied) = rank_and_ties(&past_scores, past_scores[pos]);
        results[idx].past_position = Some(position_label(past_rank, past_tied));

        let (points, earnings) = match (playoff, key) {
            (None, _) => (
                table_average(|i| tier.points_at(i), rank - 1, tied).round(),
                round2(table_average(|i| tier.payout_at(i), rank - 1, tied)),
            ),
            (Some(event), GroupKey::Bracket(bracket)) if event.awards_earnings() => (
                0.0,
                round2(table_average(
                    |i| tier.payout_at(i),
                    bracket.payout_offset() + rank - 1,
                    tied,
                )),
            ),
            // Events one and two only carry scores forward.
            (Some(_), _) => (0.0, 0.0),
        };
        results[idx].points = Some(points);
        results[idx].earnings = Some(earnings);
    }
}
