use crate::model::{Golfer, Team};

/// Resolve a team's drafted roster against the tournament's golfer pool.
/// Ids with no matching entry are dropped; order follows the draft order.
#[must_use]
pub fn resolve_team_golfers<'a>(team: &Team, all_golfers: &'a [Golfer]) -> Vec<&'a Golfer> {
    team.golfer_ids
        .iter()
        .filter_map(|id| all_golfers.iter().find(|g| g.id == *id))
        .collect()
}

/// A team's golfers still in the field (not CUT, WD, or DQ).
#[must_use]
pub fn active_golfers<'a>(team: &Team, all_golfers: &'a [Golfer]) -> Vec<&'a Golfer> {
    resolve_team_golfers(team, all_golfers)
        .into_iter()
        .filter(|g| g.status.is_active())
        .collect()
}

fn round_key(golfer: &Golfer, round: usize, live: bool, par: i32) -> f64 {
    if live {
        golfer.today.unwrap_or(f64::INFINITY)
    } else {
        golfer
            .round_strokes(round, par)
            .map_or(f64::INFINITY, |strokes| f64::from(strokes - par))
    }
}

/// Order golfers best-first for one round: by live delta when play is live,
/// otherwise by raw round strokes relative to par. Golfers without a value
/// sort last. Ties cascade through cumulative score, then golfer id, so any
/// input yields a total order.
#[must_use]
pub fn rank_for_round<'a>(
    golfers: &[&'a Golfer],
    round: usize,
    live: bool,
    par: i32,
) -> Vec<&'a Golfer> {
    let mut ranked = golfers.to_vec();
    ranked.sort_by(|a, b| {
        round_key(a, round, live, par)
            .total_cmp(&round_key(b, round, live, par))
            .then_with(|| {
                a.score
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.score.unwrap_or(f64::INFINITY))
            })
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked
}

/// The `n` best golfers for a round; the contributing subset when fewer than
/// the whole roster counts.
#[must_use]
pub fn top_n_for_round<'a>(
    golfers: &[&'a Golfer],
    round: usize,
    live: bool,
    par: i32,
    n: usize,
) -> Vec<&'a Golfer> {
    let mut ranked = rank_for_round(golfers, round, live, par);
    ranked.truncate(n);
    ranked
}
