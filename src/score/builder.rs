use crate::error::ScoreError;
use crate::model::{
    Bracket, CUT_POSITION, Golfer, Team, TeamResult, TourCard, Tournament,
};
use crate::score::aggregate::{mean, mean_or_even, round1};
use crate::score::context::ScoringContext;
use crate::score::playoff::{PlayoffContext, starting_strokes, worst_of_day};
use crate::score::selection::{active_golfers, resolve_team_golfers, top_n_for_round};
use ahash::RandomState;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::warn;

/// A team drops out of regular-season scoring when fewer than this many of
/// its golfers survive the cut.
pub const REGULAR_CUT_MINIMUM: usize = 5;

/// Regular-season contribution counts: the whole roster through round 2,
/// the best five once the cut falls.
#[must_use]
pub fn regular_golfers_counted(round: i32) -> usize {
    if round <= 2 { 10 } else { 5 }
}

#[derive(Clone, Copy, Default)]
struct RoundCell {
    raw: Option<f64>,
    over_par: Option<f64>,
    needs_fallback: bool,
}

struct TeamDraft {
    row: TeamResult,
    base: f64,
    cells: [RoundCell; 4],
    live_today: Option<f64>,
    live_thru: Option<f64>,
    live_needs_fallback: bool,
    cumulative: Option<f64>,
    no_roster: bool,
    /// Row fully assembled during drafting (CUT, or per-team anomaly).
    finished: bool,
}

/// Compute one result row per team from a consistent snapshot. Positions and
/// prizes are assigned afterwards by the standings pass.
#[must_use]
pub fn build_team_rows(ctx: &ScoringContext) -> Vec<TeamResult> {
    let cards: HashMap<i64, &TourCard, RandomState> =
        ctx.tour_cards.iter().map(|c| (c.id, c)).collect();

    let mut drafts: Vec<TeamDraft> = ctx
        .teams
        .iter()
        .map(|team| draft_team(team, ctx, &cards))
        .collect();

    if ctx.playoff.is_some() {
        resolve_fallbacks(&mut drafts, &ctx.tournament);
    }

    drafts
        .into_iter()
        .map(|draft| assemble(draft, &ctx.tournament, ctx.playoff.is_some()))
        .collect()
}

fn draft_team(
    team: &Team,
    ctx: &ScoringContext,
    cards: &HashMap<i64, &TourCard, RandomState>,
) -> TeamDraft {
    let tournament = &ctx.tournament;
    let par = tournament.par();
    let playoff = ctx.playoff.as_ref();

    let card = cards.get(&team.tour_card_id).copied();
    let bracket = match playoff {
        Some(_) => card.and_then(|c| c.bracket),
        None => None,
    };
    let mut row = TeamResult::new(
        team.id,
        team.tour_card_id,
        card.map_or(0, |c| c.tour_id),
        bracket,
        tournament.current_round,
    );

    let golfers = resolve_team_golfers(team, &ctx.golfers);
    let active = active_golfers(team, &ctx.golfers);

    for round in 1..=4usize {
        if round <= 2 || tournament.current_round >= round as i32 {
            row.set_round_tee_time(round, earliest_tee_time(&golfers, round));
        }
    }

    let mut draft = TeamDraft {
        row,
        base: 0.0,
        cells: [RoundCell::default(); 4],
        live_today: None,
        live_thru: None,
        live_needs_fallback: false,
        cumulative: None,
        no_roster: golfers.is_empty(),
        finished: false,
    };

    let Some(card) = card else {
        // Malformed record: no tour card to compare within. The row keeps a
        // null score so the team drops out of ranking without aborting the
        // run.
        let err = ScoreError::Team {
            team_id: team.id,
            message: format!("tour card {} not on file", team.tour_card_id),
        };
        warn!(%err, "excluded from ranking");
        draft.finished = true;
        return draft;
    };

    if let Some(playoff) = playoff {
        draft.base = if playoff.event.has_starting_strokes() {
            starting_strokes(card, &ctx.tour_cards, &tournament.tier)
        } else {
            playoff.carry_in_for(card.id)
        };
    }

    if draft.no_roster {
        if playoff.is_some() {
            // Bracket participant with an empty roster scores even par per
            // completed round on top of its base.
            for n in tournament.completed_rounds() {
                draft.cells[n - 1] = RoundCell {
                    raw: Some(f64::from(par)),
                    over_par: Some(0.0),
                    needs_fallback: false,
                };
            }
            if tournament.live_play && tournament.current_round <= 4 {
                draft.live_today = Some(0.0);
                draft.live_thru = Some(0.0);
            }
        } else {
            let err = ScoreError::Team {
                team_id: team.id,
                message: "roster resolves no golfers".to_string(),
            };
            warn!(%err, "excluded from ranking");
            draft.finished = true;
        }
        return draft;
    }

    if playoff.is_none()
        && tournament.current_round >= 3
        && active.len() < REGULAR_CUT_MINIMUM
    {
        // Missed the team cut: rounds 1-2 stay on the books, everything else
        // nulls out, and the standings pass leaves the row out of ranking.
        for n in [1usize, 2] {
            let cell = completed_cell(&golfers, &active, n, par, regular_golfers_counted(n as i32));
            draft.row.set_round_raw(n, cell.raw);
        }
        draft.row.position = Some(CUT_POSITION.to_string());
        draft.finished = true;
        return draft;
    }

    for n in tournament.completed_rounds() {
        let counted = golfers_counted(playoff, n as i32);
        if playoff.is_some() && active.len() < counted {
            draft.cells[n - 1].needs_fallback = true;
            continue;
        }
        draft.cells[n - 1] = completed_cell(&golfers, &active, n, par, counted);
    }

    if tournament.live_play && tournament.current_round <= 4 {
        let round = tournament.current_round as usize;
        let counted = golfers_counted(playoff, tournament.current_round);
        if playoff.is_some() && active.len() < counted {
            draft.live_needs_fallback = true;
        }
        let pool = round_pool(&golfers, &active, round, true, par, counted);
        let todays: Vec<Option<f64>> = pool.iter().map(|g| g.today).collect();
        let thrus: Vec<Option<f64>> = pool.iter().map(|g| g.thru).collect();
        draft.live_today = mean_or_even(&todays).map(round1);
        draft.live_thru = mean_or_even(&thrus).map(round1);

        if playoff.is_none() && tournament.current_round == 1 {
            let totals: Vec<Option<f64>> = golfers.iter().map(|g| g.score).collect();
            draft.cumulative = mean_or_even(&totals).map(round1);
        }
    }

    draft
}

fn golfers_counted(playoff: Option<&PlayoffContext>, round: i32) -> usize {
    match playoff {
        Some(p) => p.event.golfers_counted(round),
        None => regular_golfers_counted(round),
    }
}

/// The golfers whose scores count for one round: the whole roster when the
/// selection count covers it, otherwise the best `counted` of the active set.
fn round_pool<'a>(
    golfers: &[&'a Golfer],
    active: &[&'a Golfer],
    round: usize,
    live: bool,
    par: i32,
    counted: usize,
) -> Vec<&'a Golfer> {
    if counted >= 10 {
        golfers.to_vec()
    } else {
        top_n_for_round(active, round, live, par, counted)
    }
}

fn completed_cell(
    golfers: &[&Golfer],
    active: &[&Golfer],
    round: usize,
    par: i32,
    counted: usize,
) -> RoundCell {
    let pool = round_pool(golfers, active, round, false, par, counted);
    let strokes: Vec<f64> = pool
        .iter()
        .filter_map(|g| g.round_strokes(round, par))
        .map(f64::from)
        .collect();
    let raw = mean(&strokes).map(round1);
    RoundCell {
        raw,
        over_par: raw.map(|r| round1(r - f64::from(par))),
        needs_fallback: false,
    }
}

fn earliest_tee_time(golfers: &[&Golfer], round: usize) -> Option<NaiveDateTime> {
    golfers.iter().filter_map(|g| g.tee_time(round)).min()
}

/// Second pass for playoffs: teams that could not field enough active
/// golfers take the worst contribution posted by an eligible team in their
/// bracket, or even par when the whole bracket came up short.
fn resolve_fallbacks(drafts: &mut [TeamDraft], tournament: &Tournament) {
    let par = f64::from(tournament.par());

    let mut round_pools: HashMap<(Bracket, usize), Vec<f64>, RandomState> = HashMap::default();
    let mut live_pools: HashMap<Bracket, Vec<f64>, RandomState> = HashMap::default();
    for draft in drafts.iter() {
        if draft.no_roster || draft.finished {
            continue;
        }
        let Some(bracket) = draft.row.bracket else {
            continue;
        };
        for (idx, cell) in draft.cells.iter().enumerate() {
            if cell.needs_fallback {
                continue;
            }
            if let Some(over_par) = cell.over_par {
                round_pools.entry((bracket, idx)).or_default().push(over_par);
            }
        }
        if !draft.live_needs_fallback {
            if let Some(today) = draft.live_today {
                live_pools.entry(bracket).or_default().push(today);
            }
        }
    }

    for draft in drafts.iter_mut() {
        let bracket = draft.row.bracket;
        for (idx, cell) in draft.cells.iter_mut().enumerate() {
            if !cell.needs_fallback {
                continue;
            }
            let value = bracket
                .and_then(|b| round_pools.get(&(b, idx)))
                .map_or(0.0, |peers| worst_of_day(peers.iter().copied()));
            cell.raw = Some(round1(par + value));
            cell.over_par = Some(round1(value));
            cell.needs_fallback = false;
        }
        if draft.live_needs_fallback {
            let value = bracket
                .and_then(|b| live_pools.get(&b))
                .map_or(0.0, |peers| worst_of_day(peers.iter().copied()));
            draft.live_today = Some(round1(value));
            if draft.live_thru.is_none() {
                draft.live_thru = Some(0.0);
            }
            draft.live_needs_fallback = false;
        }
    }
}

fn over_par_through(cells: &[RoundCell], count: usize) -> f64 {
    cells[..count.min(cells.len())]
        .iter()
        .map(|c| c.over_par.unwrap_or(0.0))
        .sum()
}

fn assemble(mut draft: TeamDraft, tournament: &Tournament, playoff: bool) -> TeamResult {
    if draft.finished {
        return draft.row;
    }

    for n in tournament.completed_rounds() {
        draft.row.set_round_raw(n, draft.cells[n - 1].raw);
    }

    let current = tournament.current_round;
    match current {
        1 if tournament.live_play => {
            draft.row.today = draft.live_today;
            draft.row.thru = draft.live_thru;
            draft.row.score = if playoff {
                Some(round1(draft.base + draft.live_today.unwrap_or(0.0)))
            } else {
                draft.cumulative
            };
        }
        1 => {} // not yet underway
        2..=4 if tournament.live_play => {
            let prior = over_par_through(&draft.cells, (current - 1) as usize);
            draft.row.today = draft.live_today;
            draft.row.thru = draft.live_thru;
            draft.row.score =
                Some(round1(draft.base + prior + draft.live_today.unwrap_or(0.0)));
        }
        2..=4 => {
            draft.row.today = draft.cells[(current - 2) as usize].over_par;
            draft.row.thru = Some(18.0);
            draft.row.score =
                Some(round1(draft.base + over_par_through(&draft.cells, (current - 1) as usize)));
        }
        _ => {
            // Final: all four rounds on the books.
            draft.row.today = draft.cells[3].over_par;
            draft.row.thru = Some(18.0);
            draft.row.score = Some(round1(draft.base + over_par_through(&draft.cells, 4)));
        }
    }

    draft.row
}
