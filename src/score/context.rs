use crate::error::ScoreError;
use crate::model::{Golfer, Team, TeamResult, TourCard, Tournament};
use crate::score::builder::build_team_rows;
use crate::score::playoff::{PlayoffContext, is_playoff};
use crate::score::standings::assign_standings;
use crate::storage::Storage;
use tracing::{debug, info};

/// Everything one computation reads: a tournament snapshot, the season's
/// tour cards, and playoff inputs when the tournament is part of the series.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub tournament: Tournament,
    pub golfers: Vec<Golfer>,
    pub teams: Vec<Team>,
    pub tour_cards: Vec<TourCard>,
    pub playoff: Option<PlayoffContext>,
}

/// The pure pipeline: build every team's row, then assign positions and
/// prizes across the field. Identical snapshots produce identical rows.
///
/// # Errors
///
/// `ScoreError::InsufficientData` when the snapshot cannot support a scoring
/// pass (round out of range, no tour cards, tier tables empty, a round
/// claimed complete that no golfer reported).
pub fn compute_team_results(ctx: &ScoringContext) -> Result<Vec<TeamResult>, ScoreError> {
    validate(ctx)?;
    let mut rows = build_team_rows(ctx);
    assign_standings(
        &mut rows,
        &ctx.tournament.tier,
        ctx.playoff.as_ref().map(|p| p.event),
    );
    Ok(rows)
}

fn validate(ctx: &ScoringContext) -> Result<(), ScoreError> {
    let tournament = &ctx.tournament;
    if !(1..=5).contains(&tournament.current_round) {
        return Err(ScoreError::insufficient(format!(
            "tournament {} reports round {}",
            tournament.id, tournament.current_round
        )));
    }
    if ctx.tour_cards.is_empty() {
        return Err(ScoreError::insufficient("no tour cards loaded for the season"));
    }

    match &ctx.playoff {
        None => {
            if tournament.tier.points.is_empty() || tournament.tier.payouts.is_empty() {
                return Err(ScoreError::insufficient(format!(
                    "tier {} has empty point or payout tables",
                    tournament.tier.name
                )));
            }
        }
        Some(playoff) => {
            if playoff.event.has_starting_strokes() && tournament.tier.points.is_empty() {
                return Err(ScoreError::insufficient(
                    "playoff opener without a starting-stroke table",
                ));
            }
            if playoff.event.awards_earnings() && tournament.tier.payouts.is_empty() {
                return Err(ScoreError::insufficient(
                    "playoff finale without a payout table",
                ));
            }
        }
    }

    // A round may only be scored once somebody reported it.
    for round in tournament.completed_rounds() {
        let reported = ctx
            .golfers
            .iter()
            .any(|g| g.rounds.get(round - 1).copied().flatten().is_some());
        if !reported {
            return Err(ScoreError::insufficient(format!(
                "round {round} marked complete but no golfer reported a score"
            )));
        }
    }

    Ok(())
}

/// Assemble a [`ScoringContext`] through the persistence adapter. The tour
/// cards and playoff inputs load concurrently off the snapshot.
///
/// # Errors
///
/// `ScoreError::InsufficientData` when no tournament is in progress or a
/// playoff-tagged tournament arrives without playoff inputs;
/// `ScoreError::Storage` when the adapter fails.
pub async fn load_scoring_context(storage: &dyn Storage) -> Result<ScoringContext, ScoreError> {
    let snapshot = storage
        .current_tournament()
        .await?
        .ok_or_else(|| ScoreError::insufficient("no tournament in progress"))?;

    let (tour_cards, playoff) = futures::future::try_join(
        storage.tour_cards(snapshot.tournament.season_id),
        storage.playoff_context(&snapshot.tournament),
    )
    .await?;

    if playoff.is_none() && is_playoff(&snapshot.tournament) {
        return Err(ScoreError::insufficient(format!(
            "{} is a playoff event but no playoff context loaded",
            snapshot.tournament.name
        )));
    }

    debug!(
        tournament_id = snapshot.tournament.id,
        golfers = snapshot.golfers.len(),
        teams = snapshot.teams.len(),
        playoff = playoff.is_some(),
        "snapshot loaded"
    );

    Ok(ScoringContext {
        tournament: snapshot.tournament,
        golfers: snapshot.golfers,
        teams: snapshot.teams,
        tour_cards,
        playoff,
    })
}

/// One full cycle: load, compute, write back. Recomputation is idempotent,
/// so a retried cycle lands on the same rows.
///
/// # Errors
///
/// Anything from [`load_scoring_context`] or [`compute_team_results`], plus
/// `ScoreError::Storage` when the batch write is rejected (nothing is
/// partially committed by the core; the adapter's transaction decides).
pub async fn run_scoring_cycle(storage: &dyn Storage) -> Result<Vec<TeamResult>, ScoreError> {
    let ctx = load_scoring_context(storage).await?;
    let rows = compute_team_results(&ctx)?;
    storage.store_team_results(ctx.tournament.id, &rows).await?;
    info!(
        tournament_id = ctx.tournament.id,
        round = ctx.tournament.current_round,
        live = ctx.tournament.live_play,
        teams = rows.len(),
        "scoring cycle complete"
    );
    Ok(rows)
}

/// Cycle runner for the polling job. Overlapping invocations serialize on an
/// internal guard so two timers never interleave their batch writes.
pub struct ScoringEngine<S> {
    storage: S,
    run_guard: tokio::sync::Mutex<()>,
}

impl<S: Storage> ScoringEngine<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            run_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// # Errors
    ///
    /// See [`run_scoring_cycle`].
    pub async fn run(&self) -> Result<Vec<TeamResult>, ScoreError> {
        let _guard = self.run_guard.lock().await;
        run_scoring_cycle(&self.storage).await
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
