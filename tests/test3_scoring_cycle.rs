mod common;

use common::{MemoryStorage, golfer, standard_tier, team, tour_card, tournament};
use links_league::{ScoreError, ScoringEngine, run_scoring_cycle};
use links_league::storage::TournamentSnapshot;
use std::sync::atomic::Ordering;

fn regular_snapshot() -> TournamentSnapshot {
    let mut golfers: Vec<_> = (1..=10)
        .map(|id| golfer(id, [Some(72), None, None, None]))
        .collect();
    golfers.extend((21..=30).map(|id| golfer(id, [Some(73), None, None, None])));
    TournamentSnapshot {
        tournament: tournament("The Memorial", standard_tier(), 2, false),
        golfers,
        teams: vec![
            team(1, 11, (1..=10).collect()),
            team(2, 12, (21..=30).collect()),
        ],
    }
}

#[tokio::test]
async fn cycle_computes_and_writes_every_team() {
    let storage = MemoryStorage::new();
    storage
        .seed(
            regular_snapshot(),
            vec![tour_card(11, 1), tour_card(12, 1)],
            None,
        )
        .await;

    let rows = run_scoring_cycle(&storage).await.unwrap();
    assert_eq!(rows.len(), 2);
    let leader = rows.iter().find(|r| r.team_id == 1).unwrap();
    assert_eq!(leader.score, Some(0.0));
    assert_eq!(leader.position.as_deref(), Some("1"));

    let written = storage.written.read().await;
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].0, 1);
    assert_eq!(written[0].1, rows);
}

#[tokio::test]
async fn missing_tournament_is_a_transient_condition() {
    let storage = MemoryStorage::new();
    let err = run_scoring_cycle(&storage).await.unwrap_err();
    assert!(matches!(err, ScoreError::InsufficientData(_)));
    assert!(err.is_transient());
    assert!(storage.written.read().await.is_empty());
}

#[tokio::test]
async fn missing_tour_cards_skip_the_cycle() {
    let storage = MemoryStorage::new();
    storage.seed(regular_snapshot(), vec![], None).await;
    let err = run_scoring_cycle(&storage).await.unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn playoff_tournament_requires_playoff_inputs() {
    let storage = MemoryStorage::new();
    let mut snapshot = regular_snapshot();
    snapshot.tournament.name = "Tour Championship Playoff".to_string();
    storage
        .seed(snapshot, vec![tour_card(11, 1), tour_card(12, 1)], None)
        .await;
    let err = run_scoring_cycle(&storage).await.unwrap_err();
    assert!(matches!(err, ScoreError::InsufficientData(_)));
}

#[tokio::test]
async fn rejected_write_fails_the_cycle() {
    let storage = MemoryStorage::new();
    storage
        .seed(
            regular_snapshot(),
            vec![tour_card(11, 1), tour_card(12, 1)],
            None,
        )
        .await;
    storage.fail_writes.store(true, Ordering::SeqCst);
    let err = run_scoring_cycle(&storage).await.unwrap_err();
    assert!(matches!(err, ScoreError::Storage(_)));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn repeated_cycles_write_identical_rows() {
    let storage = MemoryStorage::new();
    storage
        .seed(
            regular_snapshot(),
            vec![tour_card(11, 1), tour_card(12, 1)],
            None,
        )
        .await;

    run_scoring_cycle(&storage).await.unwrap();
    run_scoring_cycle(&storage).await.unwrap();

    let written = storage.written.read().await;
    assert_eq!(written.len(), 2);
    assert_eq!(
        serde_json::to_string(&written[0].1).unwrap(),
        serde_json::to_string(&written[1].1).unwrap()
    );
}

#[tokio::test]
async fn engine_serializes_overlapping_runs() {
    let storage = MemoryStorage::new();
    storage
        .seed(
            regular_snapshot(),
            vec![tour_card(11, 1), tour_card(12, 1)],
            None,
        )
        .await;

    let engine = ScoringEngine::new(storage);
    let (first, second) = tokio::join!(engine.run(), engine.run());
    first.unwrap();
    second.unwrap();
    assert_eq!(engine.storage().written.read().await.len(), 2);
}
