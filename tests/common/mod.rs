#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use links_league::model::{
    Bracket, Course, Golfer, GolferStatus, Team, TeamResult, Tier, TourCard, Tournament,
};
use links_league::score::playoff::PlayoffContext;
use links_league::storage::{Storage, StorageError, TournamentSnapshot};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

pub fn standard_tier() -> Tier {
    Tier {
        name: "Standard".to_string(),
        points: (0..20).map(|i| 500.0 - 25.0 * i as f64).collect(),
        payouts: (0..20).map(|i| 10_000.0 - 450.0 * i as f64).collect(),
    }
}

pub fn tournament(name: &str, tier: Tier, current_round: i32, live_play: bool) -> Tournament {
    Tournament {
        id: 1,
        name: name.to_string(),
        season_id: 2025,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
        current_round,
        live_play,
        course: Course {
            name: "Pebble Creek".to_string(),
            par: 72,
        },
        tier,
        tour_ids: vec![1, 2],
    }
}

pub fn golfer(id: i64, rounds: [Option<i32>; 4]) -> Golfer {
    Golfer {
        id,
        player_name: format!("Golfer {id}"),
        status: GolferStatus::Active,
        rounds,
        tee_times: [None; 4],
        today: None,
        thru: None,
        position: None,
        score: None,
    }
}

pub fn golfer_with_status(id: i64, rounds: [Option<i32>; 4], status: GolferStatus) -> Golfer {
    Golfer {
        status,
        ..golfer(id, rounds)
    }
}

pub fn live_golfer(id: i64, today: f64, thru: f64, score: f64) -> Golfer {
    Golfer {
        today: Some(today),
        thru: Some(thru),
        score: Some(score),
        ..golfer(id, [None; 4])
    }
}

pub fn team(id: i64, tour_card_id: i64, golfer_ids: Vec<i64>) -> Team {
    Team {
        id,
        tour_card_id,
        golfer_ids,
    }
}

pub fn tour_card(id: i64, tour_id: i64) -> TourCard {
    TourCard {
        id,
        display_name: format!("Card {id}"),
        tour_id,
        season_points: 0.0,
        season_earnings: 0.0,
        bracket: None,
    }
}

pub fn bracket_card(id: i64, bracket: Bracket, season_points: f64) -> TourCard {
    TourCard {
        bracket: Some(bracket),
        season_points,
        ..tour_card(id, 1)
    }
}

/// Ten-golfer roster with the same strokes posted every completed round.
pub fn even_roster(first_golfer_id: i64, completed: usize, strokes: i32) -> Vec<Golfer> {
    let mut rounds = [None; 4];
    for slot in rounds.iter_mut().take(completed) {
        *slot = Some(strokes);
    }
    (first_golfer_id..first_golfer_id + 10)
        .map(|id| golfer(id, rounds))
        .collect()
}

/// In-memory adapter for cycle tests: hands back canned snapshots and
/// records every batch write.
pub struct MemoryStorage {
    pub snapshot: RwLock<Option<TournamentSnapshot>>,
    pub cards: RwLock<Vec<TourCard>>,
    pub playoff: RwLock<Option<PlayoffContext>>,
    pub written: RwLock<Vec<(i64, Vec<TeamResult>)>>,
    pub fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
            cards: RwLock::new(Vec::new()),
            playoff: RwLock::new(None),
            written: RwLock::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub async fn seed(
        &self,
        snapshot: TournamentSnapshot,
        cards: Vec<TourCard>,
        playoff: Option<PlayoffContext>,
    ) {
        *self.snapshot.write().await = Some(snapshot);
        *self.cards.write().await = cards;
        *self.playoff.write().await = playoff;
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn current_tournament(&self) -> Result<Option<TournamentSnapshot>, StorageError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn tour_cards(&self, _season_id: i64) -> Result<Vec<TourCard>, StorageError> {
        Ok(self.cards.read().await.clone())
    }

    async fn playoff_context(
        &self,
        _tournament: &Tournament,
    ) -> Result<Option<PlayoffContext>, StorageError> {
        Ok(self.playoff.read().await.clone())
    }

    async fn store_team_results(
        &self,
        tournament_id: i64,
        results: &[TeamResult],
    ) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::new("write rejected"));
        }
        self.written
            .write()
            .await
            .push((tournament_id, results.to_vec()));
        Ok(())
    }
}
