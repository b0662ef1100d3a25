pub mod error;
pub mod model;
pub mod score;
pub mod storage;

pub use error::ScoreError;
pub use score::context::{
    ScoringContext, ScoringEngine, compute_team_results, load_scoring_context, run_scoring_cycle,
};
