//! Daily puzzle module - eligibility, selection, distribution synthesis and
//! the idempotent daily step.

mod distribution;
mod eligibility;
mod puzzles_model;
mod puzzles_service;
mod puzzles_traits;
mod selector;

pub use distribution::{bucket_draws, synthesize_distribution, DistributionParams};
pub use eligibility::EligibilityRules;
pub use puzzles_model::{
    DailyPuzzle, DailyPuzzleOutcome, GuessDistribution, NewDailyPuzzle, PriceBar,
    PuzzleInsertOutcome,
};
pub use puzzles_service::PuzzleService;
pub use puzzles_traits::{PuzzleRepositoryTrait, PuzzleServiceTrait};
pub use selector::select_puzzle_ticker;
