//! Game simulation and statistics.
//!
//! - [`players`]: Strategy trait and the built-in players
//! - [`engine`]: Core simulation (play N games with one strategy)
//! - [`matchup`]: Head-to-head series with Elo bookkeeping

pub mod engine;
pub mod matchup;
pub mod players;

// Re-export commonly used items
pub use engine::{simulate_batch, simulate_game, SimulationResult};
pub use matchup::{expected_score, run_matchup, MatchupResult, ELO_INITIAL_RATING, ELO_K};
pub use players::{Greedy, Sequential, Strategy, StrategyKind};
