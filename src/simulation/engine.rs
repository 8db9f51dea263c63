//! Batch simulation engine: plays N independent games of one strategy.
//!
//! Games share nothing, so they fan out across the rayon pool; game i seeds
//! its RNG from `seed + i`, keeping any batch reproducible from its base
//! seed. The result carries the full sorted score vector plus summary
//! statistics.

use std::time::Instant;

use rayon::prelude::*;

use crate::game::{Game, GameError};
use crate::simulation::players::StrategyKind;

/// Results of a batch simulation.
pub struct SimulationResult {
    pub scores: Vec<i32>,
    pub mean: f64,
    pub std_dev: f64,
    pub min: i32,
    pub max: i32,
    pub median: i32,
    pub elapsed: std::time::Duration,
}

/// Play one seeded game to completion and return its final total.
pub fn simulate_game(kind: StrategyKind, seed: u64) -> Result<i32, GameError> {
    let mut game = Game::from_seed(seed);
    kind.build().play(&mut game)
}

/// Simulate N games in parallel, returning aggregate statistics.
///
/// Expects `num_games >= 1`; callers validate before dispatching.
pub fn simulate_batch(
    kind: StrategyKind,
    num_games: usize,
    seed: u64,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();

    let mut scores: Vec<i32> = (0..num_games)
        .into_par_iter()
        .map(|i| simulate_game(kind, seed.wrapping_add(i as u64)))
        .collect::<Result<_, _>>()?;

    let elapsed = start.elapsed();

    let sum: f64 = scores.iter().map(|&s| s as f64).sum();
    let mean = sum / num_games as f64;
    let variance: f64 = scores
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / num_games as f64;
    let std_dev = variance.sqrt();
    let min = *scores.iter().min().unwrap_or(&0);
    let max = *scores.iter().max().unwrap_or(&0);

    scores.sort_unstable();
    let median = scores[num_games / 2];

    Ok(SimulationResult {
        scores,
        mean,
        std_dev,
        min,
        max,
        median,
        elapsed,
    })
}
