//! Head-to-head matchup: two strategies, repeated rounds, Elo bookkeeping.
//!
//! Each round plays one full game per side on independently seeded dice and
//! compares totals. The aggregate tracks wins, ties, the best total seen per
//! side, running mean scores, and a simplified Elo pair: K = 32, both sides
//! starting at 1200.0, outcome scores (1, 0) / (0, 1) / (0.5, 0.5), and each
//! rating delta rounded to the nearest integer before being added back as a
//! float. Rounds run sequentially since the rating pair is order-dependent
//! state.

use std::cmp::Ordering;

use serde::Serialize;

use crate::game::{Game, GameError};
use crate::simulation::players::StrategyKind;

/// Elo K-factor.
pub const ELO_K: f64 = 32.0;

/// Starting rating for both sides.
pub const ELO_INITIAL_RATING: f64 = 1200.0;

/// Aggregate outcome of a matchup run.
#[derive(Debug, Clone, Serialize)]
pub struct MatchupResult {
    pub strategies: [String; 2],
    pub rounds: u32,
    pub wins: [u32; 2],
    pub ties: u32,
    pub best_scores: [i32; 2],
    pub mean_scores: [f64; 2],
    pub ratings: [f64; 2],
}

/// Logistic expected score for a rating against an opponent's.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / 400.0))
}

/// Apply one round's outcome to the rating pair. `score_a`/`score_b` are
/// the outcome values (1, 0, or 0.5 each); deltas are rounded to the
/// nearest integer before being added.
fn apply_elo(ratings: &mut [f64; 2], score_a: f64, score_b: f64) {
    let expected_a = expected_score(ratings[0], ratings[1]);
    let expected_b = expected_score(ratings[1], ratings[0]);
    ratings[0] += (ELO_K * (score_a - expected_a)).round();
    ratings[1] += (ELO_K * (score_b - expected_b)).round();
}

/// Run `rounds` rounds of `kind_a` vs `kind_b`. Round i seeds side A with
/// `seed + 2i` and side B with `seed + 2i + 1`, so a run is reproducible
/// from its base seed.
pub fn run_matchup(
    kind_a: StrategyKind,
    kind_b: StrategyKind,
    rounds: u32,
    seed: u64,
) -> Result<MatchupResult, GameError> {
    let mut strategy_a = kind_a.build();
    let mut strategy_b = kind_b.build();

    let mut wins = [0u32; 2];
    let mut ties = 0u32;
    let mut best_scores = [0i32; 2];
    let mut score_sums = [0f64; 2];
    let mut ratings = [ELO_INITIAL_RATING; 2];

    for round in 0..rounds as u64 {
        let mut game_a = Game::from_seed(seed.wrapping_add(2 * round));
        let mut game_b = Game::from_seed(seed.wrapping_add(2 * round + 1));
        let score_a = strategy_a.play(&mut game_a)?;
        let score_b = strategy_b.play(&mut game_b)?;

        best_scores[0] = best_scores[0].max(score_a);
        best_scores[1] = best_scores[1].max(score_b);
        score_sums[0] += score_a as f64;
        score_sums[1] += score_b as f64;

        let (outcome_a, outcome_b) = match score_a.cmp(&score_b) {
            Ordering::Greater => {
                wins[0] += 1;
                (1.0, 0.0)
            }
            Ordering::Less => {
                wins[1] += 1;
                (0.0, 1.0)
            }
            Ordering::Equal => {
                ties += 1;
                (0.5, 0.5)
            }
        };
        apply_elo(&mut ratings, outcome_a, outcome_b);
    }

    let mean_scores = if rounds == 0 {
        [0.0, 0.0]
    } else {
        [
            score_sums[0] / rounds as f64,
            score_sums[1] / rounds as f64,
        ]
    };

    Ok(MatchupResult {
        strategies: [kind_a.name().to_string(), kind_b.name().to_string()],
        rounds,
        wins,
        ties,
        best_scores,
        mean_scores,
        ratings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_score() {
        assert!((expected_score(1200.0, 1200.0) - 0.5).abs() < 1e-12);
        // 400 points of advantage is 10:1 odds.
        assert!((expected_score(1600.0, 1200.0) - 10.0 / 11.0).abs() < 1e-12);
        let e = expected_score(1300.0, 1200.0) + expected_score(1200.0, 1300.0);
        assert!((e - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_elo_win_from_even_ratings() {
        let mut ratings = [ELO_INITIAL_RATING; 2];
        apply_elo(&mut ratings, 1.0, 0.0);
        assert_eq!(ratings, [1216.0, 1184.0]);
    }

    #[test]
    fn test_elo_tie_from_even_ratings_is_a_wash() {
        let mut ratings = [ELO_INITIAL_RATING; 2];
        apply_elo(&mut ratings, 0.5, 0.5);
        assert_eq!(ratings, [1200.0, 1200.0]);
    }

    #[test]
    fn test_elo_deltas_are_integers() {
        let mut ratings = [1216.0, 1184.0];
        for _ in 0..20 {
            apply_elo(&mut ratings, 1.0, 0.0);
            assert_eq!(ratings[0].fract(), 0.0);
            assert_eq!(ratings[1].fract(), 0.0);
        }
        // The favorite gains less as the gap widens.
        assert!(ratings[0] - 1216.0 < 20.0 * 16.0);
    }

    #[test]
    fn test_matchup_bookkeeping() {
        let result = run_matchup(StrategyKind::Sequential, StrategyKind::Greedy, 40, 42).unwrap();
        assert_eq!(result.rounds, 40);
        assert_eq!(result.wins[0] + result.wins[1] + result.ties, 40);
        assert_eq!(result.strategies[0], "sequential");
        assert_eq!(result.strategies[1], "greedy");
        assert!(result.best_scores[0] >= 0);
        assert!(result.best_scores[1] >= result.mean_scores[1] as i32);
        // Rounded deltas cancel pairwise, so the pool is conserved.
        let pool = result.ratings[0] + result.ratings[1];
        assert!((pool - 2.0 * ELO_INITIAL_RATING).abs() < 1e-9);
    }

    #[test]
    fn test_matchup_is_deterministic() {
        let a = run_matchup(StrategyKind::Greedy, StrategyKind::Greedy, 25, 7).unwrap();
        let b = run_matchup(StrategyKind::Greedy, StrategyKind::Greedy, 25, 7).unwrap();
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.ties, b.ties);
        assert_eq!(a.best_scores, b.best_scores);
        assert_eq!(a.ratings, b.ratings);
        assert_eq!(a.mean_scores, b.mean_scores);
    }

    #[test]
    fn test_greedy_dominates_sequential() {
        // Greedy picks the per-turn maximum, sequential takes whatever the
        // card order dictates; over enough rounds greedy must be ahead.
        let result = run_matchup(StrategyKind::Sequential, StrategyKind::Greedy, 200, 1).unwrap();
        assert!(result.wins[1] > result.wins[0]);
        assert!(result.ratings[1] > result.ratings[0]);
        assert!(result.mean_scores[1] > result.mean_scores[0]);
    }
}
