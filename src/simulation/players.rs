//! Player strategies: fixed decision policies that drive a [`Game`] from
//! first roll to full scorecard.
//!
//! Both reference players spend exactly one roll per turn (never the second
//! or third reroll); they differ only in how they pick the category to mark:
//!
//! - [`Sequential`]: marks categories strictly in card order, top to bottom.
//! - [`Greedy`]: probes every category and marks the highest-scoring open
//!   one, first in card order on ties.

use crate::constants::{Category, ALL_DICE};
use crate::game::{Game, GameError};

/// A decision policy. `play` drives the game to completion and returns the
/// final total score.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn play(&mut self, game: &mut Game) -> Result<i32, GameError>;
}

/// Marks every category in card order, one full roll per turn.
pub struct Sequential;

impl Strategy for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn play(&mut self, game: &mut Game) -> Result<i32, GameError> {
        for &category in &Category::ALL {
            game.roll(&ALL_DICE)?;
            game.mark(category)?;
        }
        game.total_score()
    }
}

/// Rolls all five dice each turn, then marks whichever category scores the
/// most right now.
pub struct Greedy;

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn play(&mut self, game: &mut Game) -> Result<i32, GameError> {
        while !game.is_scorecard_full() {
            game.roll(&ALL_DICE)?;

            // Probe all thirteen slots; an already-scored category counts
            // as -1 so any open category (score >= 0) beats it. First max
            // in card order wins ties.
            let mut best_category = Category::Ones;
            let mut best_score = i32::MIN;
            for &category in &Category::ALL {
                let score = match game.score_for(category) {
                    Ok(s) => s,
                    Err(GameError::AlreadyScored { .. }) => -1,
                    Err(e) => return Err(e),
                };
                if score > best_score {
                    best_score = score;
                    best_category = category;
                }
            }
            game.mark(best_category)?;
        }
        game.total_score()
    }
}

/// Which reference strategy to run. `Copy`, so batch workers can build a
/// fresh boxed player per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Sequential,
    Greedy,
}

impl StrategyKind {
    /// Parse a CLI spec string.
    pub fn from_spec(spec: &str) -> Result<Self, String> {
        match spec {
            "sequential" | "seq" => Ok(StrategyKind::Sequential),
            "greedy" => Ok(StrategyKind::Greedy),
            other => Err(format!(
                "unknown strategy '{}' (expected 'sequential' or 'greedy')",
                other
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Greedy => "greedy",
        }
    }

    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Sequential => Box::new(Sequential),
            StrategyKind::Greedy => Box::new(Greedy),
        }
    }
}
