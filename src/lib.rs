//! # Yahtzee: dice-game engine and strategy simulator
//!
//! Implements classic 13-category Yahtzee: a `Game` walks one player's card
//! from the first roll to the 13th marked category, and the simulation layer
//! plays whole games (or head-to-head series) with pluggable strategies.
//!
//! ## Layout
//!
//! | Layer | Rust module | Description |
//! |-------|-------------|-------------|
//! | Rules | [`constants`], [`game_mechanics`] | Category table and the pure hand-scoring function |
//! | Dice | [`dice_mechanics`] | Five-die hand with per-die rolled/unrolled state |
//! | Play | [`game`] | Roll budget, write-once scorecard, totals and bonus |
//! | Output | [`render`] | Plain-text scorecard |
//! | Simulation | [`simulation`] | Strategies, batch engine, Elo matchups |
//!
//! ## Turn cycle
//!
//! A turn holds 3 rolls. `roll` on a spent budget starts the next turn with a
//! fresh hand (that first roll counts against the new budget); `mark` scores
//! the current hand into a category and hands the budget back. Categories are
//! write-once, and the game ends when all 13 hold a score.

pub mod constants;
pub mod dice_mechanics;
pub mod env_config;
pub mod game;
pub mod game_mechanics;
pub mod render;
pub mod simulation;
