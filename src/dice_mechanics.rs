//! Dice primitives: a single die with an unrolled sentinel, and the
//! five-die hand addressed by position when rerolling a subset.
//!
//! A die starts Unrolled and can only move to a face in 1..=6; it never
//! returns to the sentinel. Position order in a [`Hand`] matters only for
//! reroll addressing; scoring treats the hand as a multiset of faces.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::constants::DICE_PER_HAND;
use crate::game::GameError;

/// A single six-sided die.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Die {
    value: Option<i32>,
}

impl Die {
    /// A die that has not been rolled yet.
    pub fn new() -> Self {
        Die { value: None }
    }

    /// Roll the die: uniform face in 1..=6.
    pub fn roll(&mut self, rng: &mut SmallRng) {
        self.value = Some(rng.random_range(1..=6));
    }

    pub fn is_rolled(&self) -> bool {
        self.value.is_some()
    }

    /// The face showing, or `None` while unrolled.
    pub fn face(&self) -> Option<i32> {
        self.value
    }
}

/// Five dice in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    dice: [Die; DICE_PER_HAND],
}

impl Hand {
    /// Five fresh unrolled dice.
    pub fn fresh() -> Self {
        Hand {
            dice: [Die::new(); DICE_PER_HAND],
        }
    }

    /// Reroll the dice at the given positions. Duplicate indices are
    /// collapsed, so each listed die is rolled exactly once. Fails with
    /// `InvalidIndex` before any die is touched if an index is outside
    /// [0, 5).
    pub fn roll_subset(&mut self, indices: &[usize], rng: &mut SmallRng) -> Result<(), GameError> {
        if let Some(&index) = indices.iter().find(|&&i| i >= DICE_PER_HAND) {
            return Err(GameError::InvalidIndex { index });
        }
        let mut seen = [false; DICE_PER_HAND];
        for &i in indices {
            if !seen[i] {
                seen[i] = true;
                self.dice[i].roll(rng);
            }
        }
        Ok(())
    }

    /// The five face values in position order, or `None` if any die is
    /// still unrolled.
    pub fn values(&self) -> Option<[i32; DICE_PER_HAND]> {
        let mut out = [0i32; DICE_PER_HAND];
        for (slot, die) in out.iter_mut().zip(&self.dice) {
            *slot = die.face()?;
        }
        Some(out)
    }

    pub fn all_rolled(&self) -> bool {
        self.dice.iter().all(Die::is_rolled)
    }
}

/// Count occurrences of each face (1-6) in a five-die hand.
/// `face_count[0]` is unused; `face_count[f]` = count of face f.
pub fn count_faces(values: &[i32; DICE_PER_HAND]) -> [i32; 7] {
    let mut face_count = [0i32; 7];
    for &v in values {
        face_count[v as usize] += 1;
    }
    face_count
}
