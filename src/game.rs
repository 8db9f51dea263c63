//! The turn-state machine: one game's hand, scorecard, and roll budget.
//!
//! A [`Game`] owns a [`Hand`], a write-once [`Scorecard`], a `rolls_left`
//! counter in 0..=3, and the RNG feeding its dice. The turn cycle:
//!
//! 1. `roll` with `rolls_left == 0` replaces the hand with five fresh
//!    unrolled dice and resets the budget to 3, then rerolls the requested
//!    positions (consuming one of the fresh 3).
//! 2. Further `roll` calls reroll a subset and decrement the budget.
//! 3. `mark` writes the category's score and resets `rolls_left` to 3. The
//!    hand itself is kept; a new one appears lazily on the next roll once
//!    the budget runs out again, so re-probing `score_for` right after a
//!    mark sees the same faces.
//!
//! The game is complete when the scorecard is full; only then does
//! `total_score` answer.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::constants::*;
use crate::dice_mechanics::Hand;
use crate::game_mechanics::category_score;

/// Contract violations raised by [`Game`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("die index {index} out of range for a five-die hand")]
    InvalidIndex { index: usize },
    #[error("{category} already holds a score")]
    AlreadyScored { category: Category },
    #[error("cannot score while the hand has unrolled dice")]
    NotYetRolled,
    #[error("scorecard is incomplete ({marked} of 13 categories marked)")]
    IncompleteScorecard { marked: usize },
}

/// Write-once mapping from category to score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    slots: [Option<i32>; CATEGORY_COUNT],
}

impl Scorecard {
    pub fn get(&self, category: Category) -> Option<i32> {
        self.slots[category.index()]
    }

    /// First write wins; a second write to the same slot fails.
    fn set(&mut self, category: Category, score: i32) -> Result<(), GameError> {
        let slot = &mut self.slots[category.index()];
        if slot.is_some() {
            return Err(GameError::AlreadyScored { category });
        }
        *slot = Some(score);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn marked_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// One game of Yahtzee: hand, scorecard, roll budget.
#[derive(Debug)]
pub struct Game {
    hand: Hand,
    scorecard: Scorecard,
    rolls_left: i32,
    rng: SmallRng,
}

impl Game {
    /// A game with OS-entropy dice.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// A deterministic game: same seed, same dice.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Game {
            hand: Hand::fresh(),
            scorecard: Scorecard::default(),
            rolls_left: ROLLS_PER_TURN,
            rng,
        }
    }

    pub fn rolls_left(&self) -> i32 {
        self.rolls_left
    }

    /// Current hand faces, or `None` while any die is unrolled.
    pub fn hand_values(&self) -> Option<[i32; DICE_PER_HAND]> {
        self.hand.values()
    }

    /// The score marked for a category, if any.
    pub fn score(&self, category: Category) -> Option<i32> {
        self.scorecard.get(category)
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    /// Reroll the dice at `indices` (duplicates collapsed).
    ///
    /// With `rolls_left == 0` this starts a new turn first: the hand is
    /// replaced by five fresh unrolled dice and the budget resets to 3, of
    /// which this call consumes one. Positions not listed stay unrolled
    /// until a later roll lists them. Fails with `InvalidIndex` on an
    /// out-of-range index, leaving hand and budget untouched.
    pub fn roll(&mut self, indices: &[usize]) -> Result<(), GameError> {
        if self.rolls_left == 0 {
            let mut next = Hand::fresh();
            next.roll_subset(indices, &mut self.rng)?;
            self.hand = next;
            self.rolls_left = ROLLS_PER_TURN - 1;
        } else {
            self.hand.roll_subset(indices, &mut self.rng)?;
            self.rolls_left -= 1;
        }
        Ok(())
    }

    /// What marking `category` would score right now. Pure with respect to
    /// the scorecard: probing never writes, and repeated calls on an
    /// unchanged hand return the same value.
    pub fn score_for(&self, category: Category) -> Result<i32, GameError> {
        if self.scorecard.get(category).is_some() {
            return Err(GameError::AlreadyScored { category });
        }
        let values = self.hand.values().ok_or(GameError::NotYetRolled)?;
        Ok(category_score(&values, category))
    }

    /// Write the category's current score into the scorecard and reset the
    /// roll budget to 3. Returns the score written. The hand persists
    /// unchanged until the next turn's first roll.
    pub fn mark(&mut self, category: Category) -> Result<i32, GameError> {
        let score = self.score_for(category)?;
        self.scorecard.set(category, score)?;
        self.rolls_left = ROLLS_PER_TURN;
        Ok(score)
    }

    pub fn is_scorecard_full(&self) -> bool {
        self.scorecard.is_full()
    }

    /// Sum of the six digit categories, unmarked entries counting 0.
    pub fn upper_subtotal(&self) -> i32 {
        Category::UPPER
            .iter()
            .filter_map(|&c| self.scorecard.get(c))
            .sum()
    }

    /// Sum of the seven combination categories, unmarked entries counting 0.
    pub fn lower_subtotal(&self) -> i32 {
        Category::LOWER
            .iter()
            .filter_map(|&c| self.scorecard.get(c))
            .sum()
    }

    /// 35 points once the upper subtotal reaches 63.
    pub fn bonus(&self) -> i32 {
        if self.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    /// Final score: all thirteen categories plus the upper bonus. Only
    /// answers once the scorecard is full.
    pub fn total_score(&self) -> Result<i32, GameError> {
        if !self.scorecard.is_full() {
            return Err(GameError::IncompleteScorecard {
                marked: self.scorecard.marked_count(),
            });
        }
        Ok(self.upper_subtotal() + self.lower_subtotal() + self.bonus())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_rejects_scoring() {
        let game = Game::from_seed(1);
        assert_eq!(game.rolls_left(), ROLLS_PER_TURN);
        assert_eq!(game.score_for(Category::Chance), Err(GameError::NotYetRolled));

        let mut game = Game::from_seed(1);
        assert_eq!(game.mark(Category::Chance), Err(GameError::NotYetRolled));
        assert_eq!(game.score(Category::Chance), None);
    }

    #[test]
    fn test_roll_decrements_budget() {
        let mut game = Game::from_seed(2);
        game.roll(&ALL_DICE).unwrap();
        assert_eq!(game.rolls_left(), 2);
        game.roll(&[0]).unwrap();
        assert_eq!(game.rolls_left(), 1);
        game.roll(&[]).unwrap();
        assert_eq!(game.rolls_left(), 0);
    }

    #[test]
    fn test_roll_at_zero_resets_and_consumes_one() {
        let mut game = Game::from_seed(3);
        game.roll(&ALL_DICE).unwrap();
        game.roll(&ALL_DICE).unwrap();
        game.roll(&ALL_DICE).unwrap();
        assert_eq!(game.rolls_left(), 0);

        game.roll(&ALL_DICE).unwrap();
        assert_eq!(game.rolls_left(), 2);
        assert!(game.hand_values().is_some());
    }

    #[test]
    fn test_new_turn_discards_old_faces() {
        let mut game = Game::from_seed(4);
        game.roll(&ALL_DICE).unwrap();
        game.roll(&[]).unwrap();
        game.roll(&[]).unwrap();
        assert_eq!(game.rolls_left(), 0);

        // Rolling only two positions on the new turn leaves the other
        // three unrolled: every old face is gone, not carried over.
        game.roll(&[0, 1]).unwrap();
        assert_eq!(game.rolls_left(), 2);
        assert_eq!(game.hand_values(), None);
        assert_eq!(game.score_for(Category::Chance), Err(GameError::NotYetRolled));
    }

    #[test]
    fn test_invalid_index_leaves_state_untouched() {
        let mut game = Game::from_seed(5);
        game.roll(&ALL_DICE).unwrap();
        let before = game.hand_values();

        let err = game.roll(&[1, 9]).unwrap_err();
        assert_eq!(err, GameError::InvalidIndex { index: 9 });
        assert_eq!(game.rolls_left(), 2);
        assert_eq!(game.hand_values(), before);

        // Same guarantee on the new-turn path.
        game.roll(&[]).unwrap();
        game.roll(&[]).unwrap();
        assert_eq!(game.rolls_left(), 0);
        let before = game.hand_values();
        let err = game.roll(&[5]).unwrap_err();
        assert_eq!(err, GameError::InvalidIndex { index: 5 });
        assert_eq!(game.rolls_left(), 0);
        assert_eq!(game.hand_values(), before);
    }

    #[test]
    fn test_mark_writes_once() {
        let mut game = Game::from_seed(6);
        game.roll(&ALL_DICE).unwrap();
        let first = game.mark(Category::Chance).unwrap();
        assert_eq!(game.score(Category::Chance), Some(first));

        game.roll(&ALL_DICE).unwrap();
        let err = game.mark(Category::Chance).unwrap_err();
        assert_eq!(
            err,
            GameError::AlreadyScored {
                category: Category::Chance
            }
        );
        assert_eq!(game.score(Category::Chance), Some(first));
    }

    #[test]
    fn test_mark_resets_budget_and_keeps_hand() {
        let mut game = Game::from_seed(7);
        game.roll(&ALL_DICE).unwrap();
        game.roll(&[0, 1]).unwrap();
        assert_eq!(game.rolls_left(), 1);
        let values = game.hand_values().unwrap();

        game.mark(Category::Chance).unwrap();
        assert_eq!(game.rolls_left(), ROLLS_PER_TURN);
        assert_eq!(game.hand_values(), Some(values));

        // Probing after the mark sees the same faces.
        assert_eq!(
            game.score_for(Category::Sixes).unwrap(),
            6 * values.iter().filter(|&&v| v == 6).count() as i32
        );
    }

    #[test]
    fn test_score_for_is_idempotent() {
        let mut game = Game::from_seed(8);
        game.roll(&ALL_DICE).unwrap();
        let a = game.score_for(Category::FullHouse).unwrap();
        let b = game.score_for(Category::FullHouse).unwrap();
        let c = game.score_for(Category::FullHouse).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_total_requires_full_card() {
        let mut game = Game::from_seed(9);
        assert_eq!(
            game.total_score(),
            Err(GameError::IncompleteScorecard { marked: 0 })
        );

        game.roll(&ALL_DICE).unwrap();
        game.mark(Category::Ones).unwrap();
        assert_eq!(
            game.total_score(),
            Err(GameError::IncompleteScorecard { marked: 1 })
        );
    }

    #[test]
    fn test_total_sums_categories_and_bonus() {
        let mut game = Game::from_seed(10);
        for &category in &Category::ALL {
            game.roll(&ALL_DICE).unwrap();
            game.mark(category).unwrap();
        }
        assert!(game.is_scorecard_full());

        let marked: i32 = Category::ALL
            .iter()
            .map(|&c| game.score(c).unwrap())
            .sum();
        let expected_bonus = if game.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        };
        assert_eq!(game.bonus(), expected_bonus);
        assert_eq!(game.total_score().unwrap(), marked + expected_bonus);
    }

    #[test]
    fn test_subtotals_on_partial_card_count_marked_only() {
        let mut game = Game::from_seed(11);
        assert_eq!(game.upper_subtotal(), 0);
        assert_eq!(game.lower_subtotal(), 0);

        game.roll(&ALL_DICE).unwrap();
        let score = game.mark(Category::Sixes).unwrap();
        assert_eq!(game.upper_subtotal(), score);
        assert_eq!(game.lower_subtotal(), 0);
    }

    #[test]
    fn test_seeded_games_are_identical() {
        let mut a = Game::from_seed(12);
        let mut b = Game::from_seed(12);
        for _ in 0..6 {
            a.roll(&[0, 2, 4]).unwrap();
            b.roll(&[0, 2, 4]).unwrap();
            assert_eq!(a.hand_values(), b.hand_values());
            assert_eq!(a.rolls_left(), b.rolls_left());
        }
    }
}
