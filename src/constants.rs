//! Scoring categories and fixed rule constants.
//!
//! The thirteen categories of a standard Yahtzee card, in card order: the six
//! digit categories of the upper section, then the seven combination
//! categories of the lower section. [`Category`] is a closed enum and every
//! dispatch over it is exhaustive, so an invalid category cannot exist at
//! runtime: misspelling or forgetting one is a compile error.

use std::fmt;

/// Number of scoring categories on the card.
pub const CATEGORY_COUNT: usize = 13;

/// Dice in a hand.
pub const DICE_PER_HAND: usize = 5;

/// Roll budget per turn (initial roll plus up to two rerolls).
pub const ROLLS_PER_TURN: i32 = 3;

/// All five die positions, for full-hand rolls.
pub const ALL_DICE: [usize; DICE_PER_HAND] = [0, 1, 2, 3, 4];

/// Upper bonus: 35 points if the six digit categories total at least 63.
pub const UPPER_BONUS_THRESHOLD: i32 = 63;
pub const UPPER_BONUS: i32 = 35;

/// Fixed combination scores.
pub const FULL_HOUSE_SCORE: i32 = 25;
pub const SMALL_STRAIGHT_SCORE: i32 = 30;
pub const LARGE_STRAIGHT_SCORE: i32 = 40;
pub const YAHTZEE_SCORE: i32 = 50;

/// One scoring slot on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    // Upper section
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    // Lower section
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    /// Every category in card order. This order is also the tie-break order
    /// used by the greedy player.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// The six digit categories eligible for the upper bonus.
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// The seven combination categories.
    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    pub fn is_upper(self) -> bool {
        matches!(
            self,
            Category::Ones
                | Category::Twos
                | Category::Threes
                | Category::Fours
                | Category::Fives
                | Category::Sixes
        )
    }

    /// Ordinal in card order, used to index scorecard slots.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label as printed on the card.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "3-of-a-kind",
            Category::FourOfAKind => "4-of-a-kind",
            Category::FullHouse => "Full house",
            Category::SmallStraight => "Sm Straight",
            Category::LargeStraight => "Lg Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
