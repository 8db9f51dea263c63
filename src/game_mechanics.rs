//! Yahtzee scoring rules: pure category-score functions.
//!
//! Every function maps a five-die hand (face values, any order) to a
//! non-negative score via a face-count histogram. Note the of-a-kind
//! categories score face × multiplier, not the dice sum: {3,3,3,5,5}
//! scores 9 for 3-of-a-kind, and a five-of-a-kind qualifies for both
//! of-a-kind categories but never for a full house (no face has exactly
//! two occurrences).

use crate::constants::*;
use crate::dice_mechanics::count_faces;

/// Compute the score for placing a hand in the given category.
pub fn category_score(values: &[i32; DICE_PER_HAND], category: Category) -> i32 {
    let face_count = count_faces(values);

    match category {
        Category::Ones => digit_score(&face_count, 1),
        Category::Twos => digit_score(&face_count, 2),
        Category::Threes => digit_score(&face_count, 3),
        Category::Fours => digit_score(&face_count, 4),
        Category::Fives => digit_score(&face_count, 5),
        Category::Sixes => digit_score(&face_count, 6),
        Category::ThreeOfAKind => n_of_a_kind_score(&face_count, 3),
        Category::FourOfAKind => n_of_a_kind_score(&face_count, 4),
        Category::FullHouse => full_house_score(&face_count),
        Category::SmallStraight => {
            if has_straight(&face_count, 4) {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if has_straight(&face_count, 5) {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::Yahtzee => {
            for f in 1..=6 {
                if face_count[f] == DICE_PER_HAND as i32 {
                    return YAHTZEE_SCORE;
                }
            }
            0
        }
        Category::Chance => values.iter().sum(),
    }
}

/// Upper-section score: face value × count of that face.
#[inline(always)]
fn digit_score(face_count: &[i32; 7], face: i32) -> i32 {
    face_count[face as usize] * face
}

/// Scoring helper for the of-a-kind categories.
/// Returns face * n for the first face (scanning 1..=6) appearing at least
/// n times, else 0. With five dice at most one face can reach three, so the
/// scan order is a formality.
fn n_of_a_kind_score(face_count: &[i32; 7], n: i32) -> i32 {
    for face in 1..=6 {
        if face_count[face] >= n {
            return face as i32 * n;
        }
    }
    0
}

/// 25 points for a 2-and-3 split across two distinct faces.
fn full_house_score(face_count: &[i32; 7]) -> i32 {
    let mut three_face = 0;
    let mut pair_face = 0;
    for f in 1..=6 {
        if face_count[f] == 3 {
            three_face = f;
        } else if face_count[f] == 2 {
            pair_face = f;
        }
    }
    if three_face != 0 && pair_face != 0 {
        FULL_HOUSE_SCORE
    } else {
        0
    }
}

/// Whether the distinct faces contain a run of `len` consecutive values.
fn has_straight(face_count: &[i32; 7], len: usize) -> bool {
    (1..=7 - len).any(|start| (start..start + len).all(|f| face_count[f] >= 1))
}
