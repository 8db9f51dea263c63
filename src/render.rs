//! Read-only text rendering of a scorecard.
//!
//! Produces the classic card layout: the six upper categories with an
//! UPPER/BONUS/TOTAL block, the seven lower categories, and a footer with
//! the lower, bonus-adjusted upper, and grand totals. Unmarked categories
//! show as `-` and count 0 toward the displayed subtotals, so the card is
//! printable mid-game as a progress view.

use crate::constants::Category;
use crate::game::Game;

const LABEL_WIDTH: usize = 13;

fn mark_cell(score: Option<i32>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => "-".to_string(),
    }
}

/// Render the full card for a game, complete or in progress.
pub fn render_scorecard(game: &Game) -> String {
    let upper = game.upper_subtotal();
    let lower = game.lower_subtotal();
    let bonus = game.bonus();

    let mut out = String::new();
    for &category in &Category::UPPER {
        out.push_str(&format!(
            "{:<width$} {:>4}\n",
            category.display_name(),
            mark_cell(game.score(category)),
            width = LABEL_WIDTH
        ));
    }
    out.push_str(&format!("{:<width$} {:>4}\n", "UPPER", upper, width = LABEL_WIDTH));
    out.push_str(&format!("{:<width$} {:>4}\n", "BONUS", bonus, width = LABEL_WIDTH));
    out.push_str(&format!(
        "{:<width$} {:>4}\n",
        "TOTAL",
        upper + bonus,
        width = LABEL_WIDTH
    ));
    out.push('\n');

    for &category in &Category::LOWER {
        out.push_str(&format!(
            "{:<width$} {:>4}\n",
            category.display_name(),
            mark_cell(game.score(category)),
            width = LABEL_WIDTH
        ));
    }
    out.push('\n');

    out.push_str(&format!("{:<width$} {:>4}\n", "LOWER", lower, width = LABEL_WIDTH));
    out.push_str(&format!(
        "{:<width$} {:>4}\n",
        "UPPER",
        upper + bonus,
        width = LABEL_WIDTH
    ));
    out.push_str(&format!(
        "{:<width$} {:>4}\n",
        "TOTAL",
        upper + lower + bonus,
        width = LABEL_WIDTH
    ));
    out
}
