//! Complete-tour validation.
//!
//! The solver only ever emits boards it has filled itself, so these checks
//! exist for tests and for cross-checking alternative search strategies, not
//! for the hot path.

use rustc_hash::FxHashMap;

use crate::core::board::Board;
use crate::core::coord::{is_knight_step, Coord};

/// Why a board fails to be a complete knight's tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourDefect {
    /// A cell is unvisited or holds a move number above the board area.
    ValueOutOfRange { at: Coord, value: u32 },
    /// Two cells share a move number.
    DuplicateMove { value: u32, first: Coord, second: Coord },
    /// Consecutive move numbers are not a knight step apart.
    BrokenStep { from: Coord, to: Coord, move_number: u32 },
}

/// Check that `board` is a complete tour: every move number `1..=area`
/// appears exactly once, and consecutive numbers sit a knight step apart.
pub fn check_complete_tour(board: &Board) -> Result<(), TourDefect> {
    let area = board.area() as u32;

    let mut by_number: FxHashMap<u32, Coord> = FxHashMap::default();
    for (at, value) in board.cells() {
        if value == 0 || value > area {
            return Err(TourDefect::ValueOutOfRange { at, value });
        }
        if let Some(&first) = by_number.get(&value) {
            return Err(TourDefect::DuplicateMove {
                value,
                first,
                second: at,
            });
        }
        by_number.insert(value, at);
    }

    // `area` distinct in-range values means every number 1..=area is present.
    for n in 1..area {
        let from = by_number[&n];
        let to = by_number[&(n + 1)];
        if !is_knight_step(to - from) {
            return Err(TourDefect::BrokenStep {
                from,
                to,
                move_number: n,
            });
        }
    }

    Ok(())
}

/// Boolean convenience form of [`check_complete_tour`].
pub fn is_complete_tour(board: &Board) -> bool {
    check_complete_tour(board).is_ok()
}
