//! Exhaustive knight's-tour enumeration by brute-force backtracking.
//!
//! [`solve`] tries every sequence of knight steps from a start square and
//! feeds each complete tour to a caller-supplied sink in discovery order.
//! Branching copies the board, so backtracking never has to undo a mark:
//! sibling branches diverge from an unmodified parent copy.

use crate::core::board::Board;
use crate::core::coord::{Coord, KNIGHT_DELTAS};
use crate::tour::config::TourConfig;
use crate::tour::resources::ResourceTracker;
use crate::tour::SearchError;

/// Attempt to place move `move_number` on `at`, then recurse over all knight
/// continuations.
///
/// The board is taken by value: this call owns its copy, marks it once, and
/// clones it for each child. Out-of-bounds targets and already-visited cells
/// are expected dead branches contributing zero, not errors.
///
/// Returns the number of complete tours found at or below this placement.
pub fn solve<F>(
    mut board: Board,
    at: Coord,
    move_number: u32,
    tracker: &mut ResourceTracker,
    sink: &mut F,
) -> Result<u64, SearchError>
where
    F: FnMut(&Board) -> Result<(), SearchError>,
{
    if !board.is_in_bounds(at) {
        tracker.note_out_of_bounds();
        return Ok(0);
    }
    if board.at(at) != 0 {
        tracker.note_revisit();
        return Ok(0);
    }

    tracker.bump_nodes("tour_solve")?;
    board.set(at, move_number);

    if move_number as usize == board.area() {
        tracker.note_tour();
        sink(&board)?;
        return Ok(1);
    }

    let mut tours = 0u64;
    for &delta in &KNIGHT_DELTAS {
        tours += solve(board.clone(), at + delta, move_number + 1, tracker, sink)?;
    }
    Ok(tours)
}

/// Run the full search described by `cfg`, feeding every complete tour to
/// `sink` in discovery order.
///
/// The sink is fallible so callers can abort mid-search (e.g. on a failed
/// console write). Returns the total number of tours on success.
pub fn try_for_each_tour<F>(cfg: &TourConfig, sink: &mut F) -> Result<u64, SearchError>
where
    F: FnMut(&Board) -> Result<(), SearchError>,
{
    cfg.validate()?;
    let board = Board::new(cfg.width, cfg.height);
    let mut tracker = ResourceTracker::new(cfg.limits);
    solve(board, cfg.start, 1, &mut tracker, sink)
}

/// Like [`try_for_each_tour`], with an infallible sink.
pub fn for_each_tour(cfg: &TourConfig, mut f: impl FnMut(&Board)) -> Result<u64, SearchError> {
    try_for_each_tour(cfg, &mut |board| {
        f(board);
        Ok(())
    })
}

/// Count complete tours without materializing them.
pub fn count_tours(cfg: &TourConfig) -> Result<u64, SearchError> {
    try_for_each_tour(cfg, &mut |_| Ok(()))
}
