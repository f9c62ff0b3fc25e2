//! Aggregate statistics for one full search.
//!
//! Primarily intended for parity / cross-check harnesses: the counters pin
//! down the whole shape of the search tree, not just the number of tours, so
//! a reimplementation that prunes differently cannot match them by accident.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::tour::config::TourConfig;
use crate::tour::resources::ResourceTracker;
use crate::tour::solve::solve;
use crate::tour::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourCounts {
    /// Complete tours found.
    pub tours: u64,
    /// Knight placements (search-tree nodes, including tour leaves).
    pub nodes: u64,
    /// Attempted moves that left the board.
    pub dead_out_of_bounds: u64,
    /// Attempted moves onto an already-visited cell.
    pub dead_revisits: u64,
}

/// Run the full search described by `cfg` and report its tree counters.
pub fn compute_tour_counts(cfg: &TourConfig) -> Result<TourCounts, SearchError> {
    cfg.validate()?;

    let mut tracker = ResourceTracker::new(cfg.limits);
    let tours = solve(
        Board::new(cfg.width, cfg.height),
        cfg.start,
        1,
        &mut tracker,
        &mut |_| Ok(()),
    )?;

    let counts = tracker.counts();
    debug_assert_eq!(tours, counts.tours);

    Ok(TourCounts {
        tours,
        nodes: counts.nodes,
        dead_out_of_bounds: counts.out_of_bounds,
        dead_revisits: counts.revisits,
    })
}
