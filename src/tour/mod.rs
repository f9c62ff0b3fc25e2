//! Tour search: configuration, budgets, the exhaustive solver, and
//! validation helpers.
//!
//! The search itself is deliberately brute force — no move ordering, no
//! memoization, no pruning beyond the bounds and revisit checks — because the
//! result of interest is the *full* leaf count, not the first solution:
//!
//! - [`config`]: board dimensions, start square, and budgets.
//! - [`solve`]: the recursive value-copy solver and its sink-driven drivers.
//! - [`counts`]: aggregate statistics for one full search.
//! - [`resources`]: node budgets that keep absurd configurations from
//!   running away.
//! - [`verify`]: complete-tour invariant checks.

use std::fmt;

pub mod config;
pub mod counts;
pub mod resources;
pub mod solve;
pub mod verify;

#[derive(Debug, Clone, Copy)]
/// Search budgets used to bound runtime.
///
/// `max_nodes` counts knight placements, i.e. calls that pass both the bounds
/// and revisit checks. The exhaustive tree of the classic 5x5 board places
/// well under two million knights from any start square; the default leaves
/// generous headroom for somewhat larger boards while still failing fast on
/// hopeless ones.
pub struct ResourceLimits {
    pub max_nodes: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_nodes: 500_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    /// Knight placements (search-tree nodes).
    pub nodes: u64,
    /// Attempted moves that left the board.
    pub out_of_bounds: u64,
    /// Attempted moves onto an already-visited cell.
    pub revisits: u64,
    /// Complete tours found.
    pub tours: u64,
}

#[derive(Debug)]
/// Structured errors returned by search routines.
pub enum SearchError {
    /// The configuration is internally inconsistent (e.g. a zero-area board).
    InvalidConfig { reason: String },
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// Console write failure (surfaced by the reporting binary).
    Io { stage: &'static str, error: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
                 counts(nodes={}, out_of_bounds={}, revisits={}, tours={})",
                counts.nodes, counts.out_of_bounds, counts.revisits, counts.tours
            ),
            SearchError::Io { stage, error } => {
                write!(f, "io error at {stage}: {error}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
