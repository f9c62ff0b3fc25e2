use crate::core::coord::Coord;
use crate::tour::{ResourceLimits, SearchError};

/// Tour search configuration (pure Rust, no parsing).
#[derive(Debug, Clone)]
pub struct TourConfig {
    pub width: usize,
    pub height: usize,

    /// Starting square, 0-indexed. An out-of-bounds start is legal and simply
    /// yields zero tours.
    pub start: Coord,

    pub limits: ResourceLimits,
}

impl TourConfig {
    /// A board with the knight starting on the center square.
    ///
    /// Integer division puts the start at the exact center for odd dimensions
    /// and just past it for even ones.
    pub fn centered(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start: Coord::new((width / 2) as i32, (height / 2) as i32),
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = start;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Validate config invariants. Intended to be called by CLIs/tests before
    /// running solvers.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.width == 0 || self.height == 0 {
            return Err(SearchError::InvalidConfig {
                reason: "board must have at least one cell".to_string(),
            });
        }

        if self.area() > u32::MAX as usize {
            return Err(SearchError::InvalidConfig {
                reason: format!(
                    "board area {} does not fit a u32 move number",
                    self.area()
                ),
            });
        }

        Ok(())
    }
}

impl Default for TourConfig {
    /// The classic board: 5x5, knight starting at the center.
    fn default() -> Self {
        Self::centered(5, 5)
    }
}
