//! Console reporting for the tour binary.
//!
//! The output contract, in order: a banner naming the program and the
//! 1-indexed start square, a progress line, each discovered tour as a
//! numbered board block, and a final total line. Writers are generic over
//! [`io::Write`] so tests can capture the exact byte stream.

use std::io::{self, Write};

use crate::core::board::Board;
use crate::tour::config::TourConfig;

/// Startup banner plus the progress line.
pub fn write_banner(w: &mut impl Write, cfg: &TourConfig) -> io::Result<()> {
    writeln!(w, "Welcome to the Knight's Tour solver!")?;
    // 1-indexed (row, column), the way people number board squares.
    writeln!(w, "Starting position ({}, {})", cfg.start.y + 1, cfg.start.x + 1)?;
    writeln!(w, "Calculating...")?;
    writeln!(w)
}

/// One numbered solution block: header, board, blank separator line.
pub fn write_solution(w: &mut impl Write, number: u64, board: &Board) -> io::Result<()> {
    writeln!(w, "Solution #{number}:")?;
    write!(w, "{board}")?;
    writeln!(w)
}

/// The final total line.
pub fn write_total(w: &mut impl Write, total: u64) -> io::Result<()> {
    writeln!(w, "Total solutions: {total}")
}
