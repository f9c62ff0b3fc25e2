use std::io::{self, BufWriter, Write};

use knights_tour::report::{write_banner, write_solution, write_total};
use knights_tour::tour::config::TourConfig;
use knights_tour::tour::solve::try_for_each_tour;
use knights_tour::tour::SearchError;

fn main() {
    // The classic problem: 5x5 board, knight starting at the center. The
    // program takes no arguments.
    let cfg = TourConfig::default();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = run(&cfg, &mut out) {
        eprintln!("Search failed: {e}");
        std::process::exit(1);
    }

    if let Err(e) = out.flush() {
        eprintln!("Search failed: {e}");
        std::process::exit(1);
    }
}

fn run(cfg: &TourConfig, out: &mut impl Write) -> Result<(), SearchError> {
    write_banner(out, cfg).map_err(io_err)?;

    // Display numbering is threaded through the sink, so the solver itself
    // stays free of output state.
    let mut numbered: u64 = 0;
    let total = try_for_each_tour(cfg, &mut |board| {
        numbered += 1;
        write_solution(out, numbered, board).map_err(io_err)
    })?;

    write_total(out, total).map_err(io_err)
}

fn io_err(e: io::Error) -> SearchError {
    SearchError::Io {
        stage: "report",
        error: e.to_string(),
    }
}
