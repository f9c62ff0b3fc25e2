use knights_tour::core::board::Board;
use knights_tour::core::coord::Coord;
use knights_tour::tour::config::TourConfig;
use knights_tour::tour::solve::for_each_tour;
use knights_tour::tour::verify::{check_complete_tour, is_complete_tour, TourDefect};

fn collect_tours(cfg: &TourConfig) -> (u64, Vec<Board>) {
    let mut boards = Vec::new();
    let total = for_each_tour(cfg, |board| boards.push(board.clone())).unwrap();
    (total, boards)
}

#[test]
fn every_emitted_tour_is_complete_and_the_total_matches() {
    let (total, boards) = collect_tours(&TourConfig::default());

    assert_eq!(total, 64);
    assert_eq!(boards.len() as u64, total);
    for board in &boards {
        check_complete_tour(board).unwrap();
    }
}

#[test]
fn enumeration_is_deterministic_across_runs() {
    let cfg = TourConfig::default();
    let (total_a, boards_a) = collect_tours(&cfg);
    let (total_b, boards_b) = collect_tours(&cfg);

    assert_eq!(total_a, total_b);
    assert_eq!(boards_a, boards_b);
}

#[test]
fn first_discovered_tour_follows_the_fixed_delta_order() {
    let mut first: Option<Board> = None;
    for_each_tour(&TourConfig::default(), |board| {
        if first.is_none() {
            first = Some(board.clone());
        }
    })
    .unwrap();

    let rendered = first.expect("the 5x5 search finds tours").to_string();
    assert_eq!(
        rendered,
        "19 12 17 06 21\n\
         02 07 20 11 16\n\
         13 18 01 22 05\n\
         08 03 24 15 10\n\
         25 14 09 04 23\n"
    );
}

#[test]
fn verify_rejects_boards_that_are_not_tours() {
    // Unvisited cells.
    let blank = Board::new(2, 2);
    assert!(!is_complete_tour(&blank));

    // Row-major numbering is not a knight path.
    let mut row_major = Board::new(2, 2);
    row_major.set(Coord::new(0, 0), 1);
    row_major.set(Coord::new(1, 0), 2);
    row_major.set(Coord::new(0, 1), 3);
    row_major.set(Coord::new(1, 1), 4);
    assert!(matches!(
        check_complete_tour(&row_major),
        Err(TourDefect::BrokenStep { move_number: 1, .. })
    ));

    // A duplicated move number.
    let mut duplicated = Board::new(2, 2);
    duplicated.set(Coord::new(0, 0), 1);
    duplicated.set(Coord::new(1, 0), 2);
    duplicated.set(Coord::new(0, 1), 3);
    duplicated.set(Coord::new(1, 1), 3);
    assert!(matches!(
        check_complete_tour(&duplicated),
        Err(TourDefect::DuplicateMove { value: 3, .. })
    ));
}
