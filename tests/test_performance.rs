//! Performance tests for adjacency construction and target enumeration

use clue_board::config::{DIE_FACES, MAX_BOARD_SIZE};
use clue_board::{Board, BoardResult, Legend, LegendEntry, RoomKind};
use std::time::Instant;

fn legend() -> Legend {
    let mut legend = Legend::new();
    legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
    legend.insert('R', LegendEntry::room("Ballroom", RoomKind::Card)).unwrap();
    legend
}

#[test]
fn test_full_size_board_turns() -> BoardResult<()> {
    // Largest board: open floor with a ring of rooms every tenth row and column
    let mut layout = vec![vec!["W"; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
    for row in 0..MAX_BOARD_SIZE {
        for column in 0..MAX_BOARD_SIZE {
            if row % 10 == 5 && column % 10 == 5 {
                layout[row][column] = "R";
            }
            if row % 10 == 4 && column % 10 == 5 {
                layout[row][column] = "RU";
            }
        }
    }

    let start = Instant::now();
    let board = Board::from_layout(&layout, legend())?;
    let setup_time = start.elapsed();
    println!("Board setup time: {:?}", setup_time);

    let start = Instant::now();
    let mut total_targets = 0;
    for steps in 1..=DIE_FACES {
        total_targets += board.calc_targets(25, 25, steps).len();
        total_targets += board.calc_targets(0, 0, steps).len();
    }
    let elapsed = start.elapsed();
    let avg_turn_time = elapsed / (2 * DIE_FACES as u32);

    println!("Average turn time: {:?} ({} targets)", avg_turn_time, total_targets);
    assert!(total_targets > 0);

    // A turn must be quick enough to run on every player move
    assert!(
        avg_turn_time.as_millis() < 100,
        "Target search too slow: {:?}",
        avg_turn_time
    );

    Ok(())
}
