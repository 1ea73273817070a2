//! Board tests - tile storage, bounds rule, and reveal state

use goal_robot::core::{Board, Tile};
use goal_robot::types::{TileType, LEVEL_HIDDEN, LEVEL_MASKED, LEVEL_SHOWN};

fn sample_board() -> Board {
    Board::from_rows(["%%%%%%", "% +-#%", "%u d %", "%%"])
}

#[test]
fn test_board_from_rows_classifies_every_char() {
    let board = sample_board();
    assert_eq!(board.row_count(), 4);

    let row: Vec<TileType> = board.row(1).iter().map(Tile::content).collect();
    assert_eq!(
        row,
        vec![
            TileType::Boundary,
            TileType::Empty,
            TileType::Battery,
            TileType::Trap,
            TileType::Obstacle,
            TileType::Boundary,
        ]
    );
    assert_eq!(board.at((2, 1)).unwrap().content(), TileType::ArrowUp);
    assert_eq!(board.at((2, 3)).unwrap().content(), TileType::ArrowDown);
}

#[test]
fn test_board_new_tiles_are_hidden() {
    let board = sample_board();
    for tile in board.tiles() {
        assert_eq!(tile.level(), LEVEL_HIDDEN);
        assert_eq!(tile.visible_char(), ' ');
    }
}

#[test]
fn test_board_rows_are_not_padded() {
    let board = sample_board();
    assert_eq!(board.row_width(3), 2);
    assert!(board.at((3, 2)).is_none());
    assert!(!board.in_bounds((3, 2)));
    // Row 3 is the last row and has width 2: only column 1 is playable.
    assert!(board.in_bounds((3, 1)));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = sample_board();

    // Negative coordinates
    assert!(board.at((-1, 0)).is_none());
    assert!(board.at((0, -1)).is_none());
    assert!(!board.in_bounds((-1, 1)));

    // Beyond bounds
    assert!(board.at((4, 0)).is_none());
    assert!(board.at((0, 6)).is_none());
    assert!(!board.in_bounds((1, 6)));
}

#[test]
fn test_board_margin_row_and_column_are_never_playable() {
    let board = sample_board();
    for col in 0..6 {
        assert!(!board.in_bounds((0, col)), "row 0 col {}", col);
    }
    for row in 0..4 {
        assert!(!board.in_bounds((row, 0)), "row {} col 0", row);
    }
    assert!(board.in_bounds((1, 1)));
    assert!(board.in_bounds((1, 5)));
}

#[test]
fn test_tile_reveal_is_monotonic() {
    let mut board = sample_board();
    let tile = board.at_mut((1, 2)).unwrap();
    tile.reveal(LEVEL_SHOWN);
    tile.reveal(LEVEL_MASKED);
    tile.reveal(LEVEL_HIDDEN);
    assert_eq!(tile.level(), LEVEL_SHOWN);
    assert_eq!(tile.visible_char(), '+');
}

#[test]
fn test_tile_consume_turns_pickups_into_trail() {
    let mut board = sample_board();
    for pos in [(1, 2), (1, 3)] {
        let tile = board.at_mut(pos).unwrap();
        tile.consume();
        tile.reveal(LEVEL_SHOWN);
        assert_eq!(tile.content(), TileType::Trail);
        assert_eq!(tile.visible_char(), '.');
    }
    // Neighbours untouched
    assert_eq!(board.at((1, 4)).unwrap().content(), TileType::Obstacle);
}
