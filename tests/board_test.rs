//! Tests for board storage, coordinate checking and rendering.

use tictactoe_core::{Board, OutOfBounds, Player, Tile};

fn assert_all_empty(board: &Board) {
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(board.tile_at(row, col).unwrap(), Tile::Empty);
        }
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_all_empty(&board);
}

#[test]
fn test_mark_then_read_back() {
    let mut board = Board::new();
    board.mark(1, 1, Player::One.tile()).unwrap();
    assert_eq!(board.tile_at(1, 1).unwrap(), Tile::Marked(Player::One));
    assert!(!board.is_empty());
    assert!(!board.is_full());
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = Board::new();
    assert_eq!(
        board.tile_at(3, 0),
        Err(OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        board.mark(0, 3, Player::One.tile()),
        Err(OutOfBounds { row: 0, col: 3 })
    );
    // The failed write left the board untouched.
    assert!(board.is_empty());
}

#[test]
fn test_clear_resets_every_cell() {
    let mut board = Board::new();
    board.mark(1, 1, Player::One.tile()).unwrap();
    board.mark(2, 0, Player::Two.tile()).unwrap();
    board.clear();
    assert!(board.is_empty());
    assert_all_empty(&board);
}

#[test]
fn test_board_becomes_full() {
    let mut board = Board::new();
    let mut player = Player::One;
    for row in 0..3 {
        for col in 0..3 {
            board.mark(row, col, player.tile()).unwrap();
            player = player.opponent();
        }
    }
    assert!(board.is_full());
    assert!(!board.is_empty());
}

#[test]
fn test_empty_board_display() {
    let board = Board::new();
    assert_eq!(board.to_string(), "[ ][ ][ ]\n[ ][ ][ ]\n[ ][ ][ ]");
}

#[test]
fn test_marked_board_display() {
    let mut board = Board::new();
    board.mark(0, 0, Player::One.tile()).unwrap();
    board.mark(1, 1, Player::Two.tile()).unwrap();
    board.mark(2, 2, Player::One.tile()).unwrap();
    assert_eq!(board.to_string(), "[X][ ][ ]\n[ ][O][ ]\n[ ][ ][X]");
}

#[test]
fn test_structural_equality() {
    let mut left = Board::new();
    let mut right = Board::new();
    assert_eq!(left, right);

    left.mark(0, 0, Player::One.tile()).unwrap();
    assert_ne!(left, right);

    right.mark(0, 0, Player::One.tile()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_iter_rows_matches_cells() {
    let mut board = Board::new();
    board.mark(0, 2, Player::Two.tile()).unwrap();
    let rows: Vec<[Tile; 3]> = board.iter_rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], [Tile::Empty, Tile::Empty, Tile::Marked(Player::Two)]);
    assert_eq!(rows[1], [Tile::Empty; 3]);
}
