//! Tests for the tic-tac-toe board and positions.

use perfect_tictactoe::{Board, GameStatus, MoveError, Player, Position, Square, Symmetry};
use strum::IntoEnumIterator;

fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            let player = match symbol {
                'X' => Player::X,
                'O' => Player::O,
                _ => continue,
            };
            board
                .place(Position::from_coords(row as i64, col as i64).unwrap(), player)
                .unwrap();
        }
    }
    board
}

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_coords() {
    assert_eq!(Position::from_coords(0, 2), Ok(Position::TopRight));
    assert_eq!(Position::from_coords(2, 1), Ok(Position::BottomCenter));
    assert_eq!(Position::MiddleLeft.coords(), (1, 0));
    assert_eq!(
        Position::from_coords(0, 3),
        Err(MoveError::OutOfBounds { row: 0, col: 3 })
    );
}

#[test]
fn test_top_row_win_is_terminal() {
    let board = board_from(["XXX", "   ", "   "]);
    assert_eq!(board.winner(), Some(Player::X));
    assert!(board.is_terminal());
    assert_eq!(GameStatus::of(&board), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from(["XOX", "XOO", "OXX"]);
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
    assert!(board.is_terminal());
    assert_eq!(GameStatus::of(&board), GameStatus::Draw);
}

#[test]
fn test_open_board_is_not_terminal() {
    let board = board_from(["XO ", " X ", "  O"]);
    assert_eq!(board.winner(), None);
    assert!(!board.is_terminal());
    assert_eq!(board.empty_cells().len(), 5);
}

#[test]
fn test_place_and_clear_preconditions() {
    let mut board = Board::new();
    board.place(Position::Center, Player::O).unwrap();
    assert_eq!(
        board.place(Position::Center, Player::X),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));

    board.clear(Position::Center).unwrap();
    assert_eq!(
        board.clear(Position::Center),
        Err(MoveError::SquareEmpty(Position::Center))
    );
}

#[test]
fn test_winner_invariant_under_symmetries() {
    let boards = [
        board_from(["XXX", "OO ", "   "]),
        board_from(["O X", "OX ", "O  "]),
        board_from(["X O", " XO", "  X"]),
        board_from(["XO ", "OX ", "   "]),
        board_from(["XOX", "XOO", "OXX"]),
    ];

    for board in &boards {
        let expected = board.winner();
        for sym in Symmetry::iter() {
            let transformed = sym.apply_board(board);
            assert_eq!(transformed.winner(), expected, "{sym:?}\n{board}");
            assert_eq!(transformed.is_terminal(), board.is_terminal());
            assert_eq!(sym.inverse().apply_board(&transformed), *board);
        }
    }
}
