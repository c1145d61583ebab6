//! Perfect Tic-Tac-Toe library - exhaustive minimax play
//!
//! The computer (X) plays a human (O) on a 3x3 board and never loses:
//! every move it makes is chosen by searching the complete game tree.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with win/draw queries and place/clear mutators
//! - **Search**: exhaustive minimax over a borrowed [`GamePosition`]
//! - **Game**: turn order, status and history for one session
//! - **Console**: line-based terminal front end
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Outcome, Position, best_move, evaluate};
//!
//! let mut board = Board::new();
//! assert_eq!(evaluate(&mut board, true), Outcome::Draw);
//! assert_eq!(best_move(&mut board), Some(Position::TopLeft));
//! assert_eq!(board, Board::new());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal front end
pub use console::{Console, InputError, parse_coords};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GamePosition, GameStatus, LINES, Minimax, Move, MoveError, Outcome, Player,
    Position, Square, Symmetry, TrialMove, best_move, check_winner, evaluate, is_draw, is_full,
};
