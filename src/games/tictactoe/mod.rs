//! Tic-tac-toe against an exhaustive minimax opponent.

mod action;
mod game;
mod position;
mod rules;
mod search;
mod symmetry;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full};
pub use search::{GamePosition, Minimax, Outcome, TrialMove, best_move, evaluate};
pub use symmetry::Symmetry;
pub use types::{Board, GameStatus, Player, Square};
