//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
///
/// `X` is the computer and maximizes the search outcome; `O` is the human
/// and minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (the computer).
    X,
    /// Player O (the human).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Mutated in place both by real play and by the search engine, which
/// places trial marks and clears them again while exploring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed as `[row][col]`.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 3]; 3],
        }
    }

    /// Builds a board from rows of squares.
    pub fn from_rows(squares: [[Square; 3]; 3]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row()][pos.col()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// The board is left untouched when the square is occupied.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.row()][pos.col()] = Square::Occupied(player);
        Ok(())
    }

    /// Resets an occupied square to empty.
    pub fn clear(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_empty(pos) {
            return Err(MoveError::SquareEmpty(pos));
        }
        self.squares[pos.row()][pos.col()] = Square::Empty;
        Ok(())
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True once the game on this board is decided: a line is complete or
    /// no square is left.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Empty squares in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of squares held by `player`.
    #[instrument(skip(self))]
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| **sq == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as rows.
    pub fn squares(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid as `X | O |  ` rows separated by `---------`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|sq| match sq {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
            if i < 2 {
                writeln!(f, "---------")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Derives the status from a board.
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = board.winner() {
            GameStatus::Won(winner)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
