//! Played moves and the ways a move can be refused.
//!
//! [`Game`](super::Game) keeps every accepted [`Move`] in its history, so
//! a finished game reads back as the exact sequence of plies. A refused
//! move leaves no record.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One ply: who played where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Mark that was placed.
    pub player: Player,
    /// Cell it went on.
    pub position: Position,
}

impl Move {
    /// Records `player` taking `position`.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Mark that was placed.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Cell it went on.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a cell could not be played or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside 0-2.
    #[display("Position ({}, {}) is off the board (row and col must be 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// Cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// Tried to clear a square that holds no mark.
    #[display("Square {} is already empty", _0)]
    SquareEmpty(Position),

    /// Won or drawn; no more moves.
    #[display("Game is already over")]
    GameOver,

    /// The other side is to move.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}
