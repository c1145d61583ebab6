//! The eight symmetries of the square (D4) acting on boards and positions.

use super::{Board, Position, Square};
use serde::{Deserialize, Serialize};

/// A rotation or reflection of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Symmetry {
    /// No change.
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    /// Mirror across the vertical axis (columns swap).
    FlipHorizontal,
    /// Mirror across the horizontal axis (rows swap).
    FlipVertical,
    /// Mirror across the main diagonal.
    Transpose,
    /// Mirror across the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    /// Where `pos` lands under this transform.
    pub fn apply(self, pos: Position) -> Position {
        let (r, c) = pos.coords();
        let (row, col) = match self {
            Symmetry::Identity => (r, c),
            Symmetry::Rotate90 => (c, 2 - r),
            Symmetry::Rotate180 => (2 - r, 2 - c),
            Symmetry::Rotate270 => (2 - c, r),
            Symmetry::FlipHorizontal => (r, 2 - c),
            Symmetry::FlipVertical => (2 - r, c),
            Symmetry::Transpose => (c, r),
            Symmetry::AntiTranspose => (2 - c, 2 - r),
        };
        Position::ALL[row * 3 + col]
    }

    /// The transform undoing this one.
    pub fn inverse(self) -> Self {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    /// A new board with every square moved by this transform.
    pub fn apply_board(self, board: &Board) -> Board {
        let mut squares = [[Square::Empty; 3]; 3];
        for pos in Position::ALL {
            let target = self.apply(pos);
            squares[target.row()][target.col()] = board.get(pos);
        }
        Board::from_rows(squares)
    }
}
