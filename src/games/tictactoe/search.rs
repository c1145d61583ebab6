//! Exhaustive minimax search for tic-tac-toe.
//!
//! The engine borrows a position mutably, explores every continuation by
//! placing and clearing marks in place, and hands the position back with
//! its original contents. X is the maximizing side, O the minimizing side.
//!
//! There is no pruning and no transposition table: the full game tree from
//! an empty board is under 550k nodes.

use super::action::MoveError;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, warn};

/// Exact game-theoretic value of a position, from X's point of view.
///
/// Ordered by value, so the maximizer takes `max` and the minimizer `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    /// O completes a line (-1).
    OWins,
    /// Full board, no line (0).
    Draw,
    /// X completes a line (+1).
    XWins,
}

impl Outcome {
    /// Scalar value: +1, 0 or -1.
    pub fn value(self) -> i8 {
        match self {
            Outcome::OWins => -1,
            Outcome::Draw => 0,
            Outcome::XWins => 1,
        }
    }

    /// Outcome of a game won by `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::XWins => write!(f, "X wins"),
        }
    }
}

/// A position the engine can search.
///
/// [`Board`] is the production implementation; anything else providing
/// these queries and mutators can be searched the same way.
pub trait GamePosition {
    /// Owner of a complete line, if any.
    fn winner(&self) -> Option<Player>;

    /// Win or full board.
    fn is_terminal(&self) -> bool;

    /// Empty cells in row-major order.
    fn empty_cells(&self) -> Vec<Position>;

    /// Puts `player`'s mark on an empty cell.
    fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError>;

    /// Empties an occupied cell.
    fn clear(&mut self, pos: Position) -> Result<(), MoveError>;
}

impl GamePosition for Board {
    fn winner(&self) -> Option<Player> {
        Board::winner(self)
    }

    fn is_terminal(&self) -> bool {
        Board::is_terminal(self)
    }

    fn empty_cells(&self) -> Vec<Position> {
        Board::empty_cells(self)
    }

    fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        Board::place(self, pos, player)
    }

    fn clear(&mut self, pos: Position) -> Result<(), MoveError> {
        Board::clear(self, pos)
    }
}

/// A mark placed for exploration, cleared again when the guard drops.
///
/// The guard derefs to the underlying position so the search can recurse
/// through it; every exit path, including early returns, undoes the mark.
pub struct TrialMove<'a, P: GamePosition> {
    position: &'a mut P,
    cell: Position,
}

impl<'a, P: GamePosition> TrialMove<'a, P> {
    /// Places `player` on `cell` and returns the guard owning the undo.
    pub fn place(position: &'a mut P, cell: Position, player: Player) -> Result<Self, MoveError> {
        position.place(cell, player)?;
        Ok(Self { position, cell })
    }

    /// The cell this guard will clear.
    pub fn cell(&self) -> Position {
        self.cell
    }
}

impl<P: GamePosition> Deref for TrialMove<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.position
    }
}

impl<P: GamePosition> DerefMut for TrialMove<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.position
    }
}

impl<P: GamePosition> Drop for TrialMove<'_, P> {
    fn drop(&mut self) {
        if let Err(err) = self.position.clear(self.cell) {
            warn!(%err, cell = %self.cell, "Failed to undo trial move");
        }
    }
}

/// Exhaustive minimax engine over a borrowed position.
pub struct Minimax<'a, P: GamePosition> {
    position: &'a mut P,
    nodes: u64,
}

impl<'a, P: GamePosition> Minimax<'a, P> {
    /// Creates an engine searching `position`.
    pub fn new(position: &'a mut P) -> Self {
        Self { position, nodes: 0 }
    }

    /// Returns the searched position.
    pub fn position(&self) -> &P {
        &*self.position
    }

    /// Positions visited by the most recent search call.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Value of the position with `maximizing` naming the side to move
    /// (`true` for X).
    #[instrument(skip(self))]
    pub fn evaluate(&mut self, maximizing: bool) -> Outcome {
        self.nodes = 0;
        let outcome = search(&mut *self.position, maximizing, &mut self.nodes);
        debug!(nodes = self.nodes, %outcome, "Evaluation finished");
        outcome
    }

    /// Every legal X move with its exact outcome, in row-major order.
    ///
    /// Each move is scored with O to reply next.
    #[instrument(skip(self))]
    pub fn evaluate_moves(&mut self) -> Vec<(Position, Outcome)> {
        self.nodes = 0;
        let mut scored = Vec::new();
        for cell in self.position.empty_cells() {
            let mut trial = match TrialMove::place(&mut *self.position, cell, Player::X) {
                Ok(trial) => trial,
                Err(err) => {
                    warn!(%err, %cell, "Skipping unplayable cell");
                    continue;
                }
            };
            let outcome = search(&mut *trial, false, &mut self.nodes);
            scored.push((cell, outcome));
        }
        debug!(nodes = self.nodes, moves = scored.len(), "Move analysis finished");
        scored
    }

    /// Optimal cell for X, or `None` when no cell is empty.
    ///
    /// Ties go to the first cell in row-major order reaching the best value.
    #[instrument(skip(self))]
    pub fn best_move(&mut self) -> Option<Position> {
        let mut best: Option<(Position, Outcome)> = None;
        for (cell, outcome) in self.evaluate_moves() {
            if best.is_none_or(|(_, value)| outcome > value) {
                best = Some((cell, outcome));
            }
        }
        match best {
            Some((cell, outcome)) => {
                debug!(%cell, %outcome, nodes = self.nodes, "Best move selected");
                Some(cell)
            }
            None => {
                debug!("No empty cell left");
                None
            }
        }
    }
}

/// Value of `position` with `maximizing` naming the side to move.
pub fn evaluate<P: GamePosition>(position: &mut P, maximizing: bool) -> Outcome {
    Minimax::new(position).evaluate(maximizing)
}

/// Optimal cell for X on `position`, or `None` on a full board.
pub fn best_move<P: GamePosition>(position: &mut P) -> Option<Position> {
    Minimax::new(position).best_move()
}

fn search<P: GamePosition>(position: &mut P, maximizing: bool, nodes: &mut u64) -> Outcome {
    *nodes += 1;

    if let Some(winner) = position.winner() {
        return Outcome::win_for(winner);
    }
    if position.is_terminal() {
        return Outcome::Draw;
    }

    let mark = if maximizing { Player::X } else { Player::O };
    let mut best: Option<Outcome> = None;

    for cell in position.empty_cells() {
        let mut trial = match TrialMove::place(&mut *position, cell, mark) {
            Ok(trial) => trial,
            Err(err) => {
                warn!(%err, %cell, "Skipping unplayable cell");
                continue;
            }
        };
        let outcome = search(&mut *trial, !maximizing, nodes);
        drop(trial);

        best = Some(match best {
            None => outcome,
            Some(current) if maximizing => current.max(outcome),
            Some(current) => current.min(outcome),
        });
    }

    best.unwrap_or(Outcome::Draw)
}
