//! Game session for tic-tac-toe: board, turn, status and history.

use super::action::{Move, MoveError};
use super::search::{Minimax, Outcome};
use super::types::{Board, GameStatus, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// A game between the human (O) and the computer (X).
///
/// Status transitions on every half-move from `InProgress` to
/// `InProgress`, `Won` or `Draw`; the last two accept no further moves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// Fails without touching the game if it is already over or the square
    /// is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        self.apply(Move::new(self.to_move, pos))
    }

    /// Applies an explicit move, checking that it is that player's turn.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn apply(&mut self, mov: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }

        self.board.place(mov.position, mov.player)?;
        self.history.push(mov);
        self.to_move = mov.player.opponent();
        self.status = GameStatus::of(&self.board);

        debug!(status = ?self.status, "Move applied");
        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "Game finished");
        }
        Ok(self.status)
    }

    /// Lets the engine pick and play X's move.
    ///
    /// Returns `Ok(None)` when no square is left, which the caller treats
    /// as a draw.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Option<Move>, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != Player::X {
            return Err(MoveError::WrongPlayer(Player::X));
        }

        let Some(pos) = Minimax::new(&mut self.board).best_move() else {
            return Ok(None);
        };
        let mov = Move::new(Player::X, pos);
        self.apply(mov)?;
        info!(position = %pos, "Computer moved");
        Ok(Some(mov))
    }

    /// Exact outcome of every legal X move from the current board.
    #[instrument(skip(self))]
    pub fn analysis(&mut self) -> Vec<(Position, Outcome)> {
        Minimax::new(&mut self.board).evaluate_moves()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Player::O);
        assert_eq!(game.play(Position::Center), Ok(GameStatus::InProgress));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history(), &[Move::new(Player::O, Position::Center)]);
    }

    #[test]
    fn test_occupied_square_leaves_game_unchanged() {
        let mut game = Game::new(Player::O);
        game.play(Position::Center).unwrap();
        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = Game::new(Player::O);
        assert_eq!(
            game.apply(Move::new(Player::X, Position::Center)),
            Err(MoveError::WrongPlayer(Player::X))
        );
        assert_eq!(game.computer_move(), Err(MoveError::WrongPlayer(Player::X)));
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut game = Game::new(Player::X);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.play(Position::BottomLeft), Err(MoveError::GameOver));
        assert_eq!(game.computer_move(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_computer_takes_win() {
        let mut game = Game::new(Player::X);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            game.play(pos).unwrap();
        }
        let mov = game.computer_move().unwrap();
        assert_eq!(mov, Some(Move::new(Player::X, Position::TopRight)));
        assert_eq!(game.status(), GameStatus::Won(Player::X));
    }
}
