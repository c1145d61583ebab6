//! Line-based terminal front end.
//!
//! Reads `row col` pairs for the human, prints the board after every
//! half-move and announces the result. After each finished game the player
//! is offered another one. Bad input is answered with a message and a fresh
//! prompt; only I/O failures end a session early.

use crate::games::tictactoe::{Game, GameStatus, MoveError, Player, Position};
use derive_more::Display;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

const PROMPT: &str = "Enter row and column (0-2): ";
const INVALID_MOVE: &str = "Invalid move. Please enter row(0-2) and col(0-2).";
const MALFORMED_INPUT: &str = "Invalid input. Please enter two numbers separated by a space.";
const PLAY_AGAIN: &str = "Play again? (y/n): ";
const YES_OR_NO: &str = "Please answer y or n.";

/// A line that does not contain two numbers.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// A token is not an integer.
    #[display("'{}' is not a number", _0)]
    NotANumber(String),

    /// Anything other than exactly two tokens.
    #[display("expected 2 numbers, got {}", _0)]
    WrongCount(usize),
}

impl std::error::Error for InputError {}

/// Parses `"row col"` into raw coordinates.
///
/// Any integer is accepted, negative ones included; range checking is left
/// to [`Position::from_coords`].
pub fn parse_coords(line: &str) -> Result<(i64, i64), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongCount(tokens.len()));
    };
    let parse = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    };
    Ok((parse(*row)?, parse(*col)?))
}

/// Terminal session over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    show_analysis: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading moves from `input` and drawing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_analysis: false,
        }
    }

    /// Print the engine's move analysis before each computer move.
    pub fn with_analysis(mut self, show_analysis: bool) -> Self {
        self.show_analysis = show_analysis;
        self
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the player declines another or input runs out.
    ///
    /// Every game starts from an empty board with `first` to move. Returns
    /// the status of each game that reached its end.
    #[instrument(skip(self))]
    pub fn play_session(&mut self, first: Player) -> io::Result<Vec<GameStatus>> {
        let mut results = Vec::new();
        loop {
            let mut game = Game::new(first);
            match self.run(&mut game)? {
                Some(status) => results.push(status),
                None => break,
            }
            if !self.ask_play_again()? {
                break;
            }
        }
        info!(games = results.len(), "Session over");
        Ok(results)
    }

    /// Plays `game` to the end.
    ///
    /// Returns the final status, or `None` if input ran out first.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Game) -> io::Result<Option<GameStatus>> {
        info!(first = %game.to_move(), "Starting game");
        self.draw(game)?;

        loop {
            match game.to_move() {
                Player::O => {
                    if !self.human_turn(game)? {
                        info!("Input closed before the game ended");
                        return Ok(None);
                    }
                }
                Player::X => {
                    if !self.computer_turn(game)? {
                        writeln!(self.output, "It's a draw!")?;
                        return Ok(Some(GameStatus::Draw));
                    }
                }
            }

            self.draw(game)?;
            let status = game.status();
            if status.is_over() {
                self.announce(status)?;
                return Ok(Some(status));
            }
        }
    }

    /// Prompts until the human makes a legal move; `false` on end of input.
    fn human_turn(&mut self, game: &mut Game) -> io::Result<bool> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            let (row, col) = match parse_coords(&line) {
                Ok(coords) => coords,
                Err(err) => {
                    debug!(%err, input = line.trim(), "Malformed input");
                    writeln!(self.output, "{}", MALFORMED_INPUT)?;
                    continue;
                }
            };

            match Position::from_coords(row, col).and_then(|pos| game.play(pos)) {
                Ok(_) => return Ok(true),
                Err(err @ (MoveError::OutOfBounds { .. } | MoveError::SquareOccupied(_))) => {
                    debug!(%err, "Rejected move");
                    writeln!(self.output, "{}", INVALID_MOVE)?;
                }
                Err(err) => return Err(io::Error::other(err)),
            }
        }
    }

    /// `true` on y/yes, `false` on n/no or end of input.
    fn ask_play_again(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "{}", PLAY_AGAIN)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => {
                    debug!(answer = other, "Unrecognized answer");
                    writeln!(self.output, "{}", YES_OR_NO)?;
                }
            }
        }
    }

    /// Plays the engine's move; `false` when no square is left.
    fn computer_turn(&mut self, game: &mut Game) -> io::Result<bool> {
        if self.show_analysis {
            for (pos, outcome) in game.analysis() {
                writeln!(self.output, "  {}: {}", pos, outcome)?;
            }
        }

        match game.computer_move() {
            Ok(Some(mov)) => {
                debug!(%mov, "Computer move played");
                writeln!(self.output, "Computer plays {}", mov.position)?;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(err) => Err(io::Error::other(err)),
        }
    }

    fn draw(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.output, "{}", game.board())
    }

    fn announce(&mut self, status: GameStatus) -> io::Result<()> {
        match status {
            GameStatus::Won(player) => writeln!(self.output, "Winner is: {}", player),
            GameStatus::Draw => writeln!(self.output, "It's a draw!"),
            GameStatus::InProgress => Ok(()),
        }
    }
}
