//! Scripted terminal sessions.

use perfect_tictactoe::{Console, Game, GameStatus, Player, Position};
use std::io::Cursor;

fn session(first: Player, script: &str) -> (Vec<GameStatus>, String) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let results = console.play_session(first).expect("in-memory I/O never fails");
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (results, output)
}

fn play(first: Player, script: &str, analysis: bool) -> (Option<GameStatus>, Game, String) {
    let mut game = Game::new(first);
    let mut console =
        Console::new(Cursor::new(script.to_string()), Vec::new()).with_analysis(analysis);
    let status = console.run(&mut game).expect("in-memory I/O never fails");
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (status, game, output)
}

/// Every cell in row-major order; taken cells are rejected and re-prompted.
fn every_cell() -> String {
    (0..3)
        .flat_map(|row| (0..3).map(move |col| format!("{row} {col}\n")))
        .collect()
}

#[test]
fn test_computer_never_loses_full_game() {
    let (status, game, output) = play(Player::O, &every_cell(), false);

    let status = status.expect("game reaches the end");
    assert!(matches!(status, GameStatus::Draw | GameStatus::Won(Player::X)));
    assert_eq!(game.status(), status);
    assert!(!output.contains("Winner is: O"));
    assert!(output.contains("Winner is: X") || output.contains("It's a draw!"));
}

#[test]
fn test_malformed_and_out_of_range_input_reprompts() {
    let (status, game, output) = play(Player::O, "hello\n1\n5 5\n1 1\n", false);

    assert_eq!(status, None);
    assert_eq!(
        output
            .matches("Invalid input. Please enter two numbers separated by a space.")
            .count(),
        2
    );
    assert_eq!(
        output
            .matches("Invalid move. Please enter row(0-2) and col(0-2).")
            .count(),
        1
    );
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[0].position, Position::Center);
    assert!(output.contains("Computer plays"));
}

#[test]
fn test_occupied_cell_reprompts() {
    let (_, game, output) = play(Player::O, "1 1\n1 1\n", false);

    assert!(output.contains("Invalid move. Please enter row(0-2) and col(0-2)."));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_board_printed_after_each_half_move() {
    let (_, game, output) = play(Player::O, "0 0\n", false);

    // Initial board plus one per half-move.
    assert_eq!(game.history().len(), 2);
    assert_eq!(output.matches("---------\n").count(), 2 * 3);
    assert!(output.starts_with("  |   |  \n---------\n"));
    assert!(output.contains("O | "));
}

#[test]
fn test_computer_first_with_analysis() {
    let (status, game, output) = play(Player::X, "", true);

    assert_eq!(status, None);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].position, Position::TopLeft);
    assert_eq!(output.matches(": draw").count(), 9);
    assert!(output.contains("Computer plays Top-left (0, 0)"));
}

#[test]
fn test_negative_coords_are_invalid_move() {
    let (status, game, output) = play(Player::O, "-1 0\n0 -2\n", false);

    assert_eq!(status, None);
    assert!(game.history().is_empty());
    assert_eq!(
        output
            .matches("Invalid move. Please enter row(0-2) and col(0-2).")
            .count(),
        2
    );
    assert!(!output.contains("Invalid input."));
}

#[test]
fn test_session_plays_two_games() {
    // Leftover cells after a game ends are answered at the play-again prompt.
    let script = format!("{}y\n{}n\n", every_cell(), every_cell());
    let (results, output) = session(Player::O, &script);

    assert_eq!(results.len(), 2);
    assert!(
        results
            .iter()
            .all(|status| matches!(status, GameStatus::Draw | GameStatus::Won(Player::X)))
    );
    assert!(output.matches("Play again? (y/n): ").count() >= 2);
    // Each game opens on an empty board.
    assert_eq!(output.matches("  |   |  \n---------\n  |   |  \n").count(), 2);
}

#[test]
fn test_session_ends_at_end_of_input() {
    let (results, output) = session(Player::X, "");

    assert!(results.is_empty());
    assert!(output.contains("Computer plays Top-left (0, 0)"));
    assert!(!output.contains("Play again?"));
}

#[test]
fn test_play_again_prompt_reprompts_and_declines() {
    let script = format!("{}maybe\nno\n", every_cell());
    let (results, output) = session(Player::O, &script);

    assert_eq!(results.len(), 1);
    assert!(output.contains("Please answer y or n."));
}
