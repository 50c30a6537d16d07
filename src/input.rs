// src/input.rs
use crate::board::Square;
use crate::error::CommandError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // e.g. "b1c3", "b1c3~", "j10a10"
    static ref MOVE_RE: Regex = Regex::new(r"^([a-z]\d{1,2})([a-z]\d{1,2})(~?)$").expect("valid move pattern");
    static ref SQUARE_RE: Regex = Regex::new(r"^[a-z]\d{1,2}$").expect("valid square pattern");
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserInput {
    /// Select the piece on `from`, then move it to `to`.
    Move { from: Square, to: Square, quantum: bool },
    Command(Command),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A single raw cell activation, like a click on the board.
    Click(Square),
    Moves(Square),
    Board,
    State,
    History,
    Help,
    Quit,
}

fn parse_square(text: &str, board_size: i32) -> Result<Square, CommandError> {
    if !SQUARE_RE.is_match(text) {
        return Err(CommandError::InvalidSquare(text.to_string()));
    }
    Square::parse_notation(text, board_size).ok_or_else(|| CommandError::InvalidSquare(text.to_string()))
}

fn square_argument(command: &str, argument: &str, board_size: i32) -> Result<Square, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingArgument(command.to_string()));
    }
    parse_square(argument, board_size)
}

/// Parses one line of player input. Input is case-insensitive.
pub fn parse_user_input(input: &str, board_size: i32) -> Result<UserInput, CommandError> {
    let lower_input = input.trim().to_lowercase();

    let mut parts = lower_input.splitn(2, char::is_whitespace);
    let command_word = parts.next().unwrap_or("");
    let argument = parts.next().unwrap_or("").trim();

    let command = match command_word {
        "click" | "select" => Command::Click(square_argument(command_word, argument, board_size)?),
        "moves" => Command::Moves(square_argument(command_word, argument, board_size)?),
        "board" | "show" => Command::Board,
        "state" => Command::State,
        "history" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            return match MOVE_RE.captures(&lower_input) {
                Some(caps) => Ok(UserInput::Move {
                    from: parse_square(&caps[1], board_size)?,
                    to: parse_square(&caps[2], board_size)?,
                    quantum: !caps[3].is_empty(),
                }),
                None => Err(CommandError::UnknownCommand(input.trim().to_string())),
            };
        }
    };
    Ok(UserInput::Command(command))
}
