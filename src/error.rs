// src/error.rs
use crate::board::Square;
use crate::piece::Color;
use crate::session::PieceId;
use std::path::PathBuf;

/// Reasons a move is refused before it touches any piece.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece with id {0}")]
    PieceNotFound(PieceId),

    #[error("destination {0} is outside the {1}x{1} board")]
    OutOfBounds(Square, i32),

    #[error("it is {current:?}'s turn, that piece is {piece:?}")]
    NotPlayersTurn { current: Color, piece: Color },

    #[error("{0} is not a reachable destination for that piece")]
    IllegalDestination(Square),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: '{0}'. Type 'help' for commands.")]
    UnknownCommand(String),

    #[error("Missing argument for command: '{0}'")]
    MissingArgument(String),

    #[error("Invalid square '{0}'")]
    InvalidSquare(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
