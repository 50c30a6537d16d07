//! # Quantum Chess
//!
//! A turn-based board game on a 10x10 grid where pieces can stand on several
//! squares at once, each with a weight, until a classical move forces them to
//! collapse onto one.
//!
//! ## Modules
//!
//! - [`piece`]: piece kinds, state vectors, collapse
//! - [`draw`]: pluggable weighted random source used by collapse
//! - [`movegen`]: candidate destinations per piece kind
//! - [`executor`]: classical and quantum-split moves
//! - [`session`]: pieces, turn, history and move validation
//! - [`controller`]: select-then-move handling of cell activations
//! - [`input`], [`render`]: terminal front end helpers
//! - [`config`], [`error`]

pub mod board;
pub mod config;
pub mod controller;
pub mod draw;
pub mod error;
pub mod executor;
pub mod input;
pub mod movegen;
pub mod piece;
pub mod render;
pub mod session;

pub use board::Square;
pub use config::{GameConfig, MovePolicy};
pub use error::{CommandError, ConfigError, MoveError};
pub use piece::{Color, Piece, PieceKind, QuantumState};
pub use session::{GameSession, MoveRecord, PieceId};
