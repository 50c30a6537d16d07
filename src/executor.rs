// src/executor.rs
//! Applies a chosen destination to a piece. Nothing here validates the
//! destination; the session does that before calling in.

use crate::board::Square;
use crate::draw::WeightedDraw;
use crate::piece::Piece;

/// Resolves any superposition, then moves the surviving state to `destination`.
/// The surviving weight is left untouched.
pub fn move_classical(piece: &mut Piece, destination: Square, draw: &mut dyn WeightedDraw) {
    piece.states.collapse(draw);
    piece.states.relocate(destination);
}

/// Splits the piece: every existing weight is halved and `destination` joins at 0.5.
pub fn move_quantum(piece: &mut Piece, destination: Square) {
    piece.states.split(destination);
}
