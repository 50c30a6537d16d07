// src/piece.rs
use crate::board::Square;
use crate::draw::{heaviest_index, WeightedDraw};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color { White, Black }

impl Color {
    pub fn opponent(&self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind { Pawn, Rook, Knight, Bishop, Queen, King, QuantumKnight, Entangler }

/// Static description of a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub code: &'static str,
    pub value: u32,
    pub symbol: char,
    /// Letter used on the text board (uppercase form).
    pub letter: char,
}

// Same order as the PieceKind variants.
static KIND_TABLE: [KindInfo; 8] = [
    KindInfo { code: "P", value: 1, symbol: '♟', letter: 'P' },
    KindInfo { code: "R", value: 5, symbol: '♜', letter: 'R' },
    KindInfo { code: "N", value: 3, symbol: '♞', letter: 'N' },
    KindInfo { code: "B", value: 3, symbol: '♝', letter: 'B' },
    KindInfo { code: "Q", value: 9, symbol: '♛', letter: 'Q' },
    KindInfo { code: "K", value: 100, symbol: '♚', letter: 'K' },
    KindInfo { code: "QN", value: 4, symbol: '♘', letter: 'H' },
    KindInfo { code: "EN", value: 6, symbol: '♖', letter: 'E' },
];

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Pawn, PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop,
        PieceKind::Queen, PieceKind::King, PieceKind::QuantumKnight, PieceKind::Entangler,
    ];

    pub fn info(&self) -> &'static KindInfo { &KIND_TABLE[*self as usize] }
    pub fn value(&self) -> u32 { self.info().value }
    pub fn symbol(&self) -> char { self.info().symbol }
    pub fn code(&self) -> &'static str { self.info().code }
}

/// One candidate position of a piece together with its weight.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq)]
pub struct QuantumState {
    pub position: Square,
    pub probability: f64,
}

/// A piece's superposition. Always holds at least one state; no operation removes the last one.
///
/// Weights are kept exactly as the moves produce them: a split halves the existing
/// entries and appends a new one at 0.5, and a collapse keeps the surviving weight as is.
/// The total is therefore not 1.0 in general.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct StateVector {
    states: Vec<QuantumState>,
}

impl StateVector {
    /// A piece known to be on `position` with certainty.
    pub fn certain(position: Square) -> Self {
        StateVector { states: vec![QuantumState { position, probability: 1.0 }] }
    }

    pub fn entries(&self) -> &[QuantumState] { &self.states }
    pub fn len(&self) -> usize { self.states.len() }
    pub fn is_superposed(&self) -> bool { self.states.len() > 1 }

    pub fn total_probability(&self) -> f64 {
        self.states.iter().map(|s| s.probability).sum()
    }

    pub fn occupies(&self, square: Square) -> bool {
        self.states.iter().any(|s| s.position == square)
    }

    /// Position of the most probable state; the earliest entry wins ties.
    pub fn effective_position(&self) -> Square {
        self.states[heaviest_index(&self.weights())].position
    }

    /// Reduces the vector to a single state drawn by weight. No-op when already collapsed.
    pub fn collapse(&mut self, draw: &mut dyn WeightedDraw) {
        if !self.is_superposed() { return; }
        let weights = self.weights();
        let chosen = draw.draw(&weights).min(self.states.len() - 1);
        let survivor = self.states[chosen];
        debug!(from = self.states.len(), x = survivor.position.x, y = survivor.position.y,
            probability = survivor.probability, "collapsed state vector");
        self.states = vec![survivor];
    }

    /// Halves every existing weight and adds `destination` at 0.5.
    pub fn split(&mut self, destination: Square) {
        for state in &mut self.states {
            state.probability *= 0.5;
        }
        self.states.push(QuantumState { position: destination, probability: 0.5 });
    }

    /// Moves the first state to `destination`, keeping its weight. Callers collapse first.
    pub fn relocate(&mut self, destination: Square) {
        self.states[0].position = destination;
    }

    fn weights(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.probability).collect()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub states: StateVector,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, position: Square) -> Self {
        Piece { color, kind, states: StateVector::certain(position) }
    }

    pub fn effective_position(&self) -> Square { self.states.effective_position() }

    pub fn collapse(&mut self, draw: &mut dyn WeightedDraw) { self.states.collapse(draw) }

    /// Board letter: uppercase for White, lowercase for Black.
    pub fn letter(&self) -> char {
        let letter = self.kind.info().letter;
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {}", self.color, self.kind, self.kind.symbol())
    }
}
