// src/session.rs
use crate::board::Square;
use crate::config::{GameConfig, MovePolicy};
use crate::draw::{RngDraw, WeightedDraw};
use crate::error::MoveError;
use crate::executor::{move_classical, move_quantum};
use crate::movegen::possible_moves_for;
use crate::piece::{Color, Piece, PieceKind, QuantumState};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Handle to a piece, valid for the lifetime of the session that issued it.
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PieceId(usize);

impl PieceId {
    pub fn index(&self) -> usize { self.0 }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One applied move, as kept in the session history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveRecord {
    /// 1-based count of moves made in the session.
    pub ply: u32,
    /// Side whose turn it was, not necessarily the piece's colour.
    pub player: Color,
    pub piece: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub destination: Square,
    pub quantum: bool,
}

/// Read-only view of a session for serialization.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub board_size: i32,
    pub current_player: Color,
    pub pieces: &'a [Piece],
    pub history: &'a [MoveRecord],
}

pub struct GameSession {
    board_size: i32,
    pieces: Vec<Piece>,
    current_player: Color,
    policy: MovePolicy,
    history: Vec<MoveRecord>,
    draw: Box<dyn WeightedDraw>,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board_size", &self.board_size)
            .field("pieces", &self.pieces)
            .field("current_player", &self.current_player)
            .field("policy", &self.policy)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Starts a session from an already validated config.
    pub fn new(config: &GameConfig) -> Self {
        let draw: Box<dyn WeightedDraw> = match config.seed {
            Some(seed) => Box::new(RngDraw::seeded(seed)),
            None => Box::new(RngDraw::from_entropy()),
        };
        Self::with_draw(config.board_size, config.policy, draw)
    }

    /// Starts a session with an explicit collapse source.
    pub fn with_draw(board_size: i32, policy: MovePolicy, draw: Box<dyn WeightedDraw>) -> Self {
        let mut pieces = Vec::with_capacity(4);
        for color in [Color::White, Color::Black] {
            let row = match color { Color::Black => 0, Color::White => board_size - 1 };
            pieces.push(Piece::new(color, PieceKind::QuantumKnight, Square::new(1, row)));
            pieces.push(Piece::new(color, PieceKind::Entangler, Square::new(board_size - 2, row)));
        }
        info!(board_size, ?policy, "new game session");
        GameSession {
            board_size,
            pieces,
            current_player: Color::White,
            policy,
            history: Vec::new(),
            draw,
        }
    }

    pub fn board_size(&self) -> i32 { self.board_size }
    pub fn current_player(&self) -> Color { self.current_player }
    pub fn policy(&self) -> MovePolicy { self.policy }
    pub fn history(&self) -> &[MoveRecord] { &self.history }
    pub fn pieces(&self) -> &[Piece] { &self.pieces }

    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> {
        (0..self.pieces.len()).map(PieceId)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> { self.pieces.get(id.0) }

    fn lookup(&self, id: PieceId) -> Result<&Piece, MoveError> {
        self.piece(id).ok_or(MoveError::PieceNotFound(id))
    }

    pub fn effective_position(&self, id: PieceId) -> Result<Square, MoveError> {
        Ok(self.lookup(id)?.effective_position())
    }

    pub fn state_vector(&self, id: PieceId) -> Result<&[QuantumState], MoveError> {
        Ok(self.lookup(id)?.states.entries())
    }

    /// First piece, in session order, with any state on `square`.
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.piece_ids().find(|&id| self.pieces[id.0].states.occupies(square))
    }

    /// First piece of the side to move with any state on `square`.
    pub fn movable_piece_at(&self, square: Square) -> Option<PieceId> {
        self.piece_ids().find(|&id| {
            let piece = &self.pieces[id.0];
            piece.color == self.current_player && piece.states.occupies(square)
        })
    }

    /// Candidate destinations from the piece's effective position.
    ///
    /// The QuantumKnight table is oriented by colour: Black gets the offsets as written
    /// (towards +y), White gets them with dy mirrored. A White knight on (5,5) therefore
    /// reaches (7,4), (6,3), (4,3), (3,4) rather than [`crate::movegen::possible_moves`]'s set.
    pub fn possible_moves(&self, id: PieceId) -> Result<Vec<Square>, MoveError> {
        Ok(possible_moves_for(self.lookup(id)?, self.board_size))
    }

    /// Applies a move and passes the turn. A refused move leaves the session unchanged.
    pub fn make_move(&mut self, id: PieceId, destination: Square, is_quantum: bool) -> Result<MoveRecord, MoveError> {
        let piece = self.lookup(id)?;
        if !destination.in_bounds(self.board_size) {
            return Err(MoveError::OutOfBounds(destination, self.board_size));
        }
        if self.policy == MovePolicy::Strict {
            if piece.color != self.current_player {
                return Err(MoveError::NotPlayersTurn { current: self.current_player, piece: piece.color });
            }
            if !possible_moves_for(piece, self.board_size).contains(&destination) {
                return Err(MoveError::IllegalDestination(destination));
            }
        }

        let piece = &mut self.pieces[id.0];
        if is_quantum {
            move_quantum(piece, destination);
        } else {
            move_classical(piece, destination, self.draw.as_mut());
        }

        let record = MoveRecord {
            ply: self.history.len() as u32 + 1,
            player: self.current_player,
            piece: id,
            color: piece.color,
            kind: piece.kind,
            destination,
            quantum: is_quantum,
        };
        debug!(ply = record.ply, piece = %id, kind = ?record.kind, x = destination.x, y = destination.y,
            quantum = is_quantum, states = piece.states.len(), "move applied");

        self.history.push(record.clone());
        self.current_player = self.current_player.opponent();
        Ok(record)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            board_size: self.board_size,
            current_player: self.current_player,
            pieces: &self.pieces,
            history: &self.history,
        }
    }
}
