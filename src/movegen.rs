// src/movegen.rs
use crate::board::Square;
use crate::piece::{Color, Piece, PieceKind};

// Forward-facing half of the knight pattern only, written for a piece advancing towards +y.
const QUANTUM_KNIGHT_OFFSETS: &[(i32, i32)] = &[(2, 1), (1, 2), (-1, 2), (-2, 1)];

const ENTANGLER_REACH: i32 = 3;

/// Candidate destinations for a piece of `kind` standing on `origin`.
///
/// Only the quantum kinds have rules; every other kind yields nothing.
/// Off-board candidates are dropped. The Entangler lists its own square twice
/// (once per line through it), and the duplicate is kept.
pub fn possible_moves(kind: PieceKind, origin: Square, board_size: i32) -> Vec<Square> {
    generate(kind, origin, board_size, 1)
}

/// Candidate destinations for `piece` from its effective position, with the
/// offset table facing the piece's own direction of play: Black advances
/// towards +y from row 0, White towards -y from the last row.
pub fn possible_moves_for(piece: &Piece, board_size: i32) -> Vec<Square> {
    let forward = match piece.color { Color::Black => 1, Color::White => -1 };
    generate(piece.kind, piece.effective_position(), board_size, forward)
}

fn generate(kind: PieceKind, origin: Square, board_size: i32, forward: i32) -> Vec<Square> {
    let offsets: Vec<(i32, i32)> = match kind {
        PieceKind::QuantumKnight => QUANTUM_KNIGHT_OFFSETS
            .iter()
            .map(|&(dx, dy)| (dx, dy * forward))
            .collect(),
        PieceKind::Entangler => (-ENTANGLER_REACH..=ENTANGLER_REACH)
            .flat_map(|i| [(i, 0), (0, i)])
            .collect(),
        PieceKind::Pawn | PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop
        | PieceKind::Queen | PieceKind::King => Vec::new(),
    };
    // Squares far off the board can come from unchecked quantum splits; overflowing candidates are dropped.
    offsets
        .into_iter()
        .filter_map(|(dx, dy)| origin.checked_offset(dx, dy))
        .filter(|sq| sq.in_bounds(board_size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<Square>) -> Vec<Square> { v.sort(); v }

    fn squares(coords: &[(i32, i32)]) -> Vec<Square> {
        coords.iter().map(|&(x, y)| Square::new(x, y)).collect()
    }

    #[test]
    fn test_quantum_knight_center() {
        let moves = possible_moves(PieceKind::QuantumKnight, Square::new(5, 5), 10);
        assert_eq!(moves, squares(&[(7, 6), (6, 7), (4, 7), (3, 6)]));
    }

    #[test]
    fn test_unoriented_table_from_row_nine_is_empty() {
        let moves = possible_moves(PieceKind::QuantumKnight, Square::new(1, 9), 10);
        assert!(moves.is_empty(), "every +y offset leaves the board from row 9");
    }

    #[test]
    fn test_white_knight_faces_up_the_board() {
        let piece = Piece::new(Color::White, PieceKind::QuantumKnight, Square::new(1, 9));
        let moves = possible_moves_for(&piece, 10);
        assert_eq!(moves, squares(&[(3, 8), (2, 7), (0, 7)]));
    }

    #[test]
    fn test_black_knight_uses_table_as_written() {
        let piece = Piece::new(Color::Black, PieceKind::QuantumKnight, Square::new(5, 5));
        assert_eq!(possible_moves_for(&piece, 10), possible_moves(PieceKind::QuantumKnight, Square::new(5, 5), 10));
    }

    #[test]
    fn test_oriented_moves_follow_effective_position() {
        let mut piece = Piece::new(Color::Black, PieceKind::Entangler, Square::new(0, 0));
        piece.states.split(Square::new(9, 9));
        piece.states.split(Square::new(9, 9));
        // (9,9) now carries 0.25 + 0.5 across two entries; the 0.5 entry wins
        assert_eq!(piece.effective_position(), Square::new(9, 9));
        let moves = possible_moves_for(&piece, 10);
        assert!(moves.contains(&Square::new(6, 9)));
        assert!(!moves.contains(&Square::new(1, 0)));
    }

    #[test]
    fn test_quantum_knight_black_home() {
        let moves = possible_moves(PieceKind::QuantumKnight, Square::new(1, 0), 10);
        assert_eq!(moves, squares(&[(3, 1), (2, 2), (0, 2)]));
    }

    #[test]
    fn test_entangler_corner_keeps_duplicate_origin() {
        let moves = possible_moves(PieceKind::Entangler, Square::new(0, 0), 10);
        assert_eq!(
            sorted(moves),
            sorted(squares(&[(0, 0), (1, 0), (2, 0), (3, 0), (0, 0), (0, 1), (0, 2), (0, 3)]))
        );
    }

    #[test]
    fn test_entangler_center_count() {
        let moves = possible_moves(PieceKind::Entangler, Square::new(5, 5), 10);
        assert_eq!(moves.len(), 14);
        assert_eq!(moves.iter().filter(|&&s| s == Square::new(5, 5)).count(), 2);
    }

    #[test]
    fn test_classical_kinds_have_no_moves() {
        for kind in [PieceKind::Pawn, PieceKind::Rook, PieceKind::Knight,
                     PieceKind::Bishop, PieceKind::Queen, PieceKind::King] {
            assert!(possible_moves(kind, Square::new(5, 5), 10).is_empty());
        }
    }

    #[test]
    fn test_far_off_origin_yields_nothing() {
        for origin in [Square::new(i32::MAX, 0), Square::new(0, i32::MIN), Square::new(i32::MIN, i32::MAX)] {
            for kind in PieceKind::ALL {
                assert!(possible_moves(kind, origin, 10).is_empty());
            }
            let piece = Piece::new(Color::White, PieceKind::QuantumKnight, origin);
            assert!(possible_moves_for(&piece, 10).is_empty());
        }
    }

    #[test]
    fn test_all_candidates_in_bounds() {
        for size in [4, 10, 13] {
            for x in 0..size {
                for y in 0..size {
                    for kind in PieceKind::ALL {
                        for sq in possible_moves(kind, Square::new(x, y), size) {
                            assert!(sq.in_bounds(size), "{:?} from ({}, {}) gave {}", kind, x, y, sq);
                        }
                    }
                }
            }
        }
    }
}
