// src/controller.rs
use crate::board::Square;
use crate::error::MoveError;
use crate::session::{GameSession, MoveRecord, PieceId};

/// What a cell activation did.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Selected(PieceId),
    Moved(MoveRecord),
    /// Nothing of the side to move on that cell; the selection stays empty.
    Ignored,
}

/// Two-step select-then-move handling of cell activations.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<PieceId>,
}

impl SelectionController {
    pub fn new() -> Self { Self::default() }

    pub fn selected(&self) -> Option<PieceId> { self.selected }

    pub fn clear(&mut self) { self.selected = None; }

    /// With nothing selected, picks up a piece of the side to move that has any state on
    /// `square`. With a piece selected, moves it to `square`; the selection is cleared
    /// whether or not the session accepts the move.
    pub fn activate(&mut self, game: &mut GameSession, square: Square, quantum: bool) -> Result<Activation, MoveError> {
        match self.selected.take() {
            Some(id) => game.make_move(id, square, quantum).map(Activation::Moved),
            None => match game.movable_piece_at(square) {
                Some(id) => {
                    self.selected = Some(id);
                    Ok(Activation::Selected(id))
                }
                None => Ok(Activation::Ignored),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MovePolicy;
    use crate::draw::FixedDraw;
    use crate::piece::Color;

    fn game(policy: MovePolicy) -> GameSession {
        GameSession::with_draw(10, policy, Box::new(FixedDraw::new([0])))
    }

    #[test]
    fn test_select_then_move() {
        let mut game = game(MovePolicy::Permissive);
        let mut ctl = SelectionController::new();

        let id = match ctl.activate(&mut game, Square::new(1, 9), false).unwrap() {
            Activation::Selected(id) => id,
            other => panic!("expected selection, got {:?}", other),
        };
        assert_eq!(ctl.selected(), Some(id));

        let moved = ctl.activate(&mut game, Square::new(2, 7), false).unwrap();
        assert!(matches!(moved, Activation::Moved(ref r) if r.destination == Square::new(2, 7) && !r.quantum));
        assert_eq!(ctl.selected(), None);
        assert_eq!(game.effective_position(id).unwrap(), Square::new(2, 7));
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn test_opponent_piece_not_selectable() {
        let mut game = game(MovePolicy::Permissive);
        let mut ctl = SelectionController::new();
        assert_eq!(ctl.activate(&mut game, Square::new(1, 0), false).unwrap(), Activation::Ignored);
        assert_eq!(ctl.activate(&mut game, Square::new(4, 4), false).unwrap(), Activation::Ignored);
        assert_eq!(ctl.selected(), None);
    }

    #[test]
    fn test_refused_move_clears_selection() {
        let mut game = game(MovePolicy::Strict);
        let mut ctl = SelectionController::new();
        ctl.activate(&mut game, Square::new(8, 9), false).unwrap();
        // Entangler cannot reach (0, 0)
        assert!(ctl.activate(&mut game, Square::new(0, 0), false).is_err());
        assert_eq!(ctl.selected(), None);
        assert_eq!(game.current_player(), Color::White);
    }

    #[test]
    fn test_superposed_piece_selectable_from_any_state() {
        let mut game = game(MovePolicy::Permissive);
        let mut ctl = SelectionController::new();
        ctl.activate(&mut game, Square::new(1, 9), false).unwrap();
        ctl.activate(&mut game, Square::new(3, 8), true).unwrap();
        // Black passes with its knight
        ctl.activate(&mut game, Square::new(1, 0), false).unwrap();
        ctl.activate(&mut game, Square::new(3, 1), false).unwrap();

        let sel = ctl.activate(&mut game, Square::new(3, 8), false).unwrap();
        assert!(matches!(sel, Activation::Selected(_)));
    }
}
