// src/render.rs
use crate::board::Square;
use crate::session::GameSession;
use std::fmt;

// Display trait for printing the board and every piece's superposition
impl fmt::Display for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board_size();
        let rule = format!("   +{}+", "-".repeat(size as usize * 3));

        writeln!(f, "{}", rule)?;
        for y in 0..size {
            write!(f, "{:>2} |", size - y)?;
            for x in 0..size {
                match self.piece_at(Square::new(x, y)).and_then(|id| self.piece(id)) {
                    Some(piece) => {
                        let mark = if piece.states.is_superposed() { '*' } else { ' ' };
                        write!(f, " {}{}", piece.letter(), mark)?;
                    }
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", rule)?;
        write!(f, "    ")?;
        for x in 0..size {
            write!(f, " {} ", (b'a' + x as u8) as char)?;
        }
        writeln!(f)?;

        // --- Superpositions ---
        for id in self.piece_ids() {
            let Some(piece) = self.piece(id) else { continue };
            write!(f, "{} {}:", id, piece)?;
            for state in piece.states.entries() {
                write!(f, " {} ({:.1}%)", state.position.to_notation(size), state.probability * 100.0)?;
            }
            writeln!(f)?;
        }

        write!(f, "Turn: {:?}", self.current_player())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Square;
    use crate::config::MovePolicy;
    use crate::draw::FixedDraw;
    use crate::session::GameSession;

    #[test]
    fn test_board_shows_home_rows() {
        let game = GameSession::with_draw(10, MovePolicy::Permissive, Box::new(FixedDraw::new([0])));
        let text = game.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "10 | .  h  .  .  .  .  .  .  e  . |");
        assert_eq!(lines[10], " 1 | .  H  .  .  .  .  .  .  E  . |");
        assert!(text.contains("b1 (100.0%)"));
        assert!(text.ends_with("Turn: White"));
    }

    #[test]
    fn test_superposed_piece_is_marked() {
        let mut game = GameSession::with_draw(10, MovePolicy::Permissive, Box::new(FixedDraw::new([0])));
        let id = game.piece_at(Square::new(1, 9)).unwrap();
        game.make_move(id, Square::new(2, 7), true).unwrap();
        let text = game.to_string();
        assert!(text.contains("H*"));
        assert!(text.contains("b1 (50.0%) c3 (50.0%)"));
    }
}
