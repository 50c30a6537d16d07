// src/board.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BOARD_SIZE: i32 = 10;
pub const MIN_BOARD_SIZE: i32 = 4;
pub const MAX_BOARD_SIZE: i32 = 26; // one file letter per column

/// A cell on the square board. `x` is the column, `y` the row; row 0 is Black's home row.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const fn new(x: i32, y: i32) -> Self { Square { x, y } }

    /// `None` when either coordinate would overflow.
    pub fn checked_offset(&self, dx: i32, dy: i32) -> Option<Square> {
        Some(Square::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    pub fn in_bounds(&self, board_size: i32) -> bool {
        (0..board_size).contains(&self.x) && (0..board_size).contains(&self.y)
    }

    /// Terminal notation: file letter for the column, rank counted up from White's side.
    /// Returns "??" for squares that have no notation on this board.
    pub fn to_notation(&self, board_size: i32) -> String {
        if !self.in_bounds(board_size) { return "??".to_string(); }
        let file_char = (b'a' + self.x as u8) as char;
        format!("{}{}", file_char, board_size - self.y)
    }

    pub fn parse_notation(s: &str, board_size: i32) -> Option<Square> {
        let mut chars = s.trim().chars();
        let file_char = chars.next()?.to_ascii_lowercase();
        if !file_char.is_ascii_lowercase() { return None; }
        let rank: i32 = chars.as_str().parse().ok()?;
        let square = Square::new((file_char as u8 - b'a') as i32, board_size.checked_sub(rank)?);
        square.in_bounds(board_size).then_some(square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
