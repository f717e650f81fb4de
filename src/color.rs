use std::fmt;

use serde::Serialize;

use crate::constants::{KEY_BLACK_MOVE, KEY_WHITE_MOVE};

/// Stone color, serialized as the move property key (`"B"` / `"W"`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Property key carrying a move of this color.
    pub fn move_key(self) -> &'static str {
        match self {
            Color::Black => KEY_BLACK_MOVE,
            Color::White => KEY_WHITE_MOVE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.move_key())
    }
}
