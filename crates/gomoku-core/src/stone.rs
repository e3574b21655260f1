//! Player and stone color representation.

use serde::{Deserialize, Serialize};

/// The two players, and the color of the stones they place.
///
/// Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Stone {
    Black = 0,
    White = 1,
}

impl Stone {
    /// Both colors, in turn order.
    pub const ALL: [Stone; 2] = [Stone::Black, Stone::White];

    /// Returns the other player's color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Returns the index (0 for Black, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the diagram character (`x` for Black, `o` for White).
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Stone::Black => 'x',
            Stone::White => 'o',
        }
    }

    /// Parses a diagram character. Accepts either case.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(Stone::Black),
            'o' => Some(Stone::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}
