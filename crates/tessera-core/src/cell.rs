//! The per-cell state enumeration.

use std::fmt;

/// State of a single cell.
///
/// The binary automaton only ever produces [`Dead`](Self::Dead) and
/// [`Alive`](Self::Alive). The three-state automaton adds
/// [`Stable`](Self::Stable), an absorbing state entered from `Alive` that
/// counts as alive for neighbour counting and is never left again.
///
/// The discriminants are fixed so that `current_state()` buffers can be
/// handed to a renderer (or uploaded to a GPU texture) as raw bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    /// Empty cell.
    #[default]
    Dead = 0,
    /// Living cell.
    Alive = 1,
    /// Absorbing "stabilised" cell (three-state automaton only).
    Stable = 2,
}

impl CellState {
    /// `true` for [`Alive`](Self::Alive) only.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// `true` for [`Alive`](Self::Alive) and [`Stable`](Self::Stable).
    ///
    /// This is what a renderer treats as "occupied".
    #[inline]
    pub fn is_occupied(self) -> bool {
        self != Self::Dead
    }

    /// The raw discriminant.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8). Returns `None` for unknown bytes.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Dead),
            1 => Some(Self::Alive),
            2 => Some(Self::Stable),
            _ => None,
        }
    }

    /// Single-character glyph used by the ASCII helpers (`.`, `#`, `+`).
    pub fn glyph(self) -> char {
        match self {
            Self::Dead => '.',
            Self::Alive => '#',
            Self::Stable => '+',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "dead"),
            Self::Alive => write!(f, "alive"),
            Self::Stable => write!(f, "stable"),
        }
    }
}
