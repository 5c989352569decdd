use core::fmt;
use serde::{Deserialize, Serialize};

/// The two themed markers. Cat always opens the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Cat,
    Dog,
}

impl Piece {
    /// Piece that places the next mark after `ply` moves have been played.
    pub const fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Self::Cat } else { Self::Dog }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::Cat => Self::Dog,
            Self::Dog => Self::Cat,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Dog => "Dog",
        }
    }

    /// Lowercase key, used for CSS classes and the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of a single board cell.
///
/// Serialized as `null` or the piece key, the same shape a JS front end
/// keeps in its `squares` array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Piece>", into = "Option<Piece>")]
pub enum Cell {
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn piece(self) -> Option<Piece> {
        match self {
            Self::Empty => None,
            Self::Occupied(piece) => Some(piece),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Self::Empty, Self::Occupied)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Self::Occupied(piece)
    }
}

impl From<Cell> for Option<Piece> {
    fn from(cell: Cell) -> Self {
        cell.piece()
    }
}
