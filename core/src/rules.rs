use serde::{Deserialize, Serialize};

use crate::*;

const CAT: Cell = Cell::Occupied(Piece::Cat);
const DOG: Cell = Cell::Occupied(Piece::Dog);

/// Board that reveals the hidden overlay when a move produces it exactly.
pub const EASTER_EGG_PATTERN: Board =
    Board::from_cells([CAT, DOG, CAT, DOG, DOG, DOG, CAT, Cell::Empty, CAT]);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won(Piece),
    Draw,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn winner(self) -> Option<Piece> {
        match self {
            Self::Won(piece) => Some(piece),
            Self::InProgress | Self::Draw => None,
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// First line in [`LINES`] whose three cells hold the same piece.
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let first = board[a];
        !first.is_empty() && first == board[b] && first == board[c]
    })
}

pub fn winner_of(board: &Board) -> Option<Piece> {
    winning_line(board).and_then(|[a, ..]| board[a].piece())
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    winner_of(board).is_none() && board.is_full()
}

pub fn outcome_of(board: &Board) -> Outcome {
    match winner_of(board) {
        Some(piece) => Outcome::Won(piece),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Exact cell-by-cell equality, empty cells included.
pub fn matches_pattern(board: &Board, pattern: &Board) -> bool {
    board.cells() == pattern.cells()
}
