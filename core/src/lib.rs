#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use rules::*;
pub use session::*;
pub use store::*;
pub use types::*;

mod cell;
mod error;
mod rules;
mod session;
mod store;
mod types;

/// Immutable snapshot of the nine cells, row-major.
///
/// Placing a piece never mutates a board: [`Board::with_piece`] returns a new value, so every
/// snapshot kept in history stays valid on its own.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Cell; BOARD_CELLS]);

impl Board {
    pub const EMPTY: Self = Self([Cell::Empty; BOARD_CELLS]);

    pub const fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self(cells)
    }

    pub const fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.0
    }

    pub fn validate_index(index: CellIndex) -> Result<CellIndex> {
        if is_valid_index(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn cell(&self, index: CellIndex) -> Result<Cell> {
        let index = Self::validate_index(index)?;
        Ok(self[index])
    }

    /// Copy of this board with `piece` placed on the empty cell at `index`.
    pub fn with_piece(self, index: CellIndex, piece: Piece) -> Result<Self> {
        if !self.cell(index)?.is_empty() {
            return Err(GameError::CellOccupied);
        }

        let mut cells = self.0;
        cells[usize::from(index)] = Cell::Occupied(piece);
        Ok(Self(cells))
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        (0..).zip(self.0.iter().copied())
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.0[usize::from(index)]
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = GameError;

    fn try_from(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; BOARD_CELLS] = cells
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..BOARD_SIDE {
                let symbol = match self[cell_index(row, col)] {
                    Cell::Empty => '.',
                    Cell::Occupied(Piece::Cat) => 'C',
                    Cell::Occupied(Piece::Dog) => 'D',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won(Piece),
    Drawn,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    NoChange,
    Moved,
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

/// Whether handling an intent changed anything the renderer shows.
pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for MoveOutcome {
    fn has_update(self) -> bool {
        MoveOutcome::has_update(self)
    }
}

impl HasUpdate for JumpOutcome {
    fn has_update(self) -> bool {
        JumpOutcome::has_update(self)
    }
}

impl<T: HasUpdate, E> HasUpdate for core::result::Result<T, E> {
    fn has_update(self) -> bool {
        self.map_or(false, HasUpdate::has_update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn with_piece_leaves_original_untouched() {
        let empty = Board::EMPTY;
        let next = empty.with_piece(4, Piece::Cat).unwrap();

        assert_eq!(empty, Board::default());
        assert_eq!(next[4], Cell::Occupied(Piece::Cat));
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn with_piece_rejects_occupied_and_out_of_range_cells() {
        let board = Board::EMPTY.with_piece(0, Piece::Cat).unwrap();

        assert_eq!(board.with_piece(0, Piece::Dog), Err(GameError::CellOccupied));
        assert_eq!(board.with_piece(9, Piece::Dog), Err(GameError::InvalidCell));
        assert_eq!(board.cell(200), Err(GameError::InvalidCell));
    }

    #[test]
    fn try_from_slice_requires_nine_cells() {
        let short = vec![Cell::Empty; 8];
        let exact = vec![Cell::Occupied(Piece::Dog); 9];

        assert_eq!(
            Board::try_from(short.as_slice()),
            Err(GameError::InvalidBoardShape)
        );
        assert!(Board::try_from(exact.as_slice()).unwrap().is_full());
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_board_panics() {
        let _cell: Cell = Board::EMPTY[9];
    }

    #[test]
    fn display_lists_rows() {
        let board = Board::EMPTY
            .with_piece(0, Piece::Cat)
            .and_then(|board| board.with_piece(4, Piece::Dog))
            .unwrap();

        assert_eq!(board.to_string(), "C../.D./...");
    }

    #[test]
    fn board_serializes_as_flat_squares_array() {
        let board = Board::EMPTY.with_piece(2, Piece::Cat).unwrap();
        let json = serde_json::to_string(&board).unwrap();

        assert_eq!(json, r#"[null,null,"cat",null,null,null,null,null,null]"#);
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn has_update_propagates_through_results() {
        let ok: Result<MoveOutcome> = Ok(MoveOutcome::Placed);
        let err: Result<MoveOutcome> = Err(GameError::CellOccupied);

        assert!(ok.has_update());
        assert!(!err.has_update());
        assert!(!Ok::<_, GameError>(JumpOutcome::NoChange).has_update());
    }
}
