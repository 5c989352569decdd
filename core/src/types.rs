/// Index of a cell on the board, row-major, in `0..BOARD_CELLS`.
pub type CellIndex = u8;

/// Cells per row and per column.
pub const BOARD_SIDE: CellIndex = 3;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// Three cell indices that win when they all hold the same piece.
pub type Line = [CellIndex; 3];

/// Every winning line, in the order they are checked: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Converts `(row, col)` into a [`CellIndex`].
pub const fn cell_index(row: CellIndex, col: CellIndex) -> CellIndex {
    row * BOARD_SIDE + col
}

/// Converts a [`CellIndex`] into `(row, col)`.
pub const fn row_col(index: CellIndex) -> (CellIndex, CellIndex) {
    (index / BOARD_SIDE, index % BOARD_SIDE)
}

pub const fn is_valid_index(index: CellIndex) -> bool {
    (index as usize) < BOARD_CELLS
}
