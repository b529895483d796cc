//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is empty or holds the kind of the
//! piece that locked there. Storage is a flat, row-major array.
//! Coordinates are (row, column): row 0 is the top, column 0 the left edge.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_COLUMNS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLUMNS as usize);

/// Row indices removed by a single line-clear pass
pub type ClearedRows = ArrayVec<usize, { BOARD_ROWS as usize }>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLUMNS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLUMNS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn columns(&self) -> u8 {
        BOARD_COLUMNS
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True only for an in-bounds, filled cell.
    ///
    /// Rows above the top edge are never occupied.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS as usize {
            return false;
        }
        self.row_slice(row).iter().all(|cell| cell.is_some())
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = row * BOARD_COLUMNS as usize;
        &self.cells[start..start + BOARD_COLUMNS as usize]
    }

    /// Write `kind` into every in-bounds cell of `cells`.
    ///
    /// Out-of-bounds cells are skipped individually. Returns the number of
    /// cells written.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> usize {
        cells
            .iter()
            .filter(|&&(row, col)| self.set(row, col, Some(kind)))
            .count()
    }

    /// Remove every full row in one pass and return the removed indices
    /// (bottom to top, as they were before the pass).
    ///
    /// Retained rows keep their relative order and sink to the bottom; the
    /// same number of empty rows is reinserted at the top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_COLUMNS as usize;
        let mut write_row = BOARD_ROWS as usize;

        for read_row in (0..BOARD_ROWS as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Wipe every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export as a byte grid: 0 for empty, `PieceKind::to_u8` otherwise.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            for (cell, out_cell) in self.row_slice(row).iter().zip(out_row.iter_mut()) {
                *out_cell = cell.map_or(0, |kind| kind.to_u8());
            }
        }
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` is empty; a piece letter (`I`, `O`, ...) fills the cell with that
    /// kind and any other character fills it with `I`. Missing rows are
    /// padded at the top, so only the bottom of the board needs spelling out.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_ROWS as usize).saturating_sub(rows.len());
        for (i, line) in rows.iter().take(BOARD_ROWS as usize).enumerate() {
            for (col, ch) in line.chars().take(BOARD_COLUMNS as usize).enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                board.set((offset + i) as i8, col as i8, Some(kind));
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
