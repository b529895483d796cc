use crate::engine::ActivePiece;
use crate::types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS};

/// Read-only copy of the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub row: i8,
    pub col: i8,
    /// Absolute (row, column) cells; rows may be negative
    pub cells: [(i8, i8); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation as u8,
            row: value.row,
            col: value.col,
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame
///
/// Board cells use `PieceKind::to_u8` (0 = empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub games_reset: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Kind locked at (row, col), if any
    pub fn cell(&self, row: usize, col: usize) -> Option<PieceKind> {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|&v| PieceKind::from_u8(v))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            active: None,
            score: 0,
            lines: 0,
            games_reset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let snap = GameSnapshot::default();
        assert!(snap.board.iter().flatten().all(|&v| v == 0));
        assert!(snap.active.is_none());
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn cell_decodes_kind() {
        let mut snap = GameSnapshot::default();
        snap.board[19][2] = PieceKind::J.to_u8();

        assert_eq!(snap.cell(19, 2), Some(PieceKind::J));
        assert_eq!(snap.cell(19, 3), None);
        assert_eq!(snap.cell(25, 0), None);

        snap.clear();
        assert_eq!(snap.cell(19, 2), None);
    }

    #[test]
    fn active_snapshot_carries_absolute_cells() {
        let piece = ActivePiece {
            kind: PieceKind::I,
            rotation: 1,
            row: 0,
            col: 3,
        };
        let snap = ActiveSnapshot::from(piece);
        assert_eq!(snap.cells, [(-1, 4), (0, 4), (1, 4), (2, 4)]);
        assert_eq!(snap.rotation, 1);
    }
}
