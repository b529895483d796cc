//! Pieces module - the fixed piece catalogue
//!
//! Every kind is an ordered list of rotation states; each state is four
//! (row, column) offsets from the piece anchor. Rotation simply advances to the
//! next state in the list, there are no wall kicks.

use crate::types::{PieceColor, PieceKind};

/// Offset of a single cell relative to the piece anchor, as (row, column)
pub type CellOffset = (i8, i8);

/// Shape of a piece in one rotation state
pub type PieceShape = [CellOffset; 4];

/// Catalogue entry for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub rotations: &'static [PieceShape],
}

impl PieceDef {
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Shape for `rotation`, reduced modulo the rotation count
    pub fn shape(&self, rotation: usize) -> PieceShape {
        self.rotations[rotation % self.rotations.len()]
    }
}

const I_ROTATIONS: [PieceShape; 2] = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    // Vertical state reaches one row above the anchor.
    [(-1, 1), (0, 1), (1, 1), (2, 1)],
];

const O_ROTATIONS: [PieceShape; 1] = [[(0, 0), (0, 1), (1, 0), (1, 1)]];

const T_ROTATIONS: [PieceShape; 4] = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
];

const L_ROTATIONS: [PieceShape; 4] = [
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
];

const J_ROTATIONS: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (0, 2), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 0), (2, 1)],
];

const S_ROTATIONS: [PieceShape; 2] = [
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

const Z_ROTATIONS: [PieceShape; 2] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

/// The process-wide catalogue, indexed by [`PieceKind::index`]
pub static CATALOGUE: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        color: PieceColor::Cyan,
        rotations: &I_ROTATIONS,
    },
    PieceDef {
        kind: PieceKind::O,
        color: PieceColor::Yellow,
        rotations: &O_ROTATIONS,
    },
    PieceDef {
        kind: PieceKind::T,
        color: PieceColor::Purple,
        rotations: &T_ROTATIONS,
    },
    PieceDef {
        kind: PieceKind::L,
        color: PieceColor::Orange,
        rotations: &L_ROTATIONS,
    },
    PieceDef {
        kind: PieceKind::J,
        color: PieceColor::Blue,
        rotations: &J_ROTATIONS,
    },
    PieceDef {
        kind: PieceKind::S,
        color: PieceColor::Green,
        rotations: &S_ROTATIONS,
    },
    PieceDef {
        kind: PieceKind::Z,
        color: PieceColor::Red,
        rotations: &Z_ROTATIONS,
    },
];

pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &CATALOGUE[kind.index()]
}

pub fn rotation_count(kind: PieceKind) -> usize {
    piece_def(kind).rotation_count()
}

/// Get the cell offsets for a piece kind and rotation index
pub fn shape(kind: PieceKind, rotation: usize) -> PieceShape {
    piece_def(kind).shape(rotation)
}

pub fn color(kind: PieceKind) -> PieceColor {
    piece_def(kind).color
}
