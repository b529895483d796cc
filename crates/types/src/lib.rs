//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! used by the engine, the terminal layer, and tests alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn anchor**: row 0, column 3
//!
//! Coordinates are always written `(row, column)`.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_COLUMNS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLUMNS, 10);
//! ```

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLUMNS: u8 = 10;

/// Anchor (row, column) of every freshly spawned piece
pub const SPAWN_ANCHOR: (i8, i8) = (0, 3);

/// Score awarded for each cleared row
pub const LINE_CLEAR_BONUS: u32 = 100;

/// Default interval between automatic gravity ticks (500ms)
pub const DEFAULT_TICK_MS: u32 = 500;

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked by a piece of that kind
pub type Cell = Option<PieceKind>;

/// The seven piece kinds, in catalogue order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalogue order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Encode as a non-zero grid byte (1..=7); 0 is reserved for empty.
    pub fn to_u8(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::to_u8`].
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1..=7 => Some(Self::ALL[(v - 1) as usize]),
            _ => None,
        }
    }
}

/// Display colour attached to each piece kind in the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Orange,
    Blue,
    Green,
    Red,
}

/// Engine operations a host can trigger
///
/// Timer ticks go through [`GameAction::Drop`] as well; the engine does not
/// distinguish the two sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Advance to the next rotation state
    Rotate,
    /// One row of gravity; locks when blocked
    Drop,
    /// Fall to the resting row and lock
    HardDrop,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "drop" => Some(GameAction::Drop),
            "harddrop" => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Drop => "drop",
            GameAction::HardDrop => "hardDrop",
        }
    }
}
