//! Core game data - pure, deterministic, and testable
//!
//! This crate holds everything the engine is built from: the board, the piece
//! catalogue, the random source, and the tick-scheduling interface. It has no
//! dependencies on UI, timers, or I/O.
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with single-pass line clearing
//! - [`pieces`]: the immutable catalogue of seven piece kinds and their rotation states
//! - [`rng`]: the [`Randomizer`] interface and a seedable LCG
//! - [`clock`]: the [`Clock`] interface and [`TickSchedule`] used by hosts
//!
//! # Example
//!
//! ```
//! use blockfall_core::{pieces, Board};
//! use blockfall_types::PieceKind;
//!
//! let mut board = Board::new();
//! let cells = pieces::shape(PieceKind::O, 0).map(|(r, c)| (r + 18, c + 3));
//! assert_eq!(board.lock_cells(&cells, PieceKind::O), 4);
//! assert!(board.is_occupied(19, 4));
//! ```

pub mod board;
pub mod clock;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

pub use board::{Board, ClearedRows};
pub use clock::{Clock, TickSchedule};
pub use pieces::{piece_def, shape, PieceDef, PieceShape, CATALOGUE};
pub use rng::{Randomizer, SimpleRng};
