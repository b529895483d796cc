//! Game engine - board, falling piece, score and the rules that connect them
//!
//! The engine is single-threaded and never blocks. It has no timer of its
//! own: the host calls [`Engine::tick`] whenever its schedule says a gravity
//! step is due, and the other operations in response to input. A tick runs the
//! whole lock, line-clear and spawn cascade before returning.
//!
//! # Piece lifecycle
//!
//! `Spawned -> Falling -> Locked -> (line clear) -> Spawned`. When a spawn
//! collides the board and score are wiped and the new piece keeps falling;
//! there is no halted game-over state.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{DropOutcome, Engine};
//!
//! let mut engine = Engine::new(12345);
//! engine.move_left();
//! engine.rotate();
//!
//! // Gravity until the piece locks.
//! while engine.tick() == DropOutcome::Moved {}
//!
//! assert_eq!(engine.active().row, 0);
//! assert_eq!(engine.score(), 0);
//! ```

pub mod engine;
pub mod snapshot;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use engine::{collides, ActivePiece, DropOutcome, Engine, LockEvent};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
