//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] and detects
//! the quit chord. Terminal key repeat is passed straight through; every press
//! or repeat is one engine action.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
