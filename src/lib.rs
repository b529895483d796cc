//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core, engine, input, term, types}`
//! and holds the host-side configuration and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
