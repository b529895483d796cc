//! Terminal presentation layer.
//!
//! Reads engine snapshots and draws them; it never mutates the engine.
//! Rendering goes into a plain framebuffer that is flushed to the terminal
//! with crossterm, diffing against the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
