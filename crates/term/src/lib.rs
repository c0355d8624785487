//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout libraries and renders into a simple framebuffer that is
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map the pixel-space board onto terminal cells with a fixed aspect ratio
//! - Write only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use crossy_core as core;
pub use crossy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
