//! Crossy (workspace facade crate).
//!
//! Re-exports the workspace crates as `crossy::{core,input,term,types}` and
//! adds the runner-side pieces: configuration, the game clock and the JSONL
//! event log.

pub use crossy_core as core;
pub use crossy_input as input;
pub use crossy_term as term;
pub use crossy_types as types;

pub mod clock;
pub mod config;
pub mod event_log;
