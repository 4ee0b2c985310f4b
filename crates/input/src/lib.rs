//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Holds no
//! state: every key press is forwarded once, in the order received.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
