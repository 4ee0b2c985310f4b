//! Terminal rendering for the block puzzle.
//!
//! Renders engine snapshots into a framebuffer of styled characters that a
//! terminal backend flushes. Nothing here makes game decisions: the view
//! only reads a [`GameSnapshot`](tui_blocks_engine::GameSnapshot).
//!
//! - [`fb`]: framebuffer and style types
//! - [`game_view`]: snapshot → framebuffer (pure, unit-testable)
//! - [`renderer`]: raw mode, alternate screen and diff flushing via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{palette, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
