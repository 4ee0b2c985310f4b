//! Game-state engine - gravity, locking, line clears, scoring, game over
//!
//! The engine owns the grid, the falling piece and the score as one
//! aggregate; every mutation goes through its methods.
//!
//! Two event sources drive it:
//!
//! - **Commands** ([`Engine::submit`]): `MoveLeft`, `MoveRight`, `MoveDown`,
//!   `Rotate`, applied immediately in the order received
//! - **Ticks** ([`Engine::on_tick`]): elapsed milliseconds from a frame or
//!   timer driver; the engine decides when a gravity step fires
//!
//! Renderers read [`Engine::snapshot`] (or the individual query methods) and
//! never mutate.
//!
//! # Example
//!
//! ```
//! use tui_blocks_engine::Engine;
//! use tui_blocks_engine::types::Command;
//!
//! let mut engine = Engine::new(12345);
//!
//! engine.submit(Command::MoveRight);
//! engine.submit(Command::Rotate);
//!
//! // 1000ms is not enough; gravity needs the interval to be exceeded.
//! assert!(!engine.on_tick(1000));
//! assert!(engine.on_tick(16));
//!
//! assert_eq!(engine.current_score(), 0);
//! assert!(!engine.is_game_over());
//! ```

pub mod config;
pub mod engine;
pub mod snapshot;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use config::EngineConfig;
pub use engine::{Engine, LockEvent, Phase};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
