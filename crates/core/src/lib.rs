//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the data side of the falling-block puzzle: the static
//! shape catalog, the locked-cell grid, the active piece with its collision
//! test, and the seeded shape randomizer. It has no dependencies on
//! rendering, input, or I/O.
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7 tetromino kinds, their rotation matrices and colors
//! - [`grid`]: 20x10 locked-cell board with row-full test and compaction
//! - [`piece`]: active piece movement, rotation with a single wall kick, and
//!   collision testing
//! - [`rng`]: uniform random shape selection from a seed
//!
//! The state machine that ties these together (gravity, locking, scoring,
//! game over) lives in the engine crate.
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{ActivePiece, Grid};
//! use tui_blocks_core::types::ShapeKind;
//!
//! let grid = Grid::new();
//! let mut piece = ActivePiece::spawn(ShapeKind::T);
//!
//! assert!(piece.move_left(&grid));
//! assert!(piece.rotate(&grid).applied());
//! while piece.move_down(&grid) {}
//!
//! // Resting on the floor: every cell is inside the grid.
//! assert!(piece.cells().all(|(row, _)| row >= 0 && row < 20));
//! ```

pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use tui_blocks_types as types;

pub use grid::{ClearedRows, Grid};
pub use piece::{collision, ActivePiece, Rotated, RotationIndex};
pub use rng::{ShapeRandomizer, SimpleRng};
pub use shapes::{color_of, rotation_states, Matrix};
