//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the input binding layer and the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, -2), the top-left of the piece matrix, partially
//!   above the visible grid
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame driver interval (~60 FPS) |
//! | `GRAVITY_INTERVAL_MS` | 1000 | Time between gravity steps |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Cell, Color, Command, ShapeKind, COLS, ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! let cell = Cell::Occupied(Color::Red);
//! assert!(cell.is_occupied());
//! assert_eq!(cell.color(), Some(Color::Red));
//!
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(COLS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Grid height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Grid width in cells (10 columns)
pub const COLS: u8 = 10;

/// Spawn column of the top-left corner of a new piece's matrix
pub const SPAWN_X: i8 = 3;

/// Spawn row of the top-left corner of a new piece's matrix (above the grid)
pub const SPAWN_Y: i8 = -2;

/// Frame driver interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval in milliseconds.
///
/// A gravity step fires once the time since the last reference point is
/// strictly greater than this value.
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row
pub const LINE_CLEAR_BONUS: u32 = 10;

/// The seven tetromino kinds
///
/// Declared in catalog order; each kind has a fixed display color:
/// - **Z**: Red
/// - **S**: Green
/// - **T**: Yellow
/// - **O**: Blue
/// - **L**: Purple
/// - **I**: Cyan
/// - **J**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Z,
    S,
    T,
    O,
    L,
    I,
    J,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::I,
        ShapeKind::J,
    ];

    /// Position of this kind in [`ShapeKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            ShapeKind::Z => 0,
            ShapeKind::S => 1,
            ShapeKind::T => 2,
            ShapeKind::O => 3,
            ShapeKind::L => 4,
            ShapeKind::I => 5,
            ShapeKind::J => 6,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "o" => Some(ShapeKind::O),
            "l" => Some(ShapeKind::L),
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::O => "o",
            ShapeKind::L => "l",
            ShapeKind::I => "i",
            ShapeKind::J => "j",
        }
    }
}

/// Display color token carried by occupied cells.
///
/// The engine never interprets it; rendering layers map it to real colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    Orange,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::Orange => "orange",
        }
    }
}

/// A cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Vacant,
    Occupied(Color),
}

impl Cell {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Cell::Vacant)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Color of an occupied cell, `None` when vacant
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Vacant => None,
            Cell::Occupied(color) => Some(*color),
        }
    }
}

/// Commands accepted from the input layer
///
/// Each command is applied immediately to the active piece; illegal moves are
/// silently rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot fall further
    MoveDown,
    /// Advance to the next rotation state (single-nudge wall kick)
    Rotate,
}

impl Command {
    /// Parse command from string (for scripted drivers)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
        }
    }
}
