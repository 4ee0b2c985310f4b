use crate::core::ActivePiece;
use crate::types::{Cell, Color, ShapeKind, COLS, ROWS};

/// Falling piece as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    /// Occupied cells as `(row, col)`; rows may be negative above the grid
    pub cells: [(i8, i8); 4],
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(piece: &ActivePiece) -> Self {
        let mut cells = [(0i8, 0i8); 4];
        for (slot, cell) in cells.iter_mut().zip(piece.cells()) {
            *slot = cell;
        }
        Self {
            kind: piece.kind,
            color: piece.color,
            cells,
        }
    }
}

impl ActiveSnapshot {
    /// Cells inside the visible grid
    pub fn visible_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.cells.iter().filter_map(|&(row, col)| {
            if row >= 0 && row < ROWS as i8 && col >= 0 && col < COLS as i8 {
                Some((row as u8, col as u8))
            } else {
                None
            }
        })
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; COLS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    /// Rows removed by the most recent lock
    pub last_clear: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Cell::Vacant; COLS as usize]; ROWS as usize],
            active: None,
            score: 0,
            lines: 0,
            last_clear: 0,
            game_over: false,
        }
    }
}
