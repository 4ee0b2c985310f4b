//! Active piece module - movement, rotation and collision testing
//!
//! A piece is positioned by the top-left corner of its rotation matrix.
//! Only prospective moves are tested; every committed move lands on a
//! collision-free position. Rows above the grid (`y < 0`) never collide with locked
//! cells since no storage exists there, but side and bottom walls always do.

use crate::shapes::{color_of, rotation_states, Matrix};
use crate::types::{Color, ShapeKind, COLS, ROWS, SPAWN_X, SPAWN_Y};
use crate::Grid;

/// Explicit bounded rotation index into a kind's rotation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationIndex {
    index: u8,
    count: u8,
}

impl RotationIndex {
    /// Initial rotation (index 0) for a kind
    pub fn initial(kind: ShapeKind) -> Self {
        Self {
            index: 0,
            count: rotation_states(kind).len() as u8,
        }
    }

    pub fn get(&self) -> usize {
        self.index as usize
    }

    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Next rotation, wrapping back to 0 after the last state
    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.count,
            ..self
        }
    }
}

/// Outcome of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotated {
    /// Rotated without moving
    InPlace,
    /// Rotated after a one-cell horizontal nudge (-1 or +1)
    Kicked(i8),
    /// Both attempts collided; nothing changed
    Rejected,
}

impl Rotated {
    pub fn applied(self) -> bool {
        !matches!(self, Rotated::Rejected)
    }
}

/// Collision test for `matrix` placed at `(x + dx, y + dy)`.
///
/// Returns true if any occupied cell leaves the side walls, passes the
/// bottom, or overlaps an occupied grid cell. Cells above the grid only
/// collide with the side walls.
pub fn collision(grid: &Grid, x: i8, y: i8, dx: i8, dy: i8, matrix: &Matrix) -> bool {
    for (r, c) in matrix.cells() {
        let new_x = x + c + dx;
        let new_y = y + r + dy;

        if new_x < 0 || new_x >= COLS as i8 || new_y >= ROWS as i8 {
            return true;
        }
        if new_y < 0 {
            continue;
        }
        if grid.is_occupied(new_y, new_x) {
            return true;
        }
    }
    false
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub rotation: RotationIndex,
    /// Column of the matrix's top-left corner
    pub x: i8,
    /// Row of the matrix's top-left corner; negative while above the grid
    pub y: i8,
    pub color: Color,
}

impl ActivePiece {
    /// Create a piece at the spawn position in its first rotation
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece at an arbitrary position in its first rotation
    pub fn at(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: RotationIndex::initial(kind),
            x,
            y,
            color: color_of(kind),
        }
    }

    /// Same piece in a given rotation state (wrapped into range)
    pub fn with_rotation(mut self, index: usize) -> Self {
        for _ in 0..index % self.rotation.count() {
            self.rotation = self.rotation.next();
        }
        self
    }

    /// Matrix for the current rotation
    pub fn matrix(&self) -> &'static Matrix {
        &rotation_states(self.kind)[self.rotation.get()]
    }

    /// Occupied cells projected to grid coordinates as `(row, col)`.
    ///
    /// Rows may be negative while the piece is above the grid.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix()
            .cells()
            .map(move |(r, c)| (self.y + r, self.x + c))
    }

    /// Collision test relative to the current position
    pub fn collides(&self, grid: &Grid, dx: i8, dy: i8, matrix: &Matrix) -> bool {
        collision(grid, self.x, self.y, dx, dy, matrix)
    }

    pub fn move_left(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, -1, 0)
    }

    pub fn move_right(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, 1, 0)
    }

    /// Move one row down. `false` means the piece cannot fall any further
    /// and must be locked by the caller.
    pub fn move_down(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, 0, 1)
    }

    /// Advance to the next rotation state with a single wall-kick attempt.
    ///
    /// If the new state collides in place, it is retried one column toward
    /// the center: `-1` when `x > COLS / 2`, otherwise `+1`.
    pub fn rotate(&mut self, grid: &Grid) -> Rotated {
        let next = self.rotation.next();
        let matrix = &rotation_states(self.kind)[next.get()];

        let kick = if self.collides(grid, 0, 0, matrix) {
            if self.x > (COLS / 2) as i8 {
                -1
            } else {
                1
            }
        } else {
            0
        };

        if kick != 0 && self.collides(grid, kick, 0, matrix) {
            return Rotated::Rejected;
        }

        self.x += kick;
        self.rotation = next;
        if kick == 0 {
            Rotated::InPlace
        } else {
            Rotated::Kicked(kick)
        }
    }

    fn try_shift(&mut self, grid: &Grid, dx: i8, dy: i8) -> bool {
        if self.collides(grid, dx, dy, self.matrix()) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }
}
