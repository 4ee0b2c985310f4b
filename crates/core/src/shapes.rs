//! Shape catalog - tetromino rotation states and colors
//!
//! Every kind owns an ordered sequence of rotation states. Each state is a
//! square boolean matrix (2x2 for O, 4x4 for I, 3x3 for the rest) stored as
//! immutable static data and shared by every piece of that kind.

use crate::types::{Color, ShapeKind};

/// Largest matrix side in the catalog
pub const MAX_MATRIX: usize = 4;

/// Square occupancy matrix for one rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: u8,
    rows: [[bool; MAX_MATRIX]; MAX_MATRIX],
}

impl Matrix {
    /// Build a matrix from `N`x`N` rows of 0/1 flags
    pub const fn from_rows<const N: usize>(src: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_MATRIX);
        let mut rows = [[false; MAX_MATRIX]; MAX_MATRIX];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                rows[r][c] = src[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            rows,
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether `(row, col)` is occupied; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.rows[row][col]
    }

    /// Occupied cells as `(row, col)` offsets, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |r| {
            (0..n)
                .filter(move |&c| self.rows[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }
}

static Z_STATES: [Matrix; 4] = [
    Matrix::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
    Matrix::from_rows([[0, 0, 1], [0, 1, 1], [0, 1, 0]]),
    Matrix::from_rows([[0, 0, 0], [1, 1, 0], [0, 1, 1]]),
    Matrix::from_rows([[0, 1, 0], [1, 1, 0], [1, 0, 0]]),
];

static S_STATES: [Matrix; 4] = [
    Matrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    Matrix::from_rows([[0, 1, 0], [0, 1, 1], [0, 0, 1]]),
    Matrix::from_rows([[0, 0, 0], [0, 1, 1], [1, 1, 0]]),
    Matrix::from_rows([[1, 0, 0], [1, 1, 0], [0, 1, 0]]),
];

static T_STATES: [Matrix; 4] = [
    Matrix::from_rows([[0, 0, 0], [1, 1, 1], [0, 1, 0]]),
    Matrix::from_rows([[0, 1, 0], [1, 1, 0], [0, 1, 0]]),
    Matrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
    Matrix::from_rows([[0, 1, 0], [0, 1, 1], [0, 1, 0]]),
];

static O_STATES: [Matrix; 1] = [Matrix::from_rows([[1, 1], [1, 1]])];

static L_STATES: [Matrix; 4] = [
    Matrix::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
    Matrix::from_rows([[0, 1, 0], [0, 1, 0], [0, 1, 1]]),
    Matrix::from_rows([[0, 0, 0], [1, 1, 1], [1, 0, 0]]),
    Matrix::from_rows([[1, 1, 0], [0, 1, 0], [0, 1, 0]]),
];

static I_STATES: [Matrix; 4] = [
    Matrix::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    Matrix::from_rows([[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]),
    Matrix::from_rows([[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]]),
    Matrix::from_rows([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
];

static J_STATES: [Matrix; 4] = [
    Matrix::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
    Matrix::from_rows([[0, 1, 1], [0, 1, 0], [0, 1, 0]]),
    Matrix::from_rows([[0, 0, 0], [1, 1, 1], [0, 0, 1]]),
    Matrix::from_rows([[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
];

/// Ordered rotation states for a shape kind
pub fn rotation_states(kind: ShapeKind) -> &'static [Matrix] {
    match kind {
        ShapeKind::Z => &Z_STATES,
        ShapeKind::S => &S_STATES,
        ShapeKind::T => &T_STATES,
        ShapeKind::O => &O_STATES,
        ShapeKind::L => &L_STATES,
        ShapeKind::I => &I_STATES,
        ShapeKind::J => &J_STATES,
    }
}

/// Display color for a shape kind
pub fn color_of(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::Z => Color::Red,
        ShapeKind::S => Color::Green,
        ShapeKind::T => Color::Yellow,
        ShapeKind::O => Color::Blue,
        ShapeKind::L => Color::Purple,
        ShapeKind::I => Color::Cyan,
        ShapeKind::J => Color::Orange,
    }
}
