//! Grid module - the locked-cell board
//!
//! The grid is a 20x10 array of cells, each vacant or occupied by a color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 the left edge.
//! Rows above the visible area (negative rows) are never stored.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, COLS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (ROWS as usize) * (COLS as usize);

/// Row indices removed by a single clear pass, bottom to top
pub type ClearedRows = ArrayVec<usize, { ROWS as usize }>;

/// The locked-cell grid - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Vacant; GRID_SIZE],
        }
    }

    /// Calculate flat index from signed coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= ROWS as i8 || col < 0 || col >= COLS as i8 {
            return None;
        }
        Some((row as usize) * (COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        ROWS
    }

    pub fn cols(&self) -> u8 {
        COLS
    }

    /// Read the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`. Callers bounds-check first.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < ROWS as usize && col < COLS as usize,
            "grid access out of range: ({row}, {col})"
        );
        self.cells[row * COLS as usize + col]
    }

    /// Bounds-checked read; `None` outside the grid (including negative rows)
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether `(row, col)` is inside the grid and occupied
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Cell::Occupied(_)))
    }

    /// Write an occupied cell.
    ///
    /// # Panics
    ///
    /// Panics outside the grid. Cells above the grid signal overflow and must
    /// never reach this call.
    pub fn lock(&mut self, row: usize, col: usize, color: Color) {
        assert!(
            row < ROWS as usize && col < COLS as usize,
            "lock out of range: ({row}, {col})"
        );
        self.cells[row * COLS as usize + col] = Cell::Occupied(color);
    }

    /// Check if a row is completely occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS as usize {
            return false;
        }
        self.row_slice(row).iter().all(Cell::is_occupied)
    }

    /// Remove `row` and shift every row above it down by one.
    ///
    /// Row `r` receives the contents of row `r - 1` for `r` from `row` down to
    /// 1, then row 0 becomes vacant.
    pub fn clear_and_compact(&mut self, row: usize) {
        if row >= ROWS as usize {
            return;
        }

        let width = COLS as usize;
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }
        self.cells[..width].fill(Cell::Vacant);
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted bottom to top).
    ///
    /// Equivalent to removing every full row at once and inserting the same
    /// number of vacant rows at the top; the relative order of the surviving
    /// rows is preserved. Two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = COLS as usize;
        let mut write_row = ROWS as usize;

        for read_row in (0..ROWS as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(Cell::Vacant);
        cleared
    }

    /// Copy of the grid as a row-major 2D array
    pub fn to_rows(&self) -> [[Cell; COLS as usize]; ROWS as usize] {
        let mut out = [[Cell::Vacant; COLS as usize]; ROWS as usize];
        self.write_rows(&mut out);
        out
    }

    /// Write the grid into an existing 2D array (allocation-free)
    pub fn write_rows(&self, out: &mut [[Cell; COLS as usize]; ROWS as usize]) {
        for (row, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(self.row_slice(row));
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Set every cell to vacant
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Vacant);
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = row * COLS as usize;
        &self.cells[start..start + COLS as usize]
    }

    /// Create from a 2D vector for testing
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), ROWS as usize);
        assert!(cells_2d.iter().all(|row| row.len() == COLS as usize));

        let mut grid = Self::new();
        for (r, row) in cells_2d.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grid.cells[r * COLS as usize + c] = *cell;
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, row: usize, color: Color) {
        for col in 0..COLS as usize {
            grid.lock(row, col, color);
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 9), Some(9));
        assert_eq!(Grid::index(1, 0), Some(10));
        assert_eq!(Grid::index(19, 9), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(0, 10), None);
        assert_eq!(Grid::index(20, 0), None);
    }

    #[test]
    fn test_lock_writes_flat_array() {
        let mut grid = Grid::new();
        grid.lock(10, 5, Color::Yellow);
        assert_eq!(grid.cells[10 * 10 + 5], Cell::Occupied(Color::Yellow));
        assert_eq!(grid.cell_at(10, 5), Cell::Occupied(Color::Yellow));
    }

    #[test]
    #[should_panic(expected = "grid access out of range")]
    fn test_cell_at_out_of_range_panics() {
        Grid::new().cell_at(20, 0);
    }

    #[test]
    fn test_single_compaction_matches_full_row_pass() {
        let mut cells = vec![vec![Cell::Vacant; 10]; 20];
        cells[3][2] = Cell::Occupied(Color::Red);
        cells[17][7] = Cell::Occupied(Color::Blue);
        let mut a = Grid::from_cells(cells);
        fill_row(&mut a, 18, Color::Cyan);
        fill_row(&mut a, 19, Color::Green);
        let mut b = a.clone();

        // Top-to-bottom incremental compaction.
        for row in 0..ROWS as usize {
            if a.is_row_full(row) {
                a.clear_and_compact(row);
            }
        }
        let cleared = b.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19, 18]);
        assert_eq!(a, b);
        assert_eq!(b.cell_at(5, 2), Cell::Occupied(Color::Red));
        assert_eq!(b.cell_at(19, 7), Cell::Occupied(Color::Blue));
    }

    #[test]
    fn test_reset_vacates_everything() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 0, Color::Red);
        grid.reset();
        assert_eq!(grid.occupied_count(), 0);
    }
}
