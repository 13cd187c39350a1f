//! Grid module - the cell matrix and row clearing.
//!
//! Dimensions are const-generic so the two deployed families (32x16 panel,
//! 16x8 badge) share one implementation. Coordinates are (row, col), signed:
//! row 0 is the top, col 0 is the left edge. Any access outside the declared
//! dimensions is an `OutOfBounds` error, never a silent clamp.

use arrayvec::ArrayVec;

use crate::types::{CellState, EngineError};

/// The playfield: `ROWS` x `COLS` matrix of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const ROWS: usize, const COLS: usize> {
    cells: [[CellState; COLS]; ROWS],
}

/// 32x16 family (desktop build, LED panel firmware).
pub type PanelGrid = Grid<32, 16>;

/// 16x8 family (small-matrix firmware).
pub type BadgeGrid = Grid<16, 8>;

impl<const ROWS: usize, const COLS: usize> Grid<ROWS, COLS> {
    /// Create a new all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; COLS]; ROWS],
        }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Bounds predicate for signed coordinates.
    pub fn contains(row: i16, col: i16) -> bool {
        row >= 0 && (row as usize) < ROWS && col >= 0 && (col as usize) < COLS
    }

    /// Get the cell at (row, col).
    pub fn get(&self, row: i16, col: i16) -> Result<CellState, EngineError> {
        if Self::contains(row, col) {
            Ok(self.cells[row as usize][col as usize])
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    /// Set the cell at (row, col).
    pub fn set(&mut self, row: i16, col: i16, state: CellState) -> Result<(), EngineError> {
        if Self::contains(row, col) {
            self.cells[row as usize][col as usize] = state;
            Ok(())
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    /// Overwrite every cell. Used for full clears and test initialization.
    pub fn fill(&mut self, state: CellState) {
        for row in &mut self.cells {
            row.fill(state);
        }
    }

    /// True iff the cell is in bounds and Frozen.
    pub fn is_frozen(&self, row: i16, col: i16) -> bool {
        self.get(row, col) == Ok(CellState::Frozen)
    }

    /// True iff the cell is in bounds and Active.
    pub fn is_active(&self, row: i16, col: i16) -> bool {
        self.get(row, col) == Ok(CellState::Active)
    }

    /// True iff every cell of the row is non-Empty.
    ///
    /// At clear time only Frozen cells exist (clearing runs after freeze),
    /// but the predicate deliberately counts any occupied cell.
    pub fn full_row(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        self.cells[row].iter().all(|cell| cell.is_occupied())
    }

    /// Clear every full row and collapse the rows above it.
    ///
    /// Rows are scanned top to bottom; each full row is removed by shifting
    /// everything above down one and emptying row 0. The row index is
    /// re-tested after a collapse because a new row has just slid into it.
    /// Returns the cleared row indices in scan order.
    pub fn clear_and_collapse(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared = ArrayVec::new();

        let mut row = 0;
        while row < ROWS {
            if self.full_row(row) {
                self.collapse_onto(row);
                cleared.push(row);
                // Do not advance: the row that slid in must be re-tested.
            } else {
                row += 1;
            }
        }

        cleared
    }

    /// Shift rows 0..row down by one onto `row`, then empty row 0.
    fn collapse_onto(&mut self, row: usize) {
        for r in (1..=row).rev() {
            self.cells[r] = self.cells[r - 1];
        }
        self.cells[0].fill(CellState::Empty);
    }

    /// Convert every Active cell to Frozen. Runs on piece lock.
    pub fn freeze_active(&mut self) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                if *cell == CellState::Active {
                    *cell = CellState::Frozen;
                }
            }
        }
    }

    /// Count cells in a given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Borrow the raw cell matrix (row-major).
    pub fn cells(&self) -> &[[CellState; COLS]; ROWS] {
        &self.cells
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Grid<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState::{Active, Empty, Frozen};

    #[test]
    fn new_grid_is_empty() {
        let grid = BadgeGrid::new();
        assert_eq!(grid.rows(), 16);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.count(Empty), 16 * 8);
    }

    #[test]
    fn get_out_of_bounds_is_an_error() {
        let grid = BadgeGrid::new();
        assert_eq!(
            grid.get(-1, 0),
            Err(EngineError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(
            grid.get(0, -1),
            Err(EngineError::OutOfBounds { row: 0, col: -1 })
        );
        assert!(grid.get(16, 0).is_err());
        assert!(grid.get(0, 8).is_err());
        assert!(grid.get(15, 7).is_ok());
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut grid = PanelGrid::new();
        grid.set(5, 10, Frozen).unwrap();
        assert_eq!(grid.get(5, 10), Ok(Frozen));
        grid.set(5, 10, Active).unwrap();
        assert_eq!(grid.get(5, 10), Ok(Active));
        assert!(grid.set(-3, 2, Frozen).is_err());
    }

    #[test]
    fn fill_overwrites_every_cell() {
        let mut grid = BadgeGrid::new();
        grid.fill(Frozen);
        assert_eq!(grid.count(Frozen), 16 * 8);
        grid.fill(Empty);
        assert_eq!(grid.count(Empty), 16 * 8);
    }

    #[test]
    fn full_row_requires_every_cell_occupied() {
        let mut grid = BadgeGrid::new();
        assert!(!grid.full_row(5));

        for col in 0..8 {
            grid.set(5, col, Frozen).unwrap();
        }
        assert!(grid.full_row(5));

        grid.set(5, 3, Empty).unwrap();
        assert!(!grid.full_row(5));

        // Out-of-range row index is simply not full.
        assert!(!grid.full_row(16));
    }

    #[test]
    fn collapse_shifts_rows_and_clears_top() {
        let mut grid = BadgeGrid::new();
        for col in 0..8 {
            grid.set(5, col, Frozen).unwrap();
        }
        grid.set(3, 0, Frozen).unwrap();
        grid.set(4, 1, Frozen).unwrap();

        let cleared = grid.clear_and_collapse();
        assert_eq!(cleared.as_slice(), &[5]);

        // Markers above the cleared row moved down by one.
        assert_eq!(grid.get(4, 0), Ok(Frozen));
        assert_eq!(grid.get(5, 1), Ok(Frozen));
        assert_eq!(grid.get(3, 0), Ok(Empty));
        assert_eq!(grid.get(0, 0), Ok(Empty));
    }

    #[test]
    fn adjacent_full_rows_clear_in_one_pass() {
        let mut grid = BadgeGrid::new();
        for row in [14, 15] {
            for col in 0..8 {
                grid.set(row, col, Frozen).unwrap();
            }
        }
        grid.set(13, 2, Frozen).unwrap();

        let cleared = grid.clear_and_collapse();
        assert_eq!(cleared.len(), 2);
        assert_eq!(grid.get(15, 2), Ok(Frozen));
        assert_eq!(grid.count(Frozen), 1);
    }

    #[test]
    fn fully_frozen_grid_collapses_to_empty() {
        let mut grid = BadgeGrid::new();
        grid.fill(Frozen);
        let cleared = grid.clear_and_collapse();
        assert_eq!(cleared.len(), 16);
        assert_eq!(grid.count(Empty), 16 * 8);
    }

    #[test]
    fn freeze_active_converts_only_active_cells() {
        let mut grid = BadgeGrid::new();
        grid.set(2, 2, Active).unwrap();
        grid.set(3, 2, Active).unwrap();
        grid.set(10, 5, Frozen).unwrap();

        grid.freeze_active();
        assert_eq!(grid.count(Active), 0);
        assert_eq!(grid.count(Frozen), 3);
    }
}
