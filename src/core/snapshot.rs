//! Board snapshot handed to renderers.
//!
//! The engine mutates only its privately owned grid and publishes a complete
//! snapshot at each tick boundary, so a display refresh running at its own
//! rate can never observe a half-applied freeze, collapse, rotation, or
//! translation. This takes the place of the firmware pattern of disabling
//! the refresh interrupt around every grid write.

use crate::core::grid::Grid;
use crate::types::CellState;

/// A complete frame of board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot<const ROWS: usize, const COLS: usize> {
    pub cells: [[CellState; COLS]; ROWS],
    /// True while the game-over sweep is painting the board.
    pub game_over: bool,
}

impl<const ROWS: usize, const COLS: usize> BoardSnapshot<ROWS, COLS> {
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; COLS]; ROWS],
            game_over: false,
        }
    }

    /// Copy grid contents into this snapshot, reusing the buffer.
    pub fn capture(&mut self, grid: &Grid<ROWS, COLS>, game_over: bool) {
        self.cells = *grid.cells();
        self.game_over = game_over;
    }

    /// True iff the cell at (row, col) is occupied (Active or Frozen).
    pub fn occupied(&self, row: usize, col: usize) -> bool {
        row < ROWS && col < COLS && self.cells[row][col].is_occupied()
    }
}

impl<const ROWS: usize, const COLS: usize> Default for BoardSnapshot<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::BadgeGrid;
    use crate::types::CellState::{Active, Frozen};

    #[test]
    fn capture_copies_grid_contents() {
        let mut grid = BadgeGrid::new();
        grid.set(3, 4, Frozen).unwrap();
        grid.set(0, 0, Active).unwrap();

        let mut snap = BoardSnapshot::new();
        snap.capture(&grid, false);

        assert!(snap.occupied(3, 4));
        assert!(snap.occupied(0, 0));
        assert!(!snap.occupied(5, 5));
        assert!(!snap.game_over);
    }

    #[test]
    fn occupied_is_false_out_of_range() {
        let snap: BoardSnapshot<16, 8> = BoardSnapshot::new();
        assert!(!snap.occupied(16, 0));
        assert!(!snap.occupied(0, 8));
    }
}
