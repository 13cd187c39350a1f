//! Collision detection for the active piece.
//!
//! Flags are derived fresh from grid + anchor on every evaluation and never
//! persisted: the result of one compute gates every movement decision made
//! before the next one.

use crate::core::grid::Grid;
use crate::types::FOOTPRINT_SIZE;

/// Directional collision flags for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

impl CollisionFlags {
    pub const NONE: CollisionFlags = CollisionFlags {
        left: false,
        right: false,
        bottom: false,
    };

    pub fn lateral(&self) -> bool {
        self.left || self.right
    }
}

/// Compute collision flags for the footprint window anchored at
/// `(anchor_row, anchor_col)`.
///
/// Every in-bounds Active cell of the window is inspected:
/// - bottom: the cell sits on the last row, or the cell below is Frozen;
/// - right: the cell sits on the last column, or the cell right is Frozen;
/// - left: the cell sits on column 0, or the cell left is Frozen.
///
/// Window cells above row 0 or outside the columns are skipped; they are
/// never treated as Frozen.
pub fn compute<const ROWS: usize, const COLS: usize>(
    grid: &Grid<ROWS, COLS>,
    anchor_row: i16,
    anchor_col: i16,
) -> CollisionFlags {
    let mut flags = CollisionFlags::NONE;
    let last_row = ROWS as i16 - 1;
    let last_col = COLS as i16 - 1;

    for dr in 0..FOOTPRINT_SIZE as i16 {
        for dc in 0..FOOTPRINT_SIZE as i16 {
            let row = anchor_row + dr;
            let col = anchor_col + dc;
            if !grid.is_active(row, col) {
                continue;
            }

            if row == last_row || grid.is_frozen(row + 1, col) {
                flags.bottom = true;
            }
            if col == last_col || grid.is_frozen(row, col + 1) {
                flags.right = true;
            }
            if col == 0 || grid.is_frozen(row, col - 1) {
                flags.left = true;
            }
        }
    }

    flags
}
