//! Transform engine - translate, fall, and rotate the active piece.
//!
//! All transforms are expressed as grid mutations: the Active cells are the
//! piece. Callers gate every transform on freshly computed collision flags;
//! the functions here assume the move is legal and keep the board invariants
//! (Frozen cells never move, Active cells never overwrite Frozen).

use crate::core::grid::Grid;
use crate::types::{CellState, EngineError, PieceId, FOOTPRINT_SIZE};

/// The mutable record of the currently falling piece: its catalog id plus
/// the top-left corner of its footprint window in grid coordinates.
///
/// The column is signed because the window may legally hang past the left or
/// right edge through its unoccupied columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub id: PieceId,
    pub row: i16,
    pub col: i16,
}

/// Horizontal translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> i16 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Move every Active cell one column in `dir` and adjust the anchor.
///
/// Each row is rebuilt in a scratch buffer before being committed, so a cell
/// can never overwrite another Active cell of the same piece that has not
/// been read yet. The original right-move used this scheme; the left-move
/// relied on traversal order, which this version does not.
pub fn translate<const ROWS: usize, const COLS: usize>(
    grid: &mut Grid<ROWS, COLS>,
    piece: &mut ActivePiece,
    dir: Direction,
) {
    let delta = dir.delta();

    for row in 0..ROWS as i16 {
        let mut scratch = [CellState::Empty; COLS];

        // Keep everything that is not the piece.
        for col in 0..COLS as i16 {
            let cell = grid.get(row, col).unwrap_or(CellState::Empty);
            if cell != CellState::Active {
                scratch[col as usize] = cell;
            }
        }

        // Place the piece's cells at their shifted positions.
        for col in 0..COLS as i16 {
            if grid.is_active(row, col) {
                let dest = col + delta;
                if Grid::<ROWS, COLS>::contains(row, dest) {
                    scratch[dest as usize] = CellState::Active;
                }
            }
        }

        for col in 0..COLS {
            let _ = grid.set(row, col as i16, scratch[col]);
        }
    }

    piece.col += delta;
}

/// Move every Active cell down one row and advance the anchor.
///
/// Rows are processed bottom-first so a cell always moves into a slot that
/// has already been vacated (or was empty). Callers must have checked that
/// the bottom flag is clear.
pub fn fall_one_row<const ROWS: usize, const COLS: usize>(
    grid: &mut Grid<ROWS, COLS>,
    piece: &mut ActivePiece,
) {
    for row in (0..ROWS as i16 - 1).rev() {
        for col in 0..COLS as i16 {
            if grid.is_active(row, col) {
                let _ = grid.set(row + 1, col, CellState::Active);
                let _ = grid.set(row, col, CellState::Empty);
            }
        }
    }

    piece.row += 1;
}

/// Rotate the active piece's window 90 degrees anti-clockwise.
///
/// The window's Active pattern is copied into a local buffer (out-of-bounds
/// columns read as empty), rotated in place, and written back all-or-nothing:
/// if any rotated cell would land out of bounds or on a Frozen cell the grid
/// is left untouched and `Ok(false)` is returned.
///
/// An empty window (no Active cells) is an `InvalidRotationPivot` error;
/// that cannot happen while the engine owns a live piece.
pub fn rotate<const ROWS: usize, const COLS: usize>(
    grid: &mut Grid<ROWS, COLS>,
    piece: &ActivePiece,
) -> Result<bool, EngineError> {
    const N: usize = FOOTPRINT_SIZE;

    // Extract the Active pattern of the window.
    let mut window = [[false; N]; N];
    let mut any = false;
    for (dr, row) in window.iter_mut().enumerate() {
        for (dc, cell) in row.iter_mut().enumerate() {
            *cell = grid.is_active(piece.row + dr as i16, piece.col + dc as i16);
            any |= *cell;
        }
    }
    if !any {
        return Err(EngineError::InvalidRotationPivot);
    }

    rotate_window_ccw(&mut window);

    // Validate the rotated pattern before touching the grid.
    for (dr, row) in window.iter().enumerate() {
        for (dc, &occupied) in row.iter().enumerate() {
            if !occupied {
                continue;
            }
            let r = piece.row + dr as i16;
            let c = piece.col + dc as i16;
            if !Grid::<ROWS, COLS>::contains(r, c) || grid.is_frozen(r, c) {
                return Ok(false);
            }
        }
    }

    // Commit: clear the old pattern, then stamp the rotated one.
    for dr in 0..N as i16 {
        for dc in 0..N as i16 {
            let (r, c) = (piece.row + dr, piece.col + dc);
            if grid.is_active(r, c) {
                let _ = grid.set(r, c, CellState::Empty);
            }
        }
    }
    for (dr, row) in window.iter().enumerate() {
        for (dc, &occupied) in row.iter().enumerate() {
            if occupied {
                let _ = grid.set(piece.row + dr as i16, piece.col + dc as i16, CellState::Active);
            }
        }
    }

    Ok(true)
}

/// In-place 90-degree anti-clockwise rotation of the square window,
/// cycling elements four at a time.
fn rotate_window_ccw(window: &mut [[bool; FOOTPRINT_SIZE]; FOOTPRINT_SIZE]) {
    const N: usize = FOOTPRINT_SIZE;
    for x in 0..N / 2 {
        for y in x..N - x - 1 {
            let temp = window[x][y];
            window[x][y] = window[y][N - 1 - x];
            window[y][N - 1 - x] = window[N - 1 - x][N - 1 - y];
            window[N - 1 - x][N - 1 - y] = window[N - 1 - y][x];
            window[N - 1 - y][x] = temp;
        }
    }
}
