//! Game state machine.
//!
//! One external driver tick = one call to [`Engine::tick`]: apply the pending
//! input (gated by freshly computed collision flags), advance the machine one
//! step, publish a snapshot. The machine cycles
//! `Spawn -> Falling -> WaitTick -> (lock-and-clear -> Spawn | GameOver)`;
//! the game-over sweep paints the board one cell at a time before returning
//! to `Spawn`.

use crate::core::collision::{self, CollisionFlags};
use crate::core::grid::Grid;
use crate::core::pieces::footprint;
use crate::core::rng::{LcgSource, RandomSource};
use crate::core::snapshot::BoardSnapshot;
use crate::core::transform::{self, ActivePiece, Direction};
use crate::types::{
    CellState, EngineError, InputEvent, PieceId, FALL_DELAY_TICKS, GAME_OVER_TICKS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Spawn,
    Falling,
    WaitTick { remaining: u8 },
    GameOver { next_cell: usize, remaining: u8 },
}

/// The complete engine: grid, active piece, and machine state.
///
/// There are no ambient globals; a driver owns one `Engine` and calls it at a
/// fixed rate. The two deployed grid families are `PanelEngine` and
/// `BadgeEngine`.
pub struct Engine<const ROWS: usize, const COLS: usize> {
    grid: Grid<ROWS, COLS>,
    active: Option<ActivePiece>,
    phase: Phase,
    /// Set when the last spawn found Frozen cells inside its window; the
    /// next `Falling` evaluation turns this into a top-out.
    spawn_blocked: bool,
    rng: Box<dyn RandomSource>,
    snapshot: BoardSnapshot<ROWS, COLS>,
}

/// 32x16 family (desktop build, LED panel firmware).
pub type PanelEngine = Engine<32, 16>;

/// 16x8 family (small-matrix firmware).
pub type BadgeEngine = Engine<16, 8>;

impl<const ROWS: usize, const COLS: usize> Engine<ROWS, COLS> {
    /// Column where new footprint windows are anchored (top-center).
    pub const SPAWN_COL: i16 = ((COLS - crate::types::FOOTPRINT_SIZE) / 2) as i16;

    /// Row where new footprint windows are anchored.
    pub const SPAWN_ROW: i16 = 0;

    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            phase: Phase::Spawn,
            spawn_blocked: false,
            rng,
            snapshot: BoardSnapshot::new(),
        }
    }

    /// Engine with the stock LCG source, seeded for a reproducible game.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(Box::new(LcgSource::new(seed)))
    }

    /// Engine starting from a prepared board. The board must not contain
    /// Active cells; the machine starts at `Spawn`.
    pub fn with_board(grid: Grid<ROWS, COLS>, rng: Box<dyn RandomSource>) -> Self {
        let mut engine = Self::new(rng);
        engine.grid = grid;
        engine
    }

    pub fn grid(&self) -> &Grid<ROWS, COLS> {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// True while the game-over sweep is running.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Advance the machine by one driver tick.
    ///
    /// The pending input, if any, is applied first, gated by collision flags
    /// computed at this instant. An input arriving during the game-over
    /// sweep is a driver bug; it is dropped here (use [`Self::apply_input`]
    /// for the typed error).
    pub fn tick(&mut self, input: Option<InputEvent>) -> &BoardSnapshot<ROWS, COLS> {
        if let Some(event) = input {
            let _ = self.apply_input(event);
        }
        self.step();

        self.snapshot.capture(&self.grid, self.is_game_over());
        &self.snapshot
    }

    /// Copy the current board into a caller-owned snapshot buffer.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot<ROWS, COLS>) {
        out.capture(&self.grid, self.is_game_over());
    }

    /// Reinitialize: empty grid, machine back at `Spawn`.
    pub fn reset(&mut self) {
        self.grid.fill(CellState::Empty);
        self.active = None;
        self.phase = Phase::Spawn;
        self.spawn_blocked = false;
    }

    /// Apply one movement/rotation request, gated by fresh collision flags.
    ///
    /// Returns `Ok(true)` if the board changed, `Ok(false)` if the request
    /// was rejected by a collision flag (a rejected request leaves the grid
    /// untouched), and `Err(IllegalTransition)` during the game-over sweep.
    pub fn apply_input(&mut self, event: InputEvent) -> Result<bool, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::IllegalTransition);
        }
        let Some(mut piece) = self.active else {
            return Ok(false);
        };

        let flags = collision::compute(&self.grid, piece.row, piece.col);

        // Once the piece has collided with the floor or stack, every further
        // movement request is rejected until the lock resolves; moving a
        // latched piece could clip it into cells it already collided with.
        if flags.bottom {
            return Ok(false);
        }

        let moved = match event {
            InputEvent::Left => {
                if flags.left {
                    false
                } else {
                    transform::translate(&mut self.grid, &mut piece, Direction::Left);
                    true
                }
            }
            InputEvent::Right => {
                if flags.right {
                    false
                } else {
                    transform::translate(&mut self.grid, &mut piece, Direction::Right);
                    true
                }
            }
            InputEvent::Rotate => {
                // No rotation near a wall or the stack (no wall kicks), and
                // the square never rotates.
                if piece.id == PieceId::O || flags.lateral() {
                    false
                } else {
                    transform::rotate(&mut self.grid, &piece)?
                }
            }
        };

        self.active = Some(piece);
        Ok(moved)
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Spawn => {
                self.spawn();
                self.phase = Phase::Falling;
            }
            Phase::Falling => self.step_falling(),
            Phase::WaitTick { ref mut remaining } => {
                *remaining -= 1;
                if *remaining == 0 {
                    self.phase = Phase::Falling;
                }
            }
            Phase::GameOver { .. } => self.step_game_over(),
        }
    }

    /// Draw a piece id and stamp its footprint at the top-center anchor.
    ///
    /// Frozen cells inside the spawn window are left alone; the overlap is
    /// what the next `Falling` evaluation detects as game over.
    fn spawn(&mut self) {
        let id = self.rng.next_piece_id();
        let piece = ActivePiece {
            id,
            row: Self::SPAWN_ROW,
            col: Self::SPAWN_COL,
        };

        self.spawn_blocked = false;
        for (dr, dc) in footprint(id).offsets() {
            let row = piece.row + dr as i16;
            let col = piece.col + dc as i16;
            if self.grid.is_frozen(row, col) {
                self.spawn_blocked = true;
            } else {
                let _ = self.grid.set(row, col, CellState::Active);
            }
        }

        self.active = Some(piece);
    }

    fn step_falling(&mut self) {
        let Some(mut piece) = self.active else {
            // No live piece in Falling is unreachable; respawn defensively.
            self.phase = Phase::Spawn;
            return;
        };

        let flags = collision::compute(&self.grid, piece.row, piece.col);

        if (flags.bottom || self.spawn_blocked) && piece.row == Self::SPAWN_ROW {
            // The piece could not even begin falling: top-out.
            self.grid.freeze_active();
            self.active = None;
            self.phase = Phase::GameOver {
                next_cell: 0,
                remaining: GAME_OVER_TICKS,
            };
        } else if flags.bottom {
            self.lock_and_clear();
        } else {
            transform::fall_one_row(&mut self.grid, &mut piece);
            self.active = Some(piece);
            self.phase = Phase::WaitTick {
                remaining: FALL_DELAY_TICKS,
            };
        }
    }

    /// Freeze the active cells, collapse full rows, hand control back to
    /// `Spawn`.
    fn lock_and_clear(&mut self) {
        self.grid.freeze_active();
        self.active = None;
        self.grid.clear_and_collapse();
        self.phase = Phase::Spawn;
    }

    /// Paint the board one cell per delay expiry, row-major; once full,
    /// clear everything and return to `Spawn`.
    fn step_game_over(&mut self) {
        let Phase::GameOver {
            ref mut next_cell,
            ref mut remaining,
        } = self.phase
        else {
            return;
        };

        if *remaining > 0 {
            *remaining -= 1;
            return;
        }

        let row = (*next_cell / COLS) as i16;
        let col = (*next_cell % COLS) as i16;
        let _ = self.grid.set(row, col, CellState::Frozen);
        *next_cell += 1;
        *remaining = GAME_OVER_TICKS;

        if *next_cell == ROWS * COLS {
            self.grid.fill(CellState::Empty);
            self.phase = Phase::Spawn;
        }
    }

    /// Collision flags of the live piece, if any. Derived, never cached.
    pub fn collisions(&self) -> CollisionFlags {
        match self.active {
            Some(piece) => collision::compute(&self.grid, piece.row, piece.col),
            None => CollisionFlags::NONE,
        }
    }
}

impl<const ROWS: usize, const COLS: usize> std::fmt::Debug for Engine<ROWS, COLS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("active", &self.active)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
