//! Core types shared across the crate.
//! This module contains pure data types with no external dependencies.

use std::error::Error;
use std::fmt;

/// Side length of every piece footprint window.
pub const FOOTPRINT_SIZE: usize = 3;

/// Ticks the engine waits between two fall steps.
pub const FALL_DELAY_TICKS: u8 = 3;

/// Ticks between two painted cells during the game-over sweep.
pub const GAME_OVER_TICKS: u8 = 1;

/// Driver tick period for the demo binary (milliseconds).
pub const TICK_MS: u64 = 50;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Nothing here.
    #[default]
    Empty,
    /// Permanently occupied by a previously locked piece.
    Frozen,
    /// Occupied by the currently falling piece.
    Active,
}

impl CellState {
    /// A cell counts toward a full row unless it is empty.
    pub fn is_occupied(self) -> bool {
        self != CellState::Empty
    }
}

/// The seven canonical piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceId {
    T,
    J,
    L,
    O,
    S,
    Z,
    I,
}

impl PieceId {
    pub const ALL: [PieceId; 7] = [
        PieceId::T,
        PieceId::J,
        PieceId::L,
        PieceId::O,
        PieceId::S,
        PieceId::Z,
        PieceId::I,
    ];

    /// Map a uniform draw in `0..7` to a piece id.
    pub fn from_index(index: u32) -> PieceId {
        Self::ALL[(index % 7) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceId::T => "t",
            PieceId::J => "j",
            PieceId::L => "l",
            PieceId::O => "o",
            PieceId::S => "s",
            PieceId::Z => "z",
            PieceId::I => "i",
        }
    }
}

/// A discrete, pre-debounced input event.
///
/// Upstream delivers at most one event per tick per direction; the engine
/// performs no debouncing of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Left,
    Right,
    Rotate,
}

/// Contract violations surfaced by the core.
///
/// None of these are recoverable conditions of a running game; they mark
/// driver or custom-piece bugs and are meant to be caught in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Grid access outside the declared dimensions. Never clamped.
    OutOfBounds { row: i16, col: i16 },
    /// A rotation was attempted over a pattern with no occupied cells.
    InvalidRotationPivot,
    /// A movement input arrived during the game-over sweep.
    IllegalTransition,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::OutOfBounds { row, col } => {
                write!(f, "grid access out of bounds at ({row}, {col})")
            }
            EngineError::InvalidRotationPivot => {
                write!(f, "rotation pivot undefined: footprint has no occupied cells")
            }
            EngineError::IllegalTransition => {
                write!(f, "movement input during game-over sweep")
            }
        }
    }
}

impl Error for EngineError {}
