//! Core module - pure game logic with no external dependencies.
//!
//! Everything here is deterministic given a fixed random source: grid,
//! piece catalog, collision detection, transforms, row clearing, and the
//! tick-driven state machine. No UI, no I/O.

pub mod collision;
pub mod engine;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod transform;

// Re-export commonly used types.
pub use collision::CollisionFlags;
pub use engine::{BadgeEngine, Engine, PanelEngine};
pub use grid::{BadgeGrid, Grid, PanelGrid};
pub use pieces::{footprint, Footprint};
pub use rng::{LcgSource, RandomSource, SimpleRng};
pub use snapshot::BoardSnapshot;
pub use transform::{ActivePiece, Direction};
