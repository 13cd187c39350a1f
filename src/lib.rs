//! blockfall - falling-block game engine core.
//!
//! The board/piece logic shared by the deployed variants (desktop build and
//! LED-matrix firmware revisions), unified behind one tick-driven engine.
//! Rendering and input hardware are external collaborators: a driver calls
//! [`core::Engine::tick`] at a fixed rate with at most one debounced input
//! event and hands the returned [`core::BoardSnapshot`] to its display.
//!
//! The demo driver in `src/main.rs` plays the game in a terminal.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
