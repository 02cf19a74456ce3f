//! Windowed frontend for the pasture simulation.
//!
//! A macroquad implementation of the engine's backend contract, plus
//! procedurally painted sprites for running without the media directory.

pub mod backend;
pub mod placeholder;
