//! # Rendering Module
//!
//! Text rendering of dungeon state for console output.

pub mod display;

pub use display::*;
