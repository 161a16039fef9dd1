//! # Warren
//!
//! A procedurally generated maze dungeon of caves and tunnels, stocked with
//! treasure, arrows and Otyughs.
//!
//! ## Architecture Overview
//!
//! The crate is organised around a one-way construction pipeline followed by
//! a turn-based session:
//!
//! - **Random Source**: an injected [`Randomizer`] drives every random choice,
//!   so a [`FixedRandomizer`] replays a world exactly
//! - **Generation**: a weighted Kruskal maze over a (possibly wrapping) grid,
//!   extra edges for interconnectivity, then treasure, arrows and monsters
//! - **Game**: the location graph, the player and monsters, and the action
//!   resolver for move, pickup and shoot commands
//! - **Input / Rendering**: a text command controller and descriptions for a
//!   console front end
//!
//! ## Quick Start
//!
//! ```
//! use warren::{Dungeon, FixedRandomizer, GenerationConfig};
//!
//! let config = GenerationConfig::new(5, 4, 2, 20, false, 5);
//! let rng = FixedRandomizer::new(vec![2]).unwrap();
//! let mut dungeon = Dungeon::new(&config, Box::new(rng)).unwrap();
//!
//! assert_eq!(dungeon.start_cave().id(), 1);
//! let message = dungeon.shoot_arrow(1, "E").unwrap();
//! assert!(message.contains("monster is injured"));
//! ```

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Warren game engine.
#[derive(thiserror::Error, Debug)]
pub enum WarrenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Construction parameters are invalid or cannot produce a world
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A command was malformed (bad direction token, bad distance)
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// A location id that does not belong to the dungeon was handed in
    #[error("Unknown location: {0}")]
    UnknownLocation(LocationId),
}

/// Result type used throughout the Warren codebase.
pub type WarrenResult<T> = Result<T, WarrenError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default number of grid rows
    pub const DEFAULT_ROWS: usize = 6;

    /// Default number of grid columns
    pub const DEFAULT_COLUMNS: usize = 8;

    /// Default number of extra (non spanning tree) edges
    pub const DEFAULT_INTERCONNECTIVITY: usize = 3;

    /// Default treasure percentage before the random adjustment
    pub const DEFAULT_TREASURE_PERCENT: u32 = 20;

    /// Default number of Otyughs, including the one guarding the end cave
    pub const DEFAULT_MONSTER_COUNT: usize = 3;

    /// Arrows the player carries at the start of a session
    pub const STARTING_ARROWS: u32 = 3;

    /// Minimum BFS distance between the start and end caves
    pub const MIN_START_END_DISTANCE: usize = 5;

    /// Exclusive upper bound for regular grid edge weights
    pub const MAX_EDGE_WEIGHT: u32 = 10;

    /// Exclusive upper bound for arrows dropped on a single location
    pub const MAX_ARROWS_PER_LOCATION: u32 = 4;

    /// Default player name
    pub const DEFAULT_PLAYER_NAME: &str = "John";

    /// Largest grid, in cells, a configuration may ask for
    pub const MAX_CELLS: usize = 1_000_000;

    /// Most treasures a single cave can hold
    pub const MAX_TREASURES_PER_CAVE: u32 = 3;
}
