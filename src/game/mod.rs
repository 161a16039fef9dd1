//! # Game Module
//!
//! Core game state, world representation and entity systems.
//!
//! This module contains the fundamental building blocks of Warren:
//! - The location graph of caves and tunnels
//! - The player and the Otyughs
//! - The action resolver for move, pickup and shoot commands
//! - The dungeon session tying them together

pub mod actions;
pub mod entities;
pub mod state;
pub mod world;

pub use actions::*;
pub use entities::*;
pub use state::*;
pub use world::*;

use crate::{WarrenError, WarrenResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a location, equal to its index in the grid.
pub type LocationId = usize;

/// Directions for movement and arrow flight.
///
/// The declaration order is the canonical iteration order used everywhere a
/// location's exits are walked (BFS, tunnel redirection, descriptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::East.opposite(), Direction::West);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// Single-letter command token for this direction.
    pub fn token(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = WarrenError;

    /// Parses `N`/`S`/`E`/`W` or the full direction name, ignoring case.
    fn from_str(token: &str) -> WarrenResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(WarrenError::InvalidAction(format!(
                "Invalid direction '{}'",
                token
            ))),
        }
    }
}

/// Kinds of treasure scattered through the caves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Treasure {
    Diamond,
    Ruby,
    Sapphire,
}

impl Treasure {
    /// Every treasure type, in declaration order.
    pub const ALL: [Treasure; 3] = [Treasure::Diamond, Treasure::Ruby, Treasure::Sapphire];
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Treasure::Diamond => "Diamond",
            Treasure::Ruby => "Ruby",
            Treasure::Sapphire => "Sapphire",
        };
        f.write_str(name)
    }
}

/// Classification of a location, fixed once its exits are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    /// One, three or four exits; may hold treasure and an Otyugh
    Cave,
    /// Exactly two exits; a pass-through connector
    Tunnel,
}

impl LocationType {
    /// Classifies a location by its number of exits.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::LocationType;
    ///
    /// assert_eq!(LocationType::from_degree(2), LocationType::Tunnel);
    /// assert_eq!(LocationType::from_degree(3), LocationType::Cave);
    /// ```
    pub fn from_degree(degree: usize) -> Self {
        if degree == 2 {
            LocationType::Tunnel
        } else {
            LocationType::Cave
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationType::Cave => f.write_str("CAVE"),
            LocationType::Tunnel => f.write_str("TUNNEL"),
        }
    }
}

/// Strength of the Otyugh stench at the player's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Smell {
    None,
    Low,
    High,
}

impl fmt::Display for Smell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Smell::None => "NONE",
            Smell::Low => "LOW",
            Smell::High => "HIGH",
        };
        f.write_str(label)
    }
}
