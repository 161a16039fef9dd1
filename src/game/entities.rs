//! # Entities
//!
//! The player and the Otyughs living in the caves.

use crate::config::STARTING_ARROWS;
use crate::{LocationId, Treasure};
use serde::{Deserialize, Serialize};

/// Health states of an Otyugh.
///
/// Health only ever moves `Healthy -> Injured -> Dead`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterHealth {
    Healthy,
    Injured,
    Dead,
}

impl MonsterHealth {
    /// Numeric health: 100, 50 or 0.
    pub fn points(self) -> u32 {
        match self {
            MonsterHealth::Healthy => 100,
            MonsterHealth::Injured => 50,
            MonsterHealth::Dead => 0,
        }
    }

    /// State after one arrow hit. Dead stays dead.
    pub fn after_hit(self) -> Self {
        match self {
            MonsterHealth::Healthy => MonsterHealth::Injured,
            MonsterHealth::Injured | MonsterHealth::Dead => MonsterHealth::Dead,
        }
    }
}

/// An Otyugh occupying a cave.
///
/// # Examples
///
/// ```
/// use warren::Monster;
///
/// let mut monster = Monster::new();
/// assert_eq!(monster.health(), 100);
/// monster.hit();
/// assert_eq!(monster.health(), 50);
/// monster.hit();
/// monster.hit();
/// assert_eq!(monster.health(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    state: MonsterHealth,
}

impl Monster {
    /// Creates a healthy Otyugh.
    pub fn new() -> Self {
        Self {
            state: MonsterHealth::Healthy,
        }
    }

    /// Current health points.
    pub fn health(&self) -> u32 {
        self.state.points()
    }

    /// Current health state.
    pub fn state(&self) -> MonsterHealth {
        self.state
    }

    /// Whether the Otyugh still has any health left.
    pub fn is_alive(&self) -> bool {
        self.state != MonsterHealth::Dead
    }

    /// Applies one arrow hit, taking 50 health and never going below zero.
    pub fn hit(&mut self) {
        self.state = self.state.after_hit();
    }
}

impl Default for Monster {
    fn default() -> Self {
        Self::new()
    }
}

/// The adventurer exploring the dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    location: LocationId,
    treasures: Vec<Treasure>,
    arrows: u32,
    alive: bool,
}

impl Player {
    /// Creates a living player at `location` carrying the starting arrows.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::Player;
    ///
    /// let player = Player::new("Hero".to_string(), 4);
    /// assert_eq!(player.location(), 4);
    /// assert_eq!(player.arrows(), 3);
    /// assert!(player.is_alive());
    /// ```
    pub fn new(name: String, location: LocationId) -> Self {
        Self {
            name,
            location,
            treasures: Vec::new(),
            arrows: STARTING_ARROWS,
            alive: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    /// Treasure collected so far, in pickup order.
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Counts of each collected treasure type, in [`Treasure::ALL`] order.
    pub fn treasure_counts(&self) -> Vec<(Treasure, usize)> {
        Treasure::ALL
            .iter()
            .map(|&kind| {
                let count = self.treasures.iter().filter(|&&t| t == kind).count();
                (kind, count)
            })
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    pub(crate) fn set_location(&mut self, location: LocationId) {
        self.location = location;
    }

    pub(crate) fn add_treasures(&mut self, treasures: impl IntoIterator<Item = Treasure>) {
        self.treasures.extend(treasures);
    }

    pub(crate) fn add_arrows(&mut self, count: u32) {
        self.arrows = self.arrows.saturating_add(count);
    }

    /// Spends one arrow. Returns `false` if the quiver was already empty.
    pub(crate) fn spend_arrow(&mut self) -> bool {
        if self.arrows == 0 {
            return false;
        }
        self.arrows -= 1;
        true
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
