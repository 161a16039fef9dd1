//! # Action System
//!
//! Player commands and their resolution against a [`Dungeon`].
//!
//! Every command resolves to an [`ActionOutcome`] whose `Display` is the
//! message shown to the player. Malformed commands (an unknown direction,
//! a distance below one) are rejected with [`WarrenError::InvalidAction`]
//! before any state is touched.

use crate::{Direction, Dungeon, LocationId, MonsterHealth, Treasure, WarrenError, WarrenResult};
use std::fmt;

/// A single player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Walk through the exit in the given direction
    Move(Direction),
    /// Collect every treasure at the current location
    PickTreasure,
    /// Collect every arrow at the current location
    PickArrow,
    /// Fire an arrow that travels `distance` caves in `direction`
    Shoot { distance: u32, direction: Direction },
}

/// What happened when an action was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    MoveBlocked(Direction),
    Moved(LocationId),
    Escaped(LocationId),
    Eaten(LocationId),
    TreasurePicked(Vec<Treasure>),
    NoTreasure,
    ArrowsPicked(u32),
    NoArrows,
    OutOfArrows,
    /// The arrow hit a wall before covering its distance
    ArrowLost,
    /// The arrow landed in a cave without a living Otyugh
    Missed(LocationId),
    MonsterInjured(LocationId),
    MonsterKilled(LocationId),
    GameOver,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::MoveBlocked(direction) => write!(f, "Move not possible {}", direction),
            ActionOutcome::Moved(id) => write!(f, "Player moved successfully to location {}", id),
            ActionOutcome::Escaped(id) => write!(
                f,
                "Player escaped successfully from an injured Otyugh, and moved to location {}",
                id
            ),
            ActionOutcome::Eaten(_) => write!(
                f,
                "Monster in cave! Chomp, chomp, chomp, player got eaten by an Otyugh!\nBetter luck next time"
            ),
            ActionOutcome::TreasurePicked(_) => f.write_str("Treasure picked up"),
            ActionOutcome::NoTreasure => f.write_str("No treasure present at the location"),
            ActionOutcome::ArrowsPicked(_) => f.write_str("Arrow picked up"),
            ActionOutcome::NoArrows => f.write_str("No arrow present at the location"),
            ActionOutcome::OutOfArrows => {
                f.write_str("You are out of arrows, explore to find more")
            }
            ActionOutcome::ArrowLost => f.write_str("You shot an arrow into the darkness"),
            ActionOutcome::Missed(_) => f.write_str("Player shot an arrow into the darkness"),
            ActionOutcome::MonsterInjured(_) => {
                f.write_str("Player shot the monster, monster is injured")
            }
            ActionOutcome::MonsterKilled(_) => {
                f.write_str("Player shot the monster, monster has been killed")
            }
            ActionOutcome::GameOver => {
                f.write_str("The game is over, no further actions are possible")
            }
        }
    }
}

impl PlayerAction {
    /// Builds a shoot action from raw console values.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{Direction, PlayerAction};
    ///
    /// let action = PlayerAction::shoot(2, "n").unwrap();
    /// assert_eq!(action, PlayerAction::Shoot { distance: 2, direction: Direction::North });
    /// assert!(PlayerAction::shoot(0, "n").is_err());
    /// ```
    pub fn shoot(distance: i64, token: &str) -> WarrenResult<Self> {
        if distance < 1 {
            return Err(WarrenError::InvalidAction(format!(
                "Distance must be at least 1, got {}",
                distance
            )));
        }
        let distance = u32::try_from(distance).map_err(|_| {
            WarrenError::InvalidAction(format!("Distance {} is too large", distance))
        })?;
        let direction = token.parse()?;
        Ok(PlayerAction::Shoot {
            distance,
            direction,
        })
    }

    /// Applies the action to `dungeon`.
    ///
    /// Once the player is dead nothing changes and the outcome is always
    /// [`ActionOutcome::GameOver`].
    pub fn execute(&self, dungeon: &mut Dungeon) -> WarrenResult<ActionOutcome> {
        if let PlayerAction::Shoot { distance: 0, .. } = self {
            return Err(WarrenError::InvalidAction(
                "Distance must be at least 1".to_string(),
            ));
        }
        if !dungeon.player.is_alive() {
            return Ok(ActionOutcome::GameOver);
        }

        let outcome = match *self {
            PlayerAction::Move(direction) => move_player(dungeon, direction)?,
            PlayerAction::PickTreasure => pick_treasure(dungeon)?,
            PlayerAction::PickArrow => pick_arrow(dungeon)?,
            PlayerAction::Shoot {
                distance,
                direction,
            } => shoot(dungeon, distance, direction)?,
        };

        dungeon.statistics.record(&outcome);
        log::debug!("{:?} resolved to {:?}", self, outcome);
        Ok(outcome)
    }

    /// Like [`execute`](Self::execute) but reports malformed commands as a
    /// message instead of an error.
    pub fn resolve(&self, dungeon: &mut Dungeon) -> WarrenResult<String> {
        recover_invalid(self.execute(dungeon).map(|outcome| outcome.to_string()))
    }
}

/// Turns an [`WarrenError::InvalidAction`] into its message, passing
/// everything else through.
pub fn recover_invalid(result: WarrenResult<String>) -> WarrenResult<String> {
    match result {
        Err(WarrenError::InvalidAction(message)) => {
            log::warn!("Rejected command: {}", message);
            Ok(message)
        }
        other => other,
    }
}

fn move_player(dungeon: &mut Dungeon, direction: Direction) -> WarrenResult<ActionOutcome> {
    let from = dungeon.player.location();
    let destination = match dungeon.graph.location(from)?.neighbor(direction) {
        Some(id) => id,
        None => return Ok(ActionOutcome::MoveBlocked(direction)),
    };

    dungeon.player.set_location(destination);

    let health = dungeon
        .graph
        .location(destination)?
        .monster()
        .map(|monster| monster.state());

    let outcome = match health {
        Some(MonsterHealth::Healthy) => {
            dungeon.player.kill();
            ActionOutcome::Eaten(destination)
        }
        Some(MonsterHealth::Injured) => {
            if dungeon.rng.next_int(0, 2) % 2 == 0 {
                ActionOutcome::Escaped(destination)
            } else {
                dungeon.player.kill();
                ActionOutcome::Eaten(destination)
            }
        }
        Some(MonsterHealth::Dead) | None => ActionOutcome::Moved(destination),
    };
    Ok(outcome)
}

fn pick_treasure(dungeon: &mut Dungeon) -> WarrenResult<ActionOutcome> {
    let location = dungeon.graph.location_mut(dungeon.player.location())?;
    if location.treasures().is_empty() {
        return Ok(ActionOutcome::NoTreasure);
    }
    let taken = location.take_treasures();
    dungeon.player.add_treasures(taken.iter().copied());
    Ok(ActionOutcome::TreasurePicked(taken))
}

fn pick_arrow(dungeon: &mut Dungeon) -> WarrenResult<ActionOutcome> {
    let location = dungeon.graph.location_mut(dungeon.player.location())?;
    if location.arrows() == 0 {
        return Ok(ActionOutcome::NoArrows);
    }
    let taken = location.take_arrows();
    dungeon.player.add_arrows(taken);
    Ok(ActionOutcome::ArrowsPicked(taken))
}

fn shoot(dungeon: &mut Dungeon, distance: u32, direction: Direction) -> WarrenResult<ActionOutcome> {
    if dungeon.player.arrows() == 0 {
        return Ok(ActionOutcome::OutOfArrows);
    }

    let landing = match trace_arrow(dungeon, distance, direction)? {
        Some(id) => id,
        None => return Ok(ActionOutcome::ArrowLost),
    };
    dungeon.player.spend_arrow();

    let monster = dungeon
        .graph
        .location_mut(landing)?
        .monster_mut()
        .filter(|monster| monster.is_alive());
    let outcome = match monster {
        Some(monster) => {
            monster.hit();
            if monster.is_alive() {
                ActionOutcome::MonsterInjured(landing)
            } else {
                ActionOutcome::MonsterKilled(landing)
            }
        }
        None => ActionOutcome::Missed(landing),
    };
    Ok(outcome)
}

/// Follows an arrow from the player's location.
///
/// Caves use up one step of `distance`; tunnels bend the arrow out through
/// their other exit at no cost. Returns the cave where the arrow comes to
/// rest, or `None` if it hits a wall first.
fn trace_arrow(
    dungeon: &Dungeon,
    distance: u32,
    direction: Direction,
) -> WarrenResult<Option<LocationId>> {
    let mut current = dungeon.player.location();
    let mut travel = direction;
    let mut remaining = distance;

    loop {
        let next = match dungeon.graph.location(current)?.neighbor(travel) {
            Some(id) => id,
            None => return Ok(None),
        };
        current = next;

        let location = dungeon.graph.location(current)?;
        if location.is_tunnel() {
            travel = match location.neighbors().other_exit(travel.opposite()) {
                Some(exit) => exit,
                None => return Ok(None),
            };
        } else {
            remaining -= 1;
            if remaining == 0 {
                return Ok(Some(current));
            }
        }
    }
}
