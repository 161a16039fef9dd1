//! # Game State Module
//!
//! Central session state tying the generated world to the player.
//!
//! [`Dungeon`] owns the location graph, the chosen start and end caves, the
//! player and the injected random source. It is the only entry point for
//! queries and commands during a session.

use crate::{
    effective_percent, select_endpoints, ActionOutcome, ArrowPopulator, BfsLevels, Direction,
    GenerationConfig, Generator, KruskalMazeGenerator, Location, LocationGraph, LocationId,
    MonsterPopulator, Player, PlayerAction, Populator, Randomizer, Smell, TreasurePopulator,
    WarrenResult,
};
use serde::{Deserialize, Serialize};

/// Running totals for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Successful moves, including the fatal one
    pub moves_made: u32,
    /// Arrows that left the quiver
    pub arrows_shot: u32,
    /// Otyughs brought down to zero health
    pub monsters_killed: u32,
    /// Individual treasures picked up
    pub treasure_collected: u32,
    /// Arrows picked up
    pub arrows_collected: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on an action outcome.
    pub fn record(&mut self, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Moved(_) | ActionOutcome::Escaped(_) | ActionOutcome::Eaten(_) => {
                self.moves_made = self.moves_made.saturating_add(1);
            }
            ActionOutcome::TreasurePicked(items) => {
                let count = u32::try_from(items.len()).unwrap_or(u32::MAX);
                self.treasure_collected = self.treasure_collected.saturating_add(count);
            }
            ActionOutcome::ArrowsPicked(count) => {
                self.arrows_collected = self.arrows_collected.saturating_add(*count);
            }
            ActionOutcome::Missed(_) | ActionOutcome::MonsterInjured(_) => {
                self.arrows_shot = self.arrows_shot.saturating_add(1);
            }
            ActionOutcome::MonsterKilled(_) => {
                self.arrows_shot = self.arrows_shot.saturating_add(1);
                self.monsters_killed = self.monsters_killed.saturating_add(1);
            }
            _ => {}
        }
    }
}

/// Game completion state for handling endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// Player stands alive in the end cave
    ReachedEnd,
    /// Player was eaten
    PlayerDied,
    /// Player left the session early
    Quit,
}

/// A generated dungeon and the session played in it.
///
/// # Examples
///
/// ```
/// use warren::{Dungeon, FixedRandomizer, GenerationConfig, Smell};
///
/// let rng = FixedRandomizer::new(vec![2]).unwrap();
/// let mut dungeon = Dungeon::new(&GenerationConfig::for_testing(), Box::new(rng)).unwrap();
///
/// assert_eq!(dungeon.player().location(), dungeon.start_cave().id());
/// assert_eq!(dungeon.check_smell(), Smell::High);
/// assert_eq!(dungeon.pick_arrow().unwrap(), "Arrow picked up");
/// ```
#[derive(Debug)]
pub struct Dungeon {
    pub(crate) graph: LocationGraph,
    start: LocationId,
    end: LocationId,
    pub(crate) player: Player,
    pub(crate) rng: Box<dyn Randomizer>,
    pub(crate) statistics: GameStatistics,
}

impl Dungeon {
    /// Generates a dungeon and places the player in the start cave.
    ///
    /// Random values are drawn in a fixed order: the treasure percentage
    /// bump, the maze, the endpoints, treasure, arrows, then monsters. A
    /// [`FixedRandomizer`](crate::FixedRandomizer) therefore always rebuilds
    /// the same world.
    pub fn new(config: &GenerationConfig, mut rng: Box<dyn Randomizer>) -> WarrenResult<Self> {
        config.validate()?;

        let percent = effective_percent(config.treasure_percent, rng.as_mut());
        let mut graph = KruskalMazeGenerator::new().generate(config, rng.as_mut())?;
        let (start, end) = select_endpoints(&graph, rng.as_mut())?;

        let populators: [Box<dyn Populator>; 3] = [
            Box::new(TreasurePopulator::new(percent)),
            Box::new(ArrowPopulator::new(percent)),
            Box::new(MonsterPopulator::new(config.monster_count, start, end)),
        ];
        for populator in &populators {
            populator.populate(&mut graph, rng.as_mut())?;
        }

        log::info!(
            "Created {}x{} {} dungeon with {} caves, start {} and end {}",
            config.rows,
            config.columns,
            if config.wrapping { "wrapping" } else { "bounded" },
            graph.cave_ids().len(),
            start,
            end
        );

        Ok(Self {
            graph,
            start,
            end,
            player: Player::new(config.player_name.clone(), start),
            rng,
            statistics: GameStatistics::new(),
        })
    }

    /// Read-only view of every location, ordered by id.
    pub fn locations(&self) -> &[Location] {
        self.graph.locations()
    }

    pub fn location(&self, id: LocationId) -> WarrenResult<&Location> {
        self.graph.location(id)
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn start_cave(&self) -> &Location {
        &self.graph.locations()[self.start]
    }

    pub fn end_cave(&self) -> &Location {
        &self.graph.locations()[self.end]
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The location the player is standing in.
    pub fn current_location(&self) -> &Location {
        &self.graph.locations()[self.player.location()]
    }

    /// Distance from `id` to every location.
    pub fn bfs(&self, id: LocationId) -> WarrenResult<BfsLevels> {
        self.graph.bfs(id)
    }

    /// Strength of the Otyugh stench at the player's location.
    ///
    /// See [`LocationGraph::smell_at`].
    pub fn check_smell(&self) -> Smell {
        match self.graph.smell_at(self.player.location()) {
            Ok(smell) => smell,
            Err(err) => {
                log::warn!("Smell check failed at the player's location: {}", err);
                Smell::None
            }
        }
    }

    /// Whether the player is standing in the end cave, alive or not.
    pub fn has_reached_end(&self) -> bool {
        self.player.location() == self.end
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    pub fn completion_state(&self) -> GameCompletionState {
        if !self.player.is_alive() {
            GameCompletionState::PlayerDied
        } else if self.has_reached_end() {
            GameCompletionState::ReachedEnd
        } else {
            GameCompletionState::Playing
        }
    }

    /// Whether the session can no longer continue.
    pub fn is_game_over(&self) -> bool {
        self.completion_state() != GameCompletionState::Playing
    }

    /// Moves the player through the exit named by `token`.
    pub fn move_player(&mut self, token: &str) -> WarrenResult<String> {
        let direction: Direction = token.parse()?;
        self.perform(PlayerAction::Move(direction))
    }

    /// Picks up all treasure at the player's location.
    pub fn pick_treasure(&mut self) -> WarrenResult<String> {
        self.perform(PlayerAction::PickTreasure)
    }

    /// Picks up all arrows at the player's location.
    pub fn pick_arrow(&mut self) -> WarrenResult<String> {
        self.perform(PlayerAction::PickArrow)
    }

    /// Shoots an arrow `distance` caves in the direction named by `token`.
    pub fn shoot_arrow(&mut self, distance: i64, token: &str) -> WarrenResult<String> {
        let action = PlayerAction::shoot(distance, token)?;
        self.perform(action)
    }

    fn perform(&mut self, action: PlayerAction) -> WarrenResult<String> {
        action.execute(self).map(|outcome| outcome.to_string())
    }
}
