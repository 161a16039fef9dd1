//! # World Representation
//!
//! The location graph produced by generation: caves and tunnels linked by
//! per-direction exits, plus whatever treasure, arrows and Otyughs they hold.

use crate::utils::pathfinding::{breadth_first_levels, BfsLevels};
use crate::{
    Direction, LocationId, LocationType, Monster, Smell, Treasure, WarrenError, WarrenResult,
};
use serde::{Deserialize, Serialize};

/// Exits of a location, one optional slot per direction.
///
/// Slots are stored in [`Direction::ALL`] order so iteration is stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    slots: [Option<LocationId>; 4],
}

impl Neighbors {
    /// Location reached by leaving in `direction`, if there is an exit.
    pub fn get(&self, direction: Direction) -> Option<LocationId> {
        self.slots[direction.index()]
    }

    /// Whether there is an exit in `direction`.
    pub fn contains(&self, direction: Direction) -> bool {
        self.get(direction).is_some()
    }

    /// Exits in canonical direction order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, LocationId)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.get(direction).map(|id| (direction, id)))
    }

    /// Directions that have an exit, in canonical order.
    pub fn directions(&self) -> Vec<Direction> {
        self.iter().map(|(direction, _)| direction).collect()
    }

    /// Number of exits.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First exit, in canonical order, other than `arrived_from`.
    ///
    /// Used to carry something through a tunnel: entering from the west side
    /// leaves by whichever other exit the tunnel has.
    pub fn other_exit(&self, arrived_from: Direction) -> Option<Direction> {
        self.iter()
            .map(|(direction, _)| direction)
            .find(|&direction| direction != arrived_from)
    }

    pub(crate) fn set(&mut self, direction: Direction, id: LocationId) {
        self.slots[direction.index()] = Some(id);
    }
}

/// A single node of the dungeon.
///
/// Treasure and monsters are only ever placed in caves; arrows may lie in
/// caves and tunnels alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    kind: LocationType,
    neighbors: Neighbors,
    treasures: Vec<Treasure>,
    arrows: u32,
    monster: Option<Monster>,
}

impl Location {
    /// Creates an unlinked, empty location. It counts as a cave until
    /// [`LocationGraph::classify`] runs.
    pub fn new(id: LocationId) -> Self {
        Self {
            id,
            kind: LocationType::Cave,
            neighbors: Neighbors::default(),
            treasures: Vec::new(),
            arrows: 0,
            monster: None,
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn location_type(&self) -> LocationType {
        self.kind
    }

    pub fn is_cave(&self) -> bool {
        self.kind == LocationType::Cave
    }

    pub fn is_tunnel(&self) -> bool {
        self.kind == LocationType::Tunnel
    }

    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    /// Neighbor reached by leaving in `direction`.
    pub fn neighbor(&self, direction: Direction) -> Option<LocationId> {
        self.neighbors.get(direction)
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub fn has_monster(&self) -> bool {
        self.monster.is_some()
    }

    /// Whether an Otyugh with health left is here.
    pub fn has_living_monster(&self) -> bool {
        self.monster.is_some_and(|monster| monster.is_alive())
    }

    pub(crate) fn link(&mut self, direction: Direction, id: LocationId) {
        self.neighbors.set(direction, id);
    }

    pub(crate) fn add_treasure(&mut self, treasure: Treasure) {
        self.treasures.push(treasure);
    }

    pub(crate) fn take_treasures(&mut self) -> Vec<Treasure> {
        std::mem::take(&mut self.treasures)
    }

    pub(crate) fn set_arrows(&mut self, count: u32) {
        self.arrows = count;
    }

    pub(crate) fn take_arrows(&mut self) -> u32 {
        std::mem::take(&mut self.arrows)
    }

    pub(crate) fn place_monster(&mut self) {
        self.monster = Some(Monster::new());
    }

    pub(crate) fn monster_mut(&mut self) -> Option<&mut Monster> {
        self.monster.as_mut()
    }
}

/// The full set of locations making up one dungeon.
///
/// Location ids equal their index, so lookups are direct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationGraph {
    rows: usize,
    columns: usize,
    wrapping: bool,
    locations: Vec<Location>,
}

impl LocationGraph {
    /// Creates `rows * columns` unlinked locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::LocationGraph;
    ///
    /// let graph = LocationGraph::new(3, 4, false);
    /// assert_eq!(graph.len(), 12);
    /// assert_eq!(graph.locations()[5].id(), 5);
    /// ```
    pub fn new(rows: usize, columns: usize, wrapping: bool) -> Self {
        let locations = (0..rows * columns).map(Location::new).collect();
        Self {
            rows,
            columns,
            wrapping,
            locations,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Read-only view of every location, ordered by id.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Like [`get`](Self::get) but reports unknown ids as an error.
    pub fn location(&self, id: LocationId) -> WarrenResult<&Location> {
        self.locations
            .get(id)
            .ok_or(WarrenError::UnknownLocation(id))
    }

    pub(crate) fn location_mut(&mut self, id: LocationId) -> WarrenResult<&mut Location> {
        self.locations
            .get_mut(id)
            .ok_or(WarrenError::UnknownLocation(id))
    }

    /// Ids of every cave, in id order.
    pub fn cave_ids(&self) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|location| location.is_cave())
            .map(Location::id)
            .collect()
    }

    /// Ids of every location, in id order.
    pub fn location_ids(&self) -> Vec<LocationId> {
        (0..self.locations.len()).collect()
    }

    /// Registers mutual exits: `from` leads to `to` via `direction`, and `to`
    /// leads back via the opposite direction.
    pub(crate) fn connect(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
    ) -> WarrenResult<()> {
        self.location_mut(from)?.link(direction, to);
        self.location_mut(to)?.link(direction.opposite(), from);
        Ok(())
    }

    /// Fixes every location's type from its number of exits.
    pub(crate) fn classify(&mut self) {
        for location in &mut self.locations {
            location.kind = LocationType::from_degree(location.neighbors.len());
        }
    }

    /// Distance from `source` to every reachable location.
    pub fn bfs(&self, source: LocationId) -> WarrenResult<BfsLevels> {
        breadth_first_levels(self, source)
    }

    /// Strength of the Otyugh stench at `id`.
    ///
    /// A living Otyugh one step away, or two or more two steps away, smell
    /// strongly. A single Otyugh two steps away smells faintly. Dead
    /// Otyughs do not smell.
    pub fn smell_at(&self, id: LocationId) -> WarrenResult<Smell> {
        let levels = self.bfs(id)?;
        let living = |ids: Vec<LocationId>| {
            ids.into_iter()
                .filter(|&id| self.locations[id].has_living_monster())
                .count()
        };

        if living(levels.at_distance(1)) > 0 {
            return Ok(Smell::High);
        }
        Ok(match living(levels.at_distance(2)) {
            0 => Smell::None,
            1 => Smell::Low,
            _ => Smell::High,
        })
    }

    /// Whether every location can be reached from every other.
    pub fn is_connected(&self) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        let reached = ::pathfinding::prelude::bfs_reach(0, |&id: &LocationId| {
            self.locations[id]
                .neighbors
                .iter()
                .map(|(_, next)| next)
                .collect::<Vec<_>>()
        })
        .count();
        reached == self.locations.len()
    }
}
