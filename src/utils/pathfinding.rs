//! # Pathfinding Algorithms
//!
//! Breadth-first distance levels over the location graph. Used to pick the
//! start and end caves, to check connectivity and to sense nearby Otyughs.

use crate::{LocationGraph, LocationId, WarrenResult};
use std::collections::{HashMap, VecDeque};

/// Distances from a BFS source to every reachable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsLevels {
    source: LocationId,
    order: Vec<LocationId>,
    distances: Vec<Option<usize>>,
}

impl BfsLevels {
    pub fn source(&self) -> LocationId {
        self.source
    }

    /// Distance to `id`, or `None` if it was not reached.
    pub fn distance(&self, id: LocationId) -> Option<usize> {
        self.distances.get(id).copied().flatten()
    }

    /// Number of reachable locations, the source included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reachable locations with their distance, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, usize)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.distance(id).map(|distance| (id, distance)))
    }

    /// Locations exactly `distance` steps away, in discovery order.
    pub fn at_distance(&self, distance: usize) -> Vec<LocationId> {
        self.iter()
            .filter(|&(_, d)| d == distance)
            .map(|(id, _)| id)
            .collect()
    }

    /// The levels as a plain map.
    pub fn to_map(&self) -> HashMap<LocationId, usize> {
        self.iter().collect()
    }
}

/// Runs a level-order traversal from `source`.
///
/// Exits are followed in canonical direction order. Visited marks live in a
/// buffer owned by this call, so repeated calls never see stale state.
///
/// # Examples
///
/// ```
/// use warren::{breadth_first_levels, Dungeon, FixedRandomizer, GenerationConfig};
///
/// let config = GenerationConfig::new(5, 4, 2, 20, false, 5);
/// let dungeon = Dungeon::new(&config, Box::new(FixedRandomizer::new(vec![2]).unwrap())).unwrap();
/// let levels = breadth_first_levels(dungeon.graph(), 1).unwrap();
/// assert_eq!(levels.distance(1), Some(0));
/// assert_eq!(levels.len(), 20);
/// ```
pub fn breadth_first_levels(graph: &LocationGraph, source: LocationId) -> WarrenResult<BfsLevels> {
    graph.location(source)?;

    let mut visited = vec![false; graph.len()];
    let mut distances = vec![None; graph.len()];
    let mut order = Vec::with_capacity(graph.len());
    let mut queue = VecDeque::new();

    visited[source] = true;
    distances[source] = Some(0);
    order.push(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current].unwrap_or(0) + 1;
        for (_, neighbor) in graph.locations()[current].neighbors().iter() {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            distances[neighbor] = Some(next_distance);
            order.push(neighbor);
            queue.push_back(neighbor);
        }
    }

    log::trace!(
        "BFS from location {} reached {} of {} locations",
        source,
        order.len(),
        graph.len()
    );

    Ok(BfsLevels {
        source,
        order,
        distances,
    })
}
