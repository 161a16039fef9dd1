//! # Dungeon Generation
//!
//! Maze layout generation using a randomly weighted minimum spanning tree.
//!
//! The generator creates dungeons by:
//! 1. Numbering every grid cell row by row
//! 2. Weighting every adjacent-cell edge (and wrap-around edge) at random
//! 3. Keeping a Kruskal minimum spanning tree, so every cell is reachable
//! 4. Adding back `interconnectivity` of the discarded edges to form loops
//! 5. Linking exits and classifying each location as cave or tunnel

use crate::config::MAX_EDGE_WEIGHT;
use crate::{
    shuffled, Direction, GenerationConfig, Generator, LocationGraph, LocationId, Randomizer,
    WarrenError, WarrenResult,
};

/// A candidate passage between two grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: LocationId,
    pub dest: LocationId,
    pub weight: u32,
}

impl Edge {
    pub fn new(src: LocationId, dest: LocationId, weight: u32) -> Self {
        Self { src, dest, weight }
    }
}

/// Union-find over location ids with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `size` singleton sets.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Representative of the set containing `item`.
    pub fn find(&mut self, item: usize) -> usize {
        let mut root = item;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = item;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already
    /// the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

/// Primary maze generator using Kruskal's algorithm over a weighted grid.
#[derive(Debug, Clone, Default)]
pub struct KruskalMazeGenerator;

impl KruskalMazeGenerator {
    /// Creates a new maze generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{FixedRandomizer, GenerationConfig, Generator, KruskalMazeGenerator};
    ///
    /// let generator = KruskalMazeGenerator::new();
    /// let mut rng = FixedRandomizer::new(vec![2]).unwrap();
    /// let graph = generator
    ///     .generate(&GenerationConfig::for_testing(), &mut rng)
    ///     .unwrap();
    /// assert_eq!(graph.len(), 20);
    /// assert!(graph.is_connected());
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Builds every grid edge with a random weight.
    ///
    /// Horizontal edges come first, then vertical ones, then (when wrapping)
    /// row wraps and column wraps, each in row-major order.
    pub fn grid_edges(
        &self,
        rows: usize,
        columns: usize,
        wrapping: bool,
        rng: &mut dyn Randomizer,
    ) -> Vec<Edge> {
        let id = |row: usize, column: usize| row * columns + column;
        let mut edges = Vec::new();

        for row in 0..rows {
            for column in 0..columns.saturating_sub(1) {
                let weight = rng.next_int(1, MAX_EDGE_WEIGHT);
                edges.push(Edge::new(id(row, column), id(row, column + 1), weight));
            }
        }
        for row in 0..rows.saturating_sub(1) {
            for column in 0..columns {
                let weight = rng.next_int(1, MAX_EDGE_WEIGHT);
                edges.push(Edge::new(id(row, column), id(row + 1, column), weight));
            }
        }

        if wrapping {
            for row in 0..rows {
                let weight = rng.next_int(0, MAX_EDGE_WEIGHT);
                edges.push(Edge::new(id(row, 0), id(row, columns - 1), weight));
            }
            for column in 0..columns {
                let weight = rng.next_int(0, MAX_EDGE_WEIGHT);
                edges.push(Edge::new(id(0, column), id(rows - 1, column), weight));
            }
        }

        edges
    }

    /// Splits `edges` into a minimum spanning tree over `node_count` nodes
    /// and the edges left over, both in their original relative order.
    pub fn spanning_tree(&self, edges: &[Edge], node_count: usize) -> (Vec<Edge>, Vec<Edge>) {
        let mut by_weight: Vec<usize> = (0..edges.len()).collect();
        by_weight.sort_by_key(|&index| edges[index].weight);

        let target = node_count.saturating_sub(1);
        let mut sets = DisjointSet::new(node_count);
        let mut in_tree = vec![false; edges.len()];
        let mut tree = Vec::with_capacity(target);

        for index in by_weight {
            if tree.len() == target {
                break;
            }
            let edge = edges[index];
            if sets.union(edge.src, edge.dest) {
                in_tree[index] = true;
                tree.push(edge);
            }
        }

        let leftover = edges
            .iter()
            .zip(&in_tree)
            .filter(|(_, &kept)| !kept)
            .map(|(&edge, _)| edge)
            .collect();

        (tree, leftover)
    }

    /// Maps an edge onto the direction leading from `src` to `dest`.
    ///
    /// Checked in order: a delta of 1 runs east, a delta of `columns - 1` is
    /// a row wrap running west, a delta of `columns` runs south, and any
    /// larger delta is a column wrap running north.
    pub fn edge_direction(edge: &Edge, columns: usize) -> Option<Direction> {
        let delta = edge.dest.checked_sub(edge.src)?;
        if delta == 0 {
            None
        } else if delta == 1 {
            Some(Direction::East)
        } else if delta == columns.wrapping_sub(1) {
            Some(Direction::West)
        } else if delta == columns {
            Some(Direction::South)
        } else if delta > columns {
            Some(Direction::North)
        } else {
            None
        }
    }

    /// Registers mutual exits for every edge, then classifies locations.
    fn link(&self, graph: &mut LocationGraph, edges: &[Edge]) -> WarrenResult<()> {
        let columns = graph.columns();
        for edge in edges {
            if let Some(direction) = Self::edge_direction(edge, columns) {
                graph.connect(edge.src, direction, edge.dest)?;
            }
        }
        graph.classify();
        Ok(())
    }
}

impl Generator<LocationGraph> for KruskalMazeGenerator {
    fn generate(
        &self,
        config: &GenerationConfig,
        rng: &mut dyn Randomizer,
    ) -> WarrenResult<LocationGraph> {
        config.validate()?;

        let node_count = config.cell_count();
        let edges = self.grid_edges(config.rows, config.columns, config.wrapping, rng);
        let (mut maze, leftover) = self.spanning_tree(&edges, node_count);

        if config.interconnectivity > leftover.len() {
            return Err(WarrenError::InvalidConfig(format!(
                "Interconnectivity {} exceeds the {} available extra edges",
                config.interconnectivity,
                leftover.len()
            )));
        }
        let extras = shuffled(rng, &leftover);
        maze.extend(extras.into_iter().take(config.interconnectivity));

        log::debug!(
            "{}: {} candidate edges, {} kept ({} extra)",
            self.generator_type(),
            edges.len(),
            maze.len(),
            config.interconnectivity
        );

        let mut graph = LocationGraph::new(config.rows, config.columns, config.wrapping);
        self.link(&mut graph, &maze)?;
        self.validate(&graph, config)?;
        Ok(graph)
    }

    fn validate(&self, graph: &LocationGraph, config: &GenerationConfig) -> WarrenResult<()> {
        if graph.len() != config.cell_count() {
            return Err(WarrenError::InvalidConfig(format!(
                "Expected {} locations, generated {}",
                config.cell_count(),
                graph.len()
            )));
        }
        if !graph.is_connected() {
            return Err(WarrenError::InvalidConfig(
                "Generated maze is not connected".to_string(),
            ));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "KruskalMazeGenerator"
    }
}
