//! # Encounter Generation
//!
//! Start and end cave selection and Otyugh placement.

use crate::config::MIN_START_END_DISTANCE;
use crate::{shuffled, LocationGraph, LocationId, Populator, Randomizer, WarrenError, WarrenResult};

/// Picks the start and end caves.
///
/// Candidate starts are tried in shuffled cave order. For each one, the end
/// is the first cave in BFS discovery order that lies at least
/// [`MIN_START_END_DISTANCE`] steps away. Fails when no cave has such a
/// partner.
///
/// # Examples
///
/// ```
/// use warren::{select_endpoints, FixedRandomizer, GenerationConfig, Generator, KruskalMazeGenerator};
///
/// let mut rng = FixedRandomizer::new(vec![2]).unwrap();
/// let graph = KruskalMazeGenerator::new()
///     .generate(&GenerationConfig::for_testing(), &mut rng)
///     .unwrap();
/// assert_eq!(select_endpoints(&graph, &mut rng).unwrap(), (1, 11));
/// ```
pub fn select_endpoints(
    graph: &LocationGraph,
    rng: &mut dyn Randomizer,
) -> WarrenResult<(LocationId, LocationId)> {
    let candidates = shuffled(rng, &graph.cave_ids());

    for start in candidates {
        let levels = graph.bfs(start)?;
        let end = levels.iter().find(|&(id, distance)| {
            distance >= MIN_START_END_DISTANCE && graph.locations()[id].is_cave()
        });
        if let Some((end, distance)) = end {
            log::debug!(
                "Start cave {} and end cave {} are {} steps apart",
                start,
                end,
                distance
            );
            return Ok((start, end));
        }
    }

    Err(WarrenError::InvalidConfig(format!(
        "World too small: no two caves are {} or more steps apart",
        MIN_START_END_DISTANCE
    )))
}

/// Places Otyughs: always one in the end cave, the rest in random caves
/// other than the start and the end.
#[derive(Debug, Clone)]
pub struct MonsterPopulator {
    count: usize,
    start: LocationId,
    end: LocationId,
}

impl MonsterPopulator {
    pub fn new(count: usize, start: LocationId, end: LocationId) -> Self {
        Self { count, start, end }
    }
}

impl Populator for MonsterPopulator {
    fn populate(&self, graph: &mut LocationGraph, rng: &mut dyn Randomizer) -> WarrenResult<()> {
        let caves = graph.cave_ids();
        if self.count == 0 || self.count > caves.len().saturating_sub(1) {
            return Err(WarrenError::InvalidConfig(format!(
                "Cannot place {} monsters in a dungeon with {} caves",
                self.count,
                caves.len()
            )));
        }

        graph.location_mut(self.end)?.place_monster();

        let eligible: Vec<LocationId> = caves
            .into_iter()
            .filter(|&id| id != self.start && id != self.end)
            .collect();
        for id in shuffled(rng, &eligible).into_iter().take(self.count - 1) {
            graph.location_mut(id)?.place_monster();
        }

        log::debug!(
            "{}: placed {} monsters, end cave {}",
            self.populator_type(),
            self.count,
            self.end
        );
        Ok(())
    }

    fn populator_type(&self) -> &'static str {
        "MonsterPopulator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedRandomizer, GenerationConfig, Generator, KruskalMazeGenerator, StdRandomizer};

    fn fixed_graph() -> (LocationGraph, FixedRandomizer) {
        let mut rng = FixedRandomizer::new(vec![2]).unwrap();
        let graph = KruskalMazeGenerator::new()
            .generate(&GenerationConfig::for_testing(), &mut rng)
            .unwrap();
        (graph, rng)
    }

    #[test]
    fn test_endpoints_in_fixed_world() {
        let (graph, mut rng) = fixed_graph();
        let (start, end) = select_endpoints(&graph, &mut rng).unwrap();
        assert_eq!((start, end), (1, 11));
        assert_eq!(graph.bfs(start).unwrap().distance(end), Some(6));
    }

    #[test]
    fn test_endpoints_respect_minimum_distance() {
        for seed in 0..25 {
            let mut rng = StdRandomizer::seeded(seed);
            let config = GenerationConfig::new(6, 6, 2, 20, seed % 3 == 0, 1);
            let graph = KruskalMazeGenerator::new().generate(&config, &mut rng).unwrap();
            if let Ok((start, end)) = select_endpoints(&graph, &mut rng) {
                assert!(graph.locations()[start].is_cave());
                assert!(graph.locations()[end].is_cave());
                let distance = graph.bfs(start).unwrap().distance(end).unwrap();
                assert!(distance >= MIN_START_END_DISTANCE);
            }
        }
    }

    #[test]
    fn test_tiny_world_has_no_endpoints() {
        let mut rng = FixedRandomizer::new(vec![2]).unwrap();
        let config = GenerationConfig::new(2, 2, 0, 20, false, 1);
        let graph = KruskalMazeGenerator::new().generate(&config, &mut rng).unwrap();
        assert!(matches!(
            select_endpoints(&graph, &mut rng),
            Err(WarrenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_monsters_in_fixed_world() {
        let (mut graph, mut rng) = fixed_graph();
        MonsterPopulator::new(5, 1, 11)
            .populate(&mut graph, &mut rng)
            .unwrap();

        let with_monsters: Vec<LocationId> = graph
            .locations()
            .iter()
            .filter(|location| location.has_monster())
            .map(|location| location.id())
            .collect();
        assert_eq!(with_monsters, vec![2, 3, 4, 5, 11]);
    }

    #[test]
    fn test_start_cave_is_never_guarded() {
        for seed in 0..10 {
            let mut rng = StdRandomizer::seeded(seed);
            let (mut graph, _) = fixed_graph();
            let caves = graph.cave_ids().len();
            MonsterPopulator::new(caves - 1, 1, 11)
                .populate(&mut graph, &mut rng)
                .unwrap();
            assert!(!graph.locations()[1].has_monster());
            assert!(graph.locations()[11].has_monster());
            for location in graph.locations() {
                if location.has_monster() {
                    assert!(location.is_cave());
                }
            }
        }
    }

    #[test]
    fn test_too_many_monsters() {
        let (mut graph, mut rng) = fixed_graph();
        let caves = graph.cave_ids().len();
        assert!(matches!(
            MonsterPopulator::new(caves, 1, 11).populate(&mut graph, &mut rng),
            Err(WarrenError::InvalidConfig(_))
        ));
    }
}
