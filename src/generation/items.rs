//! # Item Generation
//!
//! Scatters treasure over caves and arrows over every location.

use crate::config::{MAX_ARROWS_PER_LOCATION, MAX_TREASURES_PER_CAVE};
use crate::{ceil_percent, shuffled, LocationGraph, Populator, Randomizer, Treasure, WarrenResult};

/// Places one to three treasures in each of a percentage of the caves.
#[derive(Debug, Clone)]
pub struct TreasurePopulator {
    percent: u32,
}

impl TreasurePopulator {
    /// `percent` is the effective percentage, already adjusted at random.
    pub fn new(percent: u32) -> Self {
        Self { percent }
    }
}

impl Populator for TreasurePopulator {
    fn populate(&self, graph: &mut LocationGraph, rng: &mut dyn Randomizer) -> WarrenResult<()> {
        let caves = graph.cave_ids();
        let target = ceil_percent(self.percent, caves.len());

        for id in shuffled(rng, &caves).into_iter().take(target) {
            let items = rng
                .next_int(0, MAX_TREASURES_PER_CAVE)
                .saturating_add(1)
                .min(MAX_TREASURES_PER_CAVE);
            let location = graph.location_mut(id)?;
            for _ in 0..items {
                let kind = Treasure::ALL[rng.next_int(0, 3) as usize % Treasure::ALL.len()];
                location.add_treasure(kind);
            }
        }

        log::debug!(
            "{}: {}% of {} caves, {} stocked",
            self.populator_type(),
            self.percent,
            caves.len(),
            target
        );
        Ok(())
    }

    fn populator_type(&self) -> &'static str {
        "TreasurePopulator"
    }
}

/// Drops a small stack of arrows on a percentage of all locations.
#[derive(Debug, Clone)]
pub struct ArrowPopulator {
    percent: u32,
}

impl ArrowPopulator {
    pub fn new(percent: u32) -> Self {
        Self { percent }
    }
}

impl Populator for ArrowPopulator {
    fn populate(&self, graph: &mut LocationGraph, rng: &mut dyn Randomizer) -> WarrenResult<()> {
        let ids = graph.location_ids();
        let target = ceil_percent(self.percent, ids.len());

        for id in shuffled(rng, &ids).into_iter().take(target) {
            let count = rng.next_int(1, MAX_ARROWS_PER_LOCATION);
            graph.location_mut(id)?.set_arrows(count);
        }

        log::debug!(
            "{}: {}% of {} locations, {} stocked",
            self.populator_type(),
            self.percent,
            ids.len(),
            target
        );
        Ok(())
    }

    fn populator_type(&self) -> &'static str {
        "ArrowPopulator"
    }
}
