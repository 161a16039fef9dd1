//! Performance and scale tests for maze generation.

use std::time::Instant;
use warren::{
    Dungeon, GenerationConfig, Generator, KruskalMazeGenerator, StdRandomizer, WarrenResult,
};

#[test]
fn test_large_grid_generation() -> WarrenResult<()> {
    let config = GenerationConfig::new(60, 60, 50, 20, false, 10);
    let start = Instant::now();
    let dungeon = Dungeon::new(&config, Box::new(StdRandomizer::seeded(2024)))?;
    let elapsed = start.elapsed();

    println!("Generated 60x60 dungeon in {:?}", elapsed);

    assert!(dungeon.graph().is_connected());
    let levels = dungeon.bfs(dungeon.start_cave().id())?;
    assert_eq!(levels.len(), 3600);
    Ok(())
}

#[test]
fn test_large_wrapping_grid() -> WarrenResult<()> {
    let config = GenerationConfig::new(80, 75, 100, 20, true, 1);
    let mut rng = StdRandomizer::seeded(99);
    let graph = KruskalMazeGenerator::new().generate(&config, &mut rng)?;

    assert_eq!(graph.len(), 6000);
    assert!(graph.is_connected());
    for location in graph.locations() {
        assert_eq!(location.is_tunnel(), location.neighbors().len() == 2);
    }
    Ok(())
}

#[test]
fn test_repeated_bfs_performance() -> WarrenResult<()> {
    let config = GenerationConfig::new(40, 40, 20, 20, true, 5);
    let dungeon = Dungeon::new(&config, Box::new(StdRandomizer::seeded(5)))?;

    let start = Instant::now();
    let iterations = 100;
    for _ in 0..iterations {
        let _ = dungeon.check_smell();
    }
    let avg = start.elapsed() / iterations;
    println!("Average smell check time: {:?}", avg);

    assert_eq!(dungeon.bfs(0)?.len(), 1600);
    Ok(())
}
