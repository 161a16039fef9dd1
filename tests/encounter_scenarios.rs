//! Deterministic gameplay scenarios on worlds built from a fixed random
//! sequence.

use warren::{Dungeon, FixedRandomizer, GameCompletionState, GenerationConfig, Smell, Treasure};

fn fixed_world(config: GenerationConfig, value: u32) -> Dungeon {
    let rng = FixedRandomizer::new(vec![value]).unwrap();
    Dungeon::new(&config, Box::new(rng)).unwrap()
}

fn monster_health(dungeon: &Dungeon, id: usize) -> u32 {
    dungeon.location(id).unwrap().monster().unwrap().health()
}

#[test]
fn test_shooting_the_neighbouring_monster() {
    let mut dungeon = fixed_world(GenerationConfig::for_testing(), 2);
    assert_eq!(dungeon.start_cave().id(), 1);
    assert_eq!(dungeon.player().arrows(), 3);
    assert_eq!(monster_health(&dungeon, 2), 100);

    let message = dungeon.shoot_arrow(1, "E").unwrap();
    assert!(message.contains("monster is injured"));
    assert_eq!(monster_health(&dungeon, 2), 50);

    let message = dungeon.shoot_arrow(1, "E").unwrap();
    assert!(message.contains("monster has been killed"));
    assert_eq!(monster_health(&dungeon, 2), 0);

    let message = dungeon.shoot_arrow(1, "E").unwrap();
    assert!(message.contains("shot an arrow into the darkness"));
    assert_eq!(dungeon.player().arrows(), 0);
    assert_eq!(monster_health(&dungeon, 2), 0);
}

#[test]
fn test_walking_into_a_healthy_monster() {
    let mut dungeon = fixed_world(GenerationConfig::for_testing(), 2);
    let message = dungeon.move_player("E").unwrap();
    assert!(message.contains("player got eaten"));
    assert!(!dungeon.player().is_alive());
    assert_eq!(dungeon.completion_state(), GameCompletionState::PlayerDied);

    let message = dungeon.move_player("W").unwrap();
    assert_eq!(message, "The game is over, no further actions are possible");
    assert_eq!(dungeon.player().location(), 2);
}

#[test]
fn test_escaping_an_injured_monster_on_even_draw() {
    let mut dungeon = fixed_world(GenerationConfig::for_testing(), 2);
    dungeon.shoot_arrow(1, "E").unwrap();

    let message = dungeon.move_player("E").unwrap();
    assert_eq!(
        message,
        "Player escaped successfully from an injured Otyugh, and moved to location 2"
    );
    assert!(dungeon.player().is_alive());
    assert_eq!(dungeon.player().location(), 2);
}

#[test]
fn test_eaten_by_an_injured_monster_on_odd_draw() {
    // Same layout as the even case, only the replayed value differs
    let mut dungeon = fixed_world(GenerationConfig::for_testing(), 1);
    assert_eq!(dungeon.start_cave().id(), 1);
    assert_eq!(
        dungeon.location(1).unwrap().treasures(),
        &[Treasure::Ruby, Treasure::Ruby]
    );
    dungeon.shoot_arrow(1, "E").unwrap();
    assert_eq!(monster_health(&dungeon, 2), 50);

    let message = dungeon.move_player("E").unwrap();
    assert!(message.contains("player got eaten"));
    assert!(!dungeon.player().is_alive());
}

#[test]
fn test_arrow_into_a_wall() {
    let mut dungeon = fixed_world(GenerationConfig::for_testing(), 2);
    for distance in [1, 4] {
        let message = dungeon.shoot_arrow(distance, "N").unwrap();
        assert_eq!(message, "You shot an arrow into the darkness");
    }
    assert_eq!(dungeon.player().arrows(), 3);
}

#[test]
fn test_pickup_round_trip() {
    let mut dungeon = fixed_world(GenerationConfig::for_testing(), 2);
    let cave = dungeon.current_location().clone();
    assert_eq!(cave.treasures(), &[Treasure::Sapphire; 3]);
    assert_eq!(cave.arrows(), 2);

    assert_eq!(dungeon.pick_treasure().unwrap(), "Treasure picked up");
    assert_eq!(dungeon.pick_arrow().unwrap(), "Arrow picked up");

    assert!(dungeon.current_location().treasures().is_empty());
    assert_eq!(dungeon.current_location().arrows(), 0);
    assert_eq!(dungeon.player().treasures(), cave.treasures());
    assert_eq!(dungeon.player().arrows(), 3 + cave.arrows());

    assert_eq!(
        dungeon.pick_treasure().unwrap(),
        "No treasure present at the location"
    );
    assert_eq!(
        dungeon.pick_arrow().unwrap(),
        "No arrow present at the location"
    );
}

#[test]
fn test_smell_fades_with_distance() {
    let mut dungeon = fixed_world(GenerationConfig::new(5, 4, 2, 20, false, 2), 2);
    assert_eq!(dungeon.check_smell(), Smell::High);

    dungeon.move_player("W").unwrap();
    assert_eq!(dungeon.check_smell(), Smell::Low);

    dungeon.move_player("E").unwrap();
    dungeon.shoot_arrow(1, "E").unwrap();
    dungeon.shoot_arrow(1, "E").unwrap();
    assert_eq!(dungeon.check_smell(), Smell::None);
}

#[test]
fn test_walk_to_the_end_cave() {
    let mut dungeon = fixed_world(GenerationConfig::new(4, 4, 4, 20, false, 1), 2);
    assert_eq!(dungeon.start_cave().id(), 1);
    assert_eq!(dungeon.end_cave().id(), 15);

    for token in ["S", "S", "W", "S", "E", "E"] {
        let message = dungeon.move_player(token).unwrap();
        assert!(message.starts_with("Player moved successfully"), "{}", message);
    }
    assert_eq!(dungeon.player().location(), 14);

    // The end cave is always guarded
    assert!(dungeon.shoot_arrow(1, "E").unwrap().contains("injured"));
    assert!(dungeon.shoot_arrow(1, "E").unwrap().contains("killed"));

    assert_eq!(
        dungeon.move_player("E").unwrap(),
        "Player moved successfully to location 15"
    );
    assert!(dungeon.has_reached_end());
    assert_eq!(dungeon.completion_state(), GameCompletionState::ReachedEnd);
    assert_eq!(dungeon.statistics().moves_made, 7);
}

#[test]
fn test_walk_into_the_guarded_end_cave() {
    let mut dungeon = fixed_world(GenerationConfig::new(4, 4, 4, 20, false, 1), 2);
    for token in ["S", "S", "W", "S", "E", "E", "E"] {
        dungeon.move_player(token).unwrap();
    }
    assert!(dungeon.has_reached_end());
    assert!(!dungeon.player().is_alive());
    assert_eq!(dungeon.completion_state(), GameCompletionState::PlayerDied);
}
