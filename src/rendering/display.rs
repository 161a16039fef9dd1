//! # Display Text
//!
//! Plain-text descriptions of the player, locations and the whole dungeon
//! for a console front end.

use crate::{Dungeon, GameStatistics, Location, Player};

/// Where the player is, what they carry and how many arrows are left.
///
/// # Examples
///
/// ```
/// use warren::{describe_player, Dungeon, FixedRandomizer, GenerationConfig};
///
/// let rng = FixedRandomizer::new(vec![2]).unwrap();
/// let dungeon = Dungeon::new(&GenerationConfig::for_testing(), Box::new(rng)).unwrap();
/// let text = describe_player(dungeon.player(), dungeon.current_location());
/// assert!(text.starts_with("The player is in CAVE: 1"));
/// ```
pub fn describe_player(player: &Player, location: &Location) -> String {
    let mut lines = vec![format!(
        "The player is in {}: {}",
        location.location_type(),
        location.id()
    )];

    let counts = player.treasure_counts();
    if counts.is_empty() {
        lines.push("Player has no treasure".to_string());
    } else {
        let held: String = counts
            .iter()
            .map(|(kind, count)| format!(" {}: {}", kind, count))
            .collect();
        lines.push(format!("Player has following treasures:{}", held));
    }

    if player.arrows() > 0 {
        lines.push(format!("Player has {} arrows", player.arrows()));
    } else {
        lines.push("Player has no arrows".to_string());
    }
    lines.join("\n")
}

/// Treasure and arrows lying at `location`.
pub fn describe_location(location: &Location) -> String {
    let mut lines = Vec::new();
    if location.treasures().is_empty() {
        lines.push("The cave has no treasures".to_string());
    } else {
        lines.push("Cave has following treasures -".to_string());
        lines.extend(location.treasures().iter().map(|treasure| treasure.to_string()));
    }

    if location.arrows() > 0 {
        lines.push(format!(
            "There are {} arrows in the current location",
            location.arrows()
        ));
    } else {
        lines.push("There are no arrows at the current location".to_string());
    }
    lines.join("\n")
}

/// Exits out of `location`, one per line.
pub fn describe_moves(location: &Location) -> String {
    let mut lines = vec!["Next possible moves:".to_string()];
    lines.extend(
        location
            .neighbors()
            .directions()
            .into_iter()
            .map(|direction| direction.to_string()),
    );
    lines.join("\n")
}

/// Full dump of the dungeon: every location with its exits and contents.
pub fn describe_dungeon(dungeon: &Dungeon) -> String {
    let graph = dungeon.graph();
    let mut lines = vec![format!(
        "Dungeon {}x{}{}, start {}, end {}",
        graph.rows(),
        graph.columns(),
        if graph.is_wrapping() { " (wrapping)" } else { "" },
        dungeon.start_cave().id(),
        dungeon.end_cave().id()
    )];
    lines.extend(graph.locations().iter().map(describe_row));
    lines.join("\n")
}

fn describe_row(location: &Location) -> String {
    let exits: Vec<String> = location
        .neighbors()
        .iter()
        .map(|(direction, id)| format!("{}->{}", direction.token(), id))
        .collect();
    let mut row = format!(
        "{:>4} {:<6} [{}]",
        location.id(),
        location.location_type().to_string(),
        exits.join(" ")
    );

    if !location.treasures().is_empty() {
        let names: Vec<String> = location.treasures().iter().map(|t| t.to_string()).collect();
        row.push_str(&format!(" treasure: {}", names.join(", ")));
    }
    if location.arrows() > 0 {
        row.push_str(&format!(" arrows: {}", location.arrows()));
    }
    if let Some(monster) = location.monster() {
        row.push_str(&format!(" otyugh: {}", monster.health()));
    }
    row
}

/// End-of-session summary.
pub fn describe_statistics(statistics: &GameStatistics) -> String {
    format!(
        "Moves made: {}\nArrows shot: {}\nMonsters killed: {}\nTreasure collected: {}\nArrows collected: {}",
        statistics.moves_made,
        statistics.arrows_shot,
        statistics.monsters_killed,
        statistics.treasure_collected,
        statistics.arrows_collected
    )
}
