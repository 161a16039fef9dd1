//! # Command Definitions
//!
//! Console command keywords and parsing of their arguments.

use crate::{PlayerAction, WarrenError, WarrenResult};
use std::str::FromStr;

/// The leading keyword of a console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `M <direction>`
    Move,
    /// `P <A|T>`
    Pickup,
    /// `S <distance> <direction>`
    Shoot,
    /// `Q`
    Quit,
    /// `H`
    Help,
}

impl CommandKind {
    /// Number of argument tokens that follow the keyword.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Move | CommandKind::Pickup => 1,
            CommandKind::Shoot => 2,
            CommandKind::Quit | CommandKind::Help => 0,
        }
    }
}

impl FromStr for CommandKind {
    type Err = WarrenError;

    fn from_str(token: &str) -> WarrenResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "m" | "move" => Ok(CommandKind::Move),
            "p" | "pick" | "pickup" => Ok(CommandKind::Pickup),
            "s" | "shoot" => Ok(CommandKind::Shoot),
            "q" | "quit" => Ok(CommandKind::Quit),
            "h" | "help" | "?" => Ok(CommandKind::Help),
            _ => Err(WarrenError::InvalidAction("Invalid entry.".to_string())),
        }
    }
}

/// A fully parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(PlayerAction),
    Quit,
    Help,
}

impl Command {
    /// Builds a command from its keyword and argument tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{Command, CommandKind, Direction, PlayerAction};
    ///
    /// let command = Command::from_parts(CommandKind::Move, &["n"]).unwrap();
    /// assert_eq!(command, Command::Act(PlayerAction::Move(Direction::North)));
    /// ```
    pub fn from_parts(kind: CommandKind, args: &[&str]) -> WarrenResult<Self> {
        if args.len() < kind.arity() {
            return Err(WarrenError::InvalidAction(format!(
                "Missing arguments for {:?}",
                kind
            )));
        }

        match kind {
            CommandKind::Move => Ok(Command::Act(PlayerAction::Move(args[0].parse()?))),
            CommandKind::Pickup => parse_pickup(args[0]).map(Command::Act),
            CommandKind::Shoot => {
                let distance = parse_distance(args[0])?;
                PlayerAction::shoot(distance, args[1]).map(Command::Act)
            }
            CommandKind::Quit => Ok(Command::Quit),
            CommandKind::Help => Ok(Command::Help),
        }
    }
}

/// Parses the `A`/`T` argument of a pickup command.
pub fn parse_pickup(token: &str) -> WarrenResult<PlayerAction> {
    match token.trim().to_ascii_lowercase().as_str() {
        "a" => Ok(PlayerAction::PickArrow),
        "t" => Ok(PlayerAction::PickTreasure),
        _ => Err(WarrenError::InvalidAction("Invalid entry".to_string())),
    }
}

/// Parses the distance argument of a shoot command.
pub fn parse_distance(token: &str) -> WarrenResult<i64> {
    token
        .trim()
        .parse()
        .map_err(|_| WarrenError::InvalidAction("Invalid input for dist".to_string()))
}

/// Text shown for the help command.
pub const HELP_TEXT: &str = "Commands:
  M <N|S|E|W>       move through an exit
  P <A|T>           pick up arrows or treasure
  S <dist> <N|S|E|W> shoot an arrow across <dist> caves
  H                 show this help
  Q                 quit";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_keyword_parsing() {
        assert_eq!("M".parse::<CommandKind>().unwrap(), CommandKind::Move);
        assert_eq!("p".parse::<CommandKind>().unwrap(), CommandKind::Pickup);
        assert_eq!("Shoot".parse::<CommandKind>().unwrap(), CommandKind::Shoot);
        assert_eq!("q".parse::<CommandKind>().unwrap(), CommandKind::Quit);
        assert!(matches!(
            "X".parse::<CommandKind>(),
            Err(WarrenError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_commands_from_parts() {
        assert_eq!(
            Command::from_parts(CommandKind::Shoot, &["2", "e"]).unwrap(),
            Command::Act(PlayerAction::Shoot {
                distance: 2,
                direction: Direction::East
            })
        );
        assert_eq!(
            Command::from_parts(CommandKind::Pickup, &["t"]).unwrap(),
            Command::Act(PlayerAction::PickTreasure)
        );
        assert_eq!(
            Command::from_parts(CommandKind::Move, &["W"]).unwrap(),
            Command::Act(PlayerAction::Move(Direction::West))
        );
        assert_eq!(Command::from_parts(CommandKind::Quit, &[]).unwrap(), Command::Quit);
        assert_eq!(Command::from_parts(CommandKind::Help, &[]).unwrap(), Command::Help);
    }

    #[test]
    fn test_bad_arguments() {
        let cases: Vec<(CommandKind, &[&str])> = vec![
            (CommandKind::Move, &[]),
            (CommandKind::Move, &["up"]),
            (CommandKind::Pickup, &["x"]),
            (CommandKind::Shoot, &["far", "E"]),
            (CommandKind::Shoot, &["0", "E"]),
            (CommandKind::Shoot, &["2"]),
        ];
        for (kind, args) in cases {
            assert!(
                matches!(
                    Command::from_parts(kind, args),
                    Err(WarrenError::InvalidAction(_))
                ),
                "{:?} {:?} should be rejected",
                kind,
                args
            );
        }
    }

    #[test]
    fn test_distance_message() {
        match parse_distance("two") {
            Err(WarrenError::InvalidAction(message)) => {
                assert_eq!(message, "Invalid input for dist")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(parse_distance(" 3 ").unwrap(), 3);
    }
}
