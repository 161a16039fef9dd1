//! # Input Module
//!
//! Console input handling: a whitespace token reader and the interactive
//! command loop that drives a [`Dungeon`].

pub mod commands;

pub use commands::*;

use crate::rendering::{describe_location, describe_moves, describe_player, describe_statistics};
use crate::{recover_invalid, Dungeon, GameCompletionState, WarrenResult};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Splits a buffered reader into whitespace separated tokens.
///
/// Lines are pulled lazily, so a prompt can be written before the reader
/// blocks on the next token.
#[derive(Debug)]
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once input is exhausted.
    pub fn next_token(&mut self) -> WarrenResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Interactive command loop reading from `R` and writing to `W`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use warren::{CommandController, Dungeon, FixedRandomizer, GameCompletionState, GenerationConfig};
///
/// let rng = FixedRandomizer::new(vec![2]).unwrap();
/// let mut dungeon = Dungeon::new(&GenerationConfig::for_testing(), Box::new(rng)).unwrap();
/// let mut output = Vec::new();
///
/// let mut controller = CommandController::new(Cursor::new("P A\nQ\n"), &mut output);
/// assert_eq!(controller.play(&mut dungeon).unwrap(), GameCompletionState::Quit);
/// assert_eq!(dungeon.player().arrows(), 5);
/// ```
#[derive(Debug)]
pub struct CommandController<R: BufRead, W: Write> {
    input: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> CommandController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
        }
    }

    /// Plays until the end is reached, the player dies, the player quits or
    /// input runs out.
    pub fn play(&mut self, dungeon: &mut Dungeon) -> WarrenResult<GameCompletionState> {
        while !dungeon.is_game_over() {
            self.show_turn(dungeon)?;

            let keyword = match self.input.next_token()? {
                Some(token) => token,
                None => break,
            };
            let kind = match keyword.parse::<CommandKind>() {
                Ok(kind) => kind,
                Err(err) => {
                    log::warn!("Unrecognised command '{}'", keyword);
                    writeln!(self.output, "\n{}", bare_message(err))?;
                    continue;
                }
            };

            let command = match self.read_command(kind)? {
                Some(command) => command,
                None => break,
            };
            let message = match command {
                Ok(Command::Quit) => {
                    writeln!(self.output, "Game Quit!")?;
                    return Ok(GameCompletionState::Quit);
                }
                Ok(Command::Help) => {
                    writeln!(self.output, "{}", HELP_TEXT)?;
                    continue;
                }
                Ok(Command::Act(action)) => action.resolve(dungeon)?,
                Err(err) => recover_invalid(Err(err))?,
            };
            writeln!(self.output, "{}", message)?;
        }

        let state = dungeon.completion_state();
        if state == GameCompletionState::ReachedEnd {
            writeln!(
                self.output,
                "\nPlayer has reached the destination location {}. Game Over!!",
                dungeon.end_cave().id()
            )?;
        }
        writeln!(self.output, "\n{}", describe_statistics(dungeon.statistics()))?;
        self.output.flush()?;

        log::info!("Session finished: {:?}", state);
        Ok(state)
    }

    /// Prompts for each argument of `kind` and builds the command.
    ///
    /// A bad distance is reported before the direction is asked for.
    /// Returns `None` once input runs out.
    fn read_command(&mut self, kind: CommandKind) -> WarrenResult<Option<WarrenResult<Command>>> {
        let mut args = Vec::with_capacity(kind.arity());
        while args.len() < kind.arity() {
            writeln!(self.output, "{}", argument_prompt(kind, args.len()))?;
            let token = match self.input.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            };
            if kind == CommandKind::Shoot && args.is_empty() {
                if let Err(err) = parse_distance(&token) {
                    return Ok(Some(Err(err)));
                }
            }
            args.push(token);
        }

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        Ok(Some(Command::from_parts(kind, &args)))
    }

    fn show_turn(&mut self, dungeon: &Dungeon) -> WarrenResult<()> {
        let location = dungeon.current_location();
        writeln!(self.output)?;
        writeln!(self.output, "{}", describe_player(dungeon.player(), location))?;
        writeln!(self.output, "{}", describe_location(location))?;
        writeln!(self.output, "{}", describe_moves(location))?;
        writeln!(self.output, "Smell: {}", dungeon.check_smell())?;
        writeln!(
            self.output,
            "What do you want to do? Move, Pickup, Shoot, Help, Quit (M-P-S-H-Q)?"
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Consumes the controller, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn argument_prompt(kind: CommandKind, index: usize) -> &'static str {
    match (kind, index) {
        (CommandKind::Move, _) => {
            "\nPlease select your next move. Enter N: North, Enter S: South, Enter E: East, Enter W: West"
        }
        (CommandKind::Pickup, _) => "\nWhat? A/T",
        (CommandKind::Shoot, 0) => "\nNo. of caves (1-5)?",
        _ => "Where to?",
    }
}

fn bare_message(err: crate::WarrenError) -> String {
    match err {
        crate::WarrenError::InvalidAction(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedRandomizer, GenerationConfig};
    use std::io::Cursor;

    fn fixed_dungeon() -> Dungeon {
        let rng = FixedRandomizer::new(vec![2]).unwrap();
        Dungeon::new(&GenerationConfig::for_testing(), Box::new(rng)).unwrap()
    }

    fn run(input: &str, dungeon: &mut Dungeon) -> (GameCompletionState, String) {
        let mut controller = CommandController::new(Cursor::new(input.to_string()), Vec::new());
        let state = controller.play(dungeon).unwrap();
        let output = String::from_utf8(controller.into_output()).unwrap();
        (state, output)
    }

    #[test]
    fn test_token_reader_spans_lines() {
        let mut reader = TokenReader::new(Cursor::new("S 2\n\n  E  \n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("S"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("E"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_quit() {
        let mut dungeon = fixed_dungeon();
        let (state, output) = run("q", &mut dungeon);
        assert_eq!(state, GameCompletionState::Quit);
        assert!(output.contains("The player is in CAVE: 1"));
        assert!(output.contains("Smell: HIGH"));
        assert!(output.ends_with("Game Quit!\n"));
    }

    #[test]
    fn test_exhausted_input_keeps_playing_state() {
        let mut dungeon = fixed_dungeon();
        let (state, output) = run("M W\n", &mut dungeon);
        assert_eq!(state, GameCompletionState::Playing);
        assert!(output.contains("Player moved successfully to location 0"));
        assert!(output.contains("Moves made: 1"));
    }

    #[test]
    fn test_invalid_entries_do_not_end_session() {
        let mut dungeon = fixed_dungeon();
        let (state, output) = run("X\nM up\nP z\nS far\nQ\n", &mut dungeon);
        assert_eq!(state, GameCompletionState::Quit);
        assert!(output.contains("Invalid entry."));
        assert!(output.contains("Invalid direction 'up'"));
        assert!(output.contains("Invalid input for dist"));
        assert_eq!(dungeon.player().location(), 1);
    }

    #[test]
    fn test_shot_is_checked_once_every_argument_is_read() {
        let mut dungeon = fixed_dungeon();
        let (state, output) = run("S 0 E\nS 1 X\nS 1\nE\nQ\n", &mut dungeon);
        assert_eq!(state, GameCompletionState::Quit);
        assert_eq!(output.matches("Where to?").count(), 3);
        assert!(output.contains("Distance must be at least 1, got 0"));
        assert!(output.contains("Invalid direction 'X'"));
        assert!(output.contains("Player shot the monster, monster is injured"));
        assert_eq!(dungeon.player().arrows(), 2);
    }

    #[test]
    fn test_death_ends_session() {
        let mut dungeon = fixed_dungeon();
        let (state, output) = run("M E\nM W\n", &mut dungeon);
        assert_eq!(state, GameCompletionState::PlayerDied);
        assert!(output.contains("player got eaten by an Otyugh"));
        assert!(!output.contains("Player moved successfully"));
    }
}
