//! # Warren Main Entry Point
//!
//! Builds a dungeon from command line flags (and optionally a JSON config
//! file), then plays it on stdin/stdout.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use warren::{
    describe_dungeon, CommandController, Dungeon, GameCompletionState, GenerationConfig,
    Randomizer, StdRandomizer, WarrenResult,
};

/// Command line arguments for Warren.
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(about = "Hunt Otyughs through a maze of caves and tunnels")]
#[command(version)]
struct Args {
    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Extra edges added on top of the spanning tree
    #[arg(short, long)]
    interconnectivity: Option<usize>,

    /// Minimum percentage of caves holding treasure
    #[arg(short, long)]
    treasure_percent: Option<u32>,

    /// Wrap edges around to the opposite side of the grid
    #[arg(short, long)]
    wrapping: bool,

    /// Number of Otyughs, including the one guarding the end cave
    #[arg(short, long)]
    monsters: Option<usize>,

    /// Player name
    #[arg(long)]
    name: Option<String>,

    /// Random seed for a replayable dungeon
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with a generation config; flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full dungeon layout before playing
    #[arg(long)]
    dump: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> WarrenResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    log::info!("Starting Warren v{}", warren::VERSION);

    let config = build_config(&args)?;
    let rng: Box<dyn Randomizer> = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Box::new(StdRandomizer::seeded(seed))
        }
        None => Box::new(StdRandomizer::new()),
    };

    let mut dungeon = match Dungeon::new(&config, rng) {
        Ok(dungeon) => dungeon,
        Err(err) => {
            log::error!("Failed to create dungeon: {}", err);
            return Err(err);
        }
    };

    if args.dump {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", describe_dungeon(&dungeon))?;
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut controller = CommandController::new(stdin, stdout);
    let state = controller.play(&mut dungeon)?;

    if state == GameCompletionState::Playing {
        log::info!("Input closed before the game ended");
    }
    Ok(())
}

/// Initializes `env_logger`, letting `RUST_LOG` override the flag.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Loads the config file if one was given and applies flag overrides.
fn build_config(args: &Args) -> WarrenResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            GenerationConfig::from_json_file(path)?
        }
        None => GenerationConfig::default(),
    };

    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(interconnectivity) = args.interconnectivity {
        config.interconnectivity = interconnectivity;
    }
    if let Some(percent) = args.treasure_percent {
        config.treasure_percent = percent;
    }
    if args.wrapping {
        config.wrapping = true;
    }
    if let Some(monsters) = args.monsters {
        config.monster_count = monsters;
    }
    if let Some(name) = &args.name {
        config.player_name = name.clone();
    }

    config.validate()?;
    log::debug!("Generation config: {:?}", config);
    Ok(config)
}
