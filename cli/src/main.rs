use anyhow::Context;
use clap::{Parser, Subcommand};
use sos_core::{Coord, GameEngine, Variant};
use sos_protocol::{PlayerKind, Recording};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

mod config;
mod session;

use config::Config;
use session::Session;

#[derive(Parser, Debug)]
#[command(version, about = "Play SOS in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with game defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game, optionally recording it
    Play(PlayArgs),
    /// Replay a recorded game
    Replay {
        /// Recording written by `play --record`
        file: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct PlayArgs {
    /// Board side length, at least 3
    #[arg(short, long)]
    size: Option<Coord>,

    /// simple or general
    #[arg(long)]
    variant: Option<Variant>,

    /// human or computer
    #[arg(long)]
    blue: Option<PlayerKind>,

    /// human or computer
    #[arg(long)]
    red: Option<PlayerKind>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// Write the finished game to this file
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Program asked for computer moves; reads the prompt on stdin
    #[arg(long, value_name = "PROGRAM")]
    oracle: Option<PathBuf>,

    /// Argument passed to the oracle program, may be repeated
    #[arg(long = "oracle-arg", value_name = "ARG", allow_hyphen_values = true)]
    oracle_args: Vec<String>,
}

impl PlayArgs {
    fn apply(self, mut config: Config) -> Config {
        config.board_size = self.size.unwrap_or(config.board_size);
        config.variant = self.variant.unwrap_or(config.variant);
        config.blue = self.blue.unwrap_or(config.blue);
        config.red = self.red.unwrap_or(config.red);
        config.seed = self.seed.or(config.seed);
        config.record = self.record.or(config.record);
        if let Some(oracle) = self.oracle {
            config.oracle = Some(oracle);
            config.oracle_args = self.oracle_args;
        }
        config
    }
}

/// The configured seed, or a fresh one from the OS-seeded thread generator.
fn game_seed(config: &Config) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

fn play(config: Config) -> anyhow::Result<()> {
    let engine = GameEngine::new(config.board_size, config.variant)?;
    let seed = game_seed(&config);
    log::debug!("seed: {seed}");

    let stdin = io::stdin();
    let mut session = Session::new(
        engine,
        config.player_types(),
        seed,
        stdin.lock(),
        io::stdout(),
    );
    if let Some(oracle) = config.oracle() {
        log::info!("computer moves consult {oracle:?}");
        session = session.with_oracle(oracle);
    }
    let (_, recording) = session.run()?;

    if let Some(path) = config.record {
        let file = File::create(&path)
            .with_context(|| format!("creating recording {}", path.display()))?;
        recording.write_to(BufWriter::new(file))?;
        log::info!("recorded {} move(s) to {}", recording.moves.len(), path.display());
    }
    Ok(())
}

fn replay(path: PathBuf) -> anyhow::Result<()> {
    let file =
        File::open(&path).with_context(|| format!("opening recording {}", path.display()))?;
    let recording = Recording::read_from(BufReader::new(file))
        .with_context(|| format!("invalid recording {}", path.display()))?;
    session::replay(&recording, io::stdout())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Play(play_args) => play(play_args.apply(config)),
        Command::Replay { file } => replay(file),
    }
}
