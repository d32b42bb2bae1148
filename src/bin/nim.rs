//! Train a Nim agent by self-play, then play a game against it.
//!
//! Usage: cargo run --bin nim -- [--episodes 10000] [--human-player 0]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use nim_q::core::{GameConfig, GameRng, PlayerId, Result, DEFAULT_PILES};
use nim_q::learning::{LearnerConfig, QLearner};
use nim_q::play::HumanMatch;
use nim_q::training::{SelfPlayConfig, SelfPlayTrainer};

/// Train a Q-learning Nim agent and play against it
#[derive(Parser, Debug)]
#[command(name = "nim")]
#[command(about = "Train a Nim AI by self-play and play against it", long_about = None)]
struct Args {
    /// Number of self-play training games
    #[arg(long, default_value_t = 10_000)]
    episodes: usize,

    /// Learning rate (alpha)
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,

    /// Exploration rate (epsilon) during training
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Starting pile sizes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PILES)]
    piles: Vec<u32>,

    /// Seat for the human (0 moves first); random if omitted
    #[arg(long)]
    human_player: Option<u8>,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Train only, skip the interactive game
    #[arg(long)]
    no_play: bool,
}

fn run(args: Args) -> Result<()> {
    let game = GameConfig::new().with_piles(args.piles);
    let trainer = SelfPlayTrainer::new(
        SelfPlayConfig::new()
            .with_episodes(args.episodes)
            .with_seed(args.seed)
            .with_piles(game.initial_piles.clone()),
    )?;

    let mut learner = QLearner::new(
        LearnerConfig::new()
            .with_learning_rate(args.alpha)
            .with_exploration_rate(args.epsilon),
    );
    let mut rng = GameRng::new(args.seed);
    let stats = trainer.train_with_rng(&mut learner, &mut rng)?;
    println!(
        "Done training: {} games, {} Q-values learned",
        stats.episodes, stats.table_size
    );

    if args.no_play {
        return Ok(());
    }

    let mut play_rng = rng.fork();
    let human = match args.human_player {
        Some(index) => PlayerId::try_from(index)?,
        None => HumanMatch::random_seat(&mut play_rng),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    HumanMatch::new(&learner, human, game).run(&mut input, &mut output, &mut play_rng)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
