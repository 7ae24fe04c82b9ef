use chess_opponent::agent::ai::{AIConfig, AIPlayer, Difficulty};
use chess_opponent::game_repr::{Position, STARTING_FEN};
use chess_opponent::orchestrator::{MatchConfig, Orchestrator};
use chess_opponent::{select_move_with_rng, EngineResult};
use clap::{Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "chess_opponent", version, about = "Computer chess opponent")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the move the opponent would play in a position
    Bestmove {
        /// Position to move from
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,
        /// Difficulty level, 1 (random) to 5 (strongest)
        #[arg(long, default_value_t = 3)]
        level: u8,
        /// Seed for reproducible choices
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a game between two AI players
    Selfplay {
        /// Starting position
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,
        /// Difficulty of the White player
        #[arg(long, default_value_t = 3)]
        white: u8,
        /// Difficulty of the Black player
        #[arg(long, default_value_t = 3)]
        black: u8,
        /// Stop the game after this many plies
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Bestmove { fen, level, seed } => run_bestmove(&fen, level, seed),
        Command::Selfplay {
            fen,
            white,
            black,
            max_plies,
            seed,
        } => run_selfplay(fen, white, black, max_plies, seed),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_bestmove(fen: &str, level: u8, seed: Option<u64>) -> EngineResult<()> {
    let difficulty = Difficulty::from_level(level)?;
    let pos = Position::from_fen(fen)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Choosing a move at {} for {:?}", difficulty, pos);
    match select_move_with_rng(&pos, difficulty, &mut rng) {
        Some(mv) => println!("bestmove {}", mv),
        None => println!("bestmove (none)"),
    }
    Ok(())
}

fn run_selfplay(
    fen: String,
    white: u8,
    black: u8,
    max_plies: u32,
    seed: Option<u64>,
) -> EngineResult<()> {
    let mut white_config = AIConfig::new(Difficulty::from_level(white)?);
    let mut black_config = AIConfig::new(Difficulty::from_level(black)?);
    if let Some(seed) = seed {
        // Separate streams per side
        white_config = white_config.with_seed(seed);
        black_config = black_config.with_seed(seed.wrapping_add(1));
    }

    let config = MatchConfig::new().with_fen(fen).with_max_plies(max_plies);
    let orchestrator = Orchestrator::new(
        &config,
        Box::new(AIPlayer::new(white_config)),
        Box::new(AIPlayer::new(black_config)),
    )?;

    let record = orchestrator.play();
    println!("{}", record.move_text());
    println!("result {}", record.result);
    println!("fen {}", record.final_fen);
    Ok(())
}
