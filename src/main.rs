use std::thread;
use std::time::Duration;

use clap::Parser;
use log::info;

use battle_chess::game::match_config::{Difficulty, MatchConfig};
use battle_chess::game::match_controller::{MatchController, TurnProgress};
use battle_chess::utils::fen_parser::{parse_position, FenError};

#[derive(Parser, Debug)]
#[command(name = "battle-chess", about = "Play the engine against itself and print every turn")]
struct Args {
    /// Search preset; --depth and --time-ms override its parts.
    #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,
    #[arg(long)]
    depth: Option<u32>,
    #[arg(long)]
    time_ms: Option<u64>,
    #[arg(long, default_value_t = 100)]
    max_turns: u32,
    /// Starting position as FEN (placement, optionally followed by side to move).
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> Result<(), FenError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut search = args.difficulty.search_config();
    if let Some(depth) = args.depth {
        search.max_depth = depth.max(1);
    }
    if let Some(time_ms) = args.time_ms {
        search.time_budget = Duration::from_millis(time_ms);
    }

    let config = MatchConfig::cpu_vs_cpu(search);
    let mut controller = match &args.fen {
        Some(fen) => {
            let (board, side_to_move) = parse_position(fen)?;
            MatchController::from_board(config, board, side_to_move)
        }
        None => MatchController::new(config),
    };

    info!(
        "self-play at depth {} with {:?} per move",
        search.max_depth, search.time_budget
    );
    println!("{}\n", controller.board());

    loop {
        match controller.tick() {
            TurnProgress::Moved(turn) => {
                println!("{turn}");
                println!("{}\n", turn.board_after);
                if turn.order >= args.max_turns {
                    info!("stopping after {} turns", turn.order);
                    break;
                }
            }
            TurnProgress::GameOver(status) => {
                println!("Game over: {status}");
                break;
            }
            TurnProgress::Thinking | TurnProgress::WaitingForHuman => {
                thread::sleep(Duration::from_millis(10));
            }
        }
    }

    Ok(())
}
