//! Rules engine walkthrough.
//!
//! Plays fool's mate through the click session, then a batch of seeded random
//! games, printing boards and a per-game summary.
//!
//! Run with:
//! `cargo run --release --bin rules_demo`
//! `cargo run --release --bin rules_demo -- --games 20 --plies 300 --seed 7 --verbose`

use chess_rules::utils::algebraic::algebraic_to_square;
use chess_rules::utils::random_playout::{random_playout, PlayoutConfig};
use chess_rules::utils::render_game_state::render_game_state;
use chess_rules::{ClickOutcome, GameSession, GameState, TerminalStatus};

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

/// Seed of the `game`-th random game; wraps instead of overflowing.
fn game_seed(base_seed: u64, game: u64) -> u64 {
    base_seed.wrapping_add(game)
}

fn play_fools_mate() -> Result<(), String> {
    let mut session = GameSession::new();
    for name in ["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"] {
        let square = algebraic_to_square(name).map_err(|e| e.to_string())?;
        match session.click(square) {
            ClickOutcome::Selected(selection) => {
                println!(
                    "selected {} ({} legal destinations)",
                    selection.from(),
                    selection.destinations().len()
                );
            }
            ClickOutcome::Moved { from, to, status } => {
                println!("moved {from}{to} -> {status:?}");
            }
            ClickOutcome::Rejected(err) => return Err(err.to_string()),
        }
    }
    println!("{}", render_game_state(session.game()));
    println!(
        "{} to move: {:?}",
        session.game().side_to_move(),
        session.game().status()
    );
    Ok(())
}

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let games = parse_arg_u64("--games", 10);
    let max_plies = parse_arg_u64("--plies", 200) as usize;
    let base_seed = parse_arg_u64("--seed", 1234);

    println!("== Fool's mate ==");
    play_fools_mate()?;

    println!("\n== Random games ==");
    let start = GameState::new_game();
    let mut checkmates = 0;
    let mut stalemates = 0;
    for game in 0..games {
        let config = PlayoutConfig {
            max_plies,
            seed: game_seed(base_seed, game),
        };
        let report = random_playout(&start, &config, |_, _, _, _| {}).map_err(|e| e.to_string())?;
        match report.final_status {
            TerminalStatus::Checkmate => checkmates += 1,
            TerminalStatus::Stalemate => stalemates += 1,
            _ => {}
        }
        println!(
            "game {game}: seed={} plies={} status={:?} side_to_move={}",
            config.seed,
            report.plies,
            report.final_status,
            report.final_state.side_to_move()
        );
        if verbose {
            println!("{}", render_game_state(&report.final_state));
        }
    }
    println!("games={games} checkmates={checkmates} stalemates={stalemates}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::game_seed;

    #[test]
    fn game_seed_wraps_near_the_top_of_the_range() {
        assert_eq!(game_seed(7, 3), 10);
        assert_eq!(game_seed(u64::MAX, 0), u64::MAX);
        assert_eq!(game_seed(u64::MAX, 2), 1);
    }
}
