//! Seeded random games.
//!
//! Picks uniformly among the side to move's legal moves until the game ends
//! or the ply limit is reached. Used for property tests, benchmarks and the
//! demo binary; a fixed seed always replays the same game.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Square, TerminalStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{all_legal_moves, apply_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0x5EED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub plies: usize,
    pub final_status: TerminalStatus,
    pub final_state: GameState,
}

/// Play random legal moves from `start`.
///
/// `on_move` sees the state before the move, the move itself and the state
/// after it, once per ply.
pub fn random_playout<F>(
    start: &GameState,
    config: &PlayoutConfig,
    mut on_move: F,
) -> ChessResult<PlayoutReport>
where
    F: FnMut(&GameState, Square, Square, &GameState),
{
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = start.clone();
    let mut plies = 0;

    while plies < config.max_plies && !game.is_game_over() {
        let moves = all_legal_moves(&game);
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        let (next, _) = apply_move(&game, from, to)?;
        on_move(&game, from, to, &next);
        game = next;
        plies += 1;
    }

    Ok(PlayoutReport {
        plies,
        final_status: game.status(),
        final_state: game,
    })
}
