//! Perft: exhaustive move-path enumeration for validating move generation.
//!
//! Counts leaf nodes at a fixed depth plus statistics for the moves of the
//! final ply. Node counts for well-known positions catch generator bugs that
//! targeted tests miss.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move_unchecked, MoveRecord};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, LegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, record: &MoveRecord, next: &GameState) {
        self.nodes += 1;
        if record.is_capture() {
            self.captures += 1;
        }
        if record.en_passant {
            self.en_passant += 1;
        }
        if record.castle.is_some() {
            self.castles += 1;
        }
        if record.promoted {
            self.promotions += 1;
        }
        let defender = next.side_to_move();
        if is_king_in_check(next, defender) {
            self.checks += 1;
            if !has_any_legal_move(next, defender) {
                self.checkmates += 1;
            }
        }
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let side = game_state.side_to_move();
    let mut total = PerftCounts::default();

    for (from, _) in game_state.board().pieces_of(side) {
        for to in generator.destinations(game_state, from) {
            let (next, record) = apply_move_unchecked(game_state, from, to)?;
            if depth == 1 {
                total.record_leaf(&record, &next);
            } else {
                total.merge(perft(generator, &next, depth - 1)?);
            }
        }
    }

    Ok(total)
}

/// Perft over legal moves only.
pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}
