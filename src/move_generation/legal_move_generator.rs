//! Legal move filtering, terminal-state evaluation and validated move
//! application.
//!
//! Every pseudo-legal candidate is played on a cloned state; candidates after
//! which the mover's own king is attacked are discarded. The live state is
//! never mutated while evaluating.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Square, TerminalStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenerator};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn destinations(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        legal_moves(game_state, from)
    }
}

/// Legal destinations for the piece on `from` (empty for an empty square).
pub fn legal_moves(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.piece_at(from) else {
        return Vec::new();
    };

    pseudo_legal_moves(game_state, from)
        .into_iter()
        .filter(|to| keeps_king_safe(game_state, from, *to, piece.color))
        .collect()
}

/// Every legal `(from, to)` pair for the side to move.
pub fn all_legal_moves(game_state: &GameState) -> Vec<(Square, Square)> {
    let side = game_state.side_to_move();
    game_state
        .board()
        .pieces_of(side)
        .flat_map(|(from, _)| {
            legal_moves(game_state, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .board()
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(game_state, from).is_empty())
}

/// Classify the position for the side to move.
pub fn evaluate_terminal_status(game_state: &GameState) -> TerminalStatus {
    let side = game_state.side_to_move();
    let in_check = is_king_in_check(game_state, side);
    let can_move = has_any_legal_move(game_state, side);

    match (in_check, can_move) {
        (true, true) => TerminalStatus::Check,
        (true, false) => TerminalStatus::Checkmate,
        (false, true) => TerminalStatus::Normal,
        (false, false) => TerminalStatus::Stalemate,
    }
}

/// Validate and apply `from → to`, returning the successor state and the
/// status of its side to move.
pub fn apply_move(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> ChessResult<(GameState, TerminalStatus)> {
    if game_state.is_game_over() {
        return Err(ChessError::GameOver(game_state.status()));
    }

    match game_state.piece_at(from) {
        Some(piece) if piece.color == game_state.side_to_move() => {}
        _ => return Err(ChessError::InvalidSelection(from)),
    }

    if !legal_moves(game_state, from).contains(&to) {
        return Err(ChessError::IllegalMove { from, to });
    }

    let (mut next, _) = apply_move_unchecked(game_state, from, to)?;
    let status = evaluate_terminal_status(&next);
    next.status = status;
    Ok((next, status))
}

fn keeps_king_safe(game_state: &GameState, from: Square, to: Square, mover: Color) -> bool {
    match apply_move_unchecked(game_state, from, to) {
        Ok((next, _)) => !is_king_in_check(&next, mover),
        Err(_) => false,
    }
}
