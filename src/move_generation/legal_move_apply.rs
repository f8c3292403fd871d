//! Move application with all special-move bookkeeping.
//!
//! Works on a clone of the incoming state, so the caller's state is never
//! touched. No legality checks happen here; `legal_move_generator` filters
//! candidates before anything reaches the live game.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// What a single applied move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub double_push: bool,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Apply `from → to` to a copy of `game_state`.
///
/// The returned state has the side to move switched but its terminal status
/// reset to `Normal`; `apply_move` evaluates and stores the real status.
pub fn apply_move_unchecked(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> ChessResult<(GameState, MoveRecord)> {
    let mut next = game_state.clone();
    let record = make_move_in_place(&mut next, from, to)?;
    Ok((next, record))
}

fn make_move_in_place(
    game_state: &mut GameState,
    from: Square,
    to: Square,
) -> ChessResult<MoveRecord> {
    let piece = game_state
        .board
        .take(from)
        .ok_or_else(|| ChessError::InvalidPosition(format!("no piece on {from}")))?;
    let color = piece.color;

    let mut captured = game_state.board.get(to);
    let mut placed = piece;
    let mut promoted = false;
    let mut castle = None;
    let mut en_passant = false;

    if piece.kind == PieceKind::Pawn && to.row() == color.promotion_row() {
        placed = Piece::new(color, PieceKind::Queen);
        promoted = true;
    }
    game_state.board.set(to, Some(placed));

    if piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
        let side = if to.col() > from.col() {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        };
        let rook = game_state
            .board
            .take(Square::at(from.row(), side.rook_home_col()));
        game_state
            .board
            .set(Square::at(from.row(), side.rook_target_col()), rook);
        castle = Some(side);
    }

    if piece.kind == PieceKind::Pawn
        && game_state.en_passant_target == Some(to)
        && captured.is_none()
        && from.col() != to.col()
    {
        captured = game_state.board.take(Square::at(from.row(), to.col()));
        en_passant = true;
    }

    update_castling_rights(game_state, piece, from, to, captured);

    let double_push = piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2;
    game_state.en_passant_target = if double_push {
        Some(Square::at((from.row() + to.row()) / 2, from.col()))
    } else {
        None
    };

    if piece.kind == PieceKind::King {
        game_state.king_positions[color.index()] = Some(to);
    }
    if captured.is_some_and(|victim| victim.kind == PieceKind::King) {
        game_state.king_positions[color.opposite().index()] = None;
    }

    game_state.side_to_move = color.opposite();
    game_state.status = TerminalStatus::Normal;

    Ok(MoveRecord {
        from,
        to,
        piece,
        captured,
        promoted,
        castle,
        en_passant,
        double_push,
    })
}

fn update_castling_rights(
    game_state: &mut GameState,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
) {
    let color = piece.color;
    match piece.kind {
        PieceKind::King => game_state.castling_rights[color.index()].revoke_all(),
        PieceKind::Rook if from.row() == color.home_row() => {
            if let Some(side) = CastleSide::from_rook_home_col(from.col()) {
                game_state.castling_rights[color.index()].revoke(side);
            }
        }
        _ => {}
    }

    // Capturing a rook on its home square removes the opponent's right too.
    if let Some(victim) = captured {
        if victim.kind == PieceKind::Rook && to.row() == victim.color.home_row() {
            if let Some(side) = CastleSide::from_rook_home_col(to.col()) {
                game_state.castling_rights[victim.color.index()].revoke(side);
            }
        }
    }
}
