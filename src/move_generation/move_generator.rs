//! Pseudo-legal move dispatch and the generator seam used by perft.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Produces destination squares for the piece on a given square.
pub trait MoveGenerator: Send + Sync {
    fn destinations(&self, game_state: &GameState, from: Square) -> Vec<Square>;
}

/// Movement rules only; may leave the mover's own king in check.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn destinations(&self, game_state: &GameState, from: Square) -> Vec<Square> {
        pseudo_legal_moves(game_state, from)
    }
}

/// Destinations allowed by the movement rules of the piece on `from`, ignoring
/// whether the mover's king ends up attacked. Empty for an empty square.
pub fn pseudo_legal_moves(game_state: &GameState, from: Square) -> Vec<Square> {
    let board = &game_state.board;
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(32);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(
            board,
            from,
            piece.color,
            game_state.en_passant_target,
            &mut out,
        ),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => {
            generate_king_moves(board, from, piece.color, &mut out);
            generate_castling_moves(game_state, from, piece.color, &mut out);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::sq;

    #[test]
    fn start_position_has_twenty_pseudo_legal_moves_per_side() {
        let game = GameState::new_game();
        for color in [Color::White, Color::Black] {
            let total: usize = game
                .board()
                .pieces_of(color)
                .map(|(from, _)| PseudoLegalMoveGenerator.destinations(&game, from).len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn empty_square_has_no_moves() {
        let game = GameState::new_game();
        assert!(pseudo_legal_moves(&game, sq("e4")).is_empty());
    }
}
