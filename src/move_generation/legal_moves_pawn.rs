use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::legal_move_shared::is_enemy;

/// Pseudo-legal pawn destinations: pushes, captures and en passant.
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if is_enemy(board, to, color) {
            out.push(to);
        } else if en_passant_target == Some(to) && is_en_passant_capture(board, from, to, color) {
            out.push(to);
        }
    }
}

/// Diagonal squares a pawn attacks, occupied or not.
pub fn pawn_attacks(from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();
    for d_col in [-1i8, 1i8] {
        if let Some(to) = from.offset(dir, d_col) {
            out.push(to);
        }
    }
}

/// The pawn must stand on its en-passant row with the opposing pawn that just
/// double-stepped directly beside it.
fn is_en_passant_capture(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if from.row() != color.en_passant_row() || !board.is_empty_at(to) {
        return false;
    }
    let victim = Square::at(from.row(), to.col());
    board
        .get(victim)
        .is_some_and(|piece| piece.is(color.opposite(), PieceKind::Pawn))
}
