use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::{slide_moves, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_moves(board, from, color, &DIAGONAL_DIRECTIONS, out);
}
