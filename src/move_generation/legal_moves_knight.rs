use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::{leap_moves, KNIGHT_OFFSETS};

/// Knight jumps ignore blockers; only friendly-occupied landings are dropped.
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    leap_moves(board, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::sq;

    #[test]
    fn start_position_knight_has_two_jumps_over_pawns() {
        let board = Board::standard();
        let mut out = Vec::new();
        generate_knight_moves(&board, sq("g1"), Color::White, &mut out);
        out.sort();
        assert_eq!(out, vec![sq("f3"), sq("h3")]);
    }

    #[test]
    fn centralized_knight_reaches_eight_squares() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_knight_moves(&board, sq("d4"), Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }
}
