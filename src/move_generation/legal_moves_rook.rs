use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::{slide_moves, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::sq;
    use crate::utils::board_diagram::parse_diagram;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_rook_moves(&board, sq("d4"), Color::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let board = parse_diagram(
            "
            ....k...
            ........
            ........
            ........
            p.......
            ........
            ........
            R...K...",
        )
        .expect("diagram should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, sq("a1"), Color::White, &mut out);
        out.sort();
        assert_eq!(
            out,
            vec![sq("a4"), sq("a3"), sq("a2"), sq("b1"), sq("c1"), sq("d1")]
        );
    }
}
