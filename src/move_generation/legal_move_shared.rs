//! Direction tables and the two movement primitives every piece is built
//! from: sliding along rays and jumping to fixed offsets.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cast a ray per direction. Each ray ends on the first occupied square,
/// which is included only when it holds an opposing piece.
pub fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.get(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// Fixed-offset jumps onto empty or opposing squares.
pub fn leap_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if !is_friendly(board, to, color) {
                out.push(to);
            }
        }
    }
}

#[inline]
pub fn is_friendly(board: &Board, square: Square, color: Color) -> bool {
    board.get(square).is_some_and(|piece| piece.color == color)
}

#[inline]
pub fn is_enemy(board: &Board, square: Square, color: Color) -> bool {
    board.get(square).is_some_and(|piece| piece.color != color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn slide_stops_before_friend_and_on_enemy() {
        let mut board = Board::empty();
        let from = Square::at(4, 0);
        board.set(Square::at(4, 3), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set(Square::at(1, 0), Some(Piece::new(Color::Black, PieceKind::Pawn)));

        let mut out = Vec::new();
        slide_moves(&board, from, Color::White, &ORTHOGONAL_DIRECTIONS, &mut out);

        assert!(out.contains(&Square::at(4, 2)));
        assert!(!out.contains(&Square::at(4, 3)));
        assert!(out.contains(&Square::at(1, 0)));
        assert!(!out.contains(&Square::at(0, 0)));
        // up: 3,2,1 / down: 5,6,7 / right: 1,2
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn leaps_are_clipped_to_the_board() {
        let board = Board::empty();
        let mut out = Vec::new();
        leap_moves(&board, Square::at(0, 0), Color::Black, &KNIGHT_OFFSETS, &mut out);
        assert_eq!(out.len(), 2);
    }
}
