//! Attack and check detection.
//!
//! A square is attacked by a color when one of that color's pieces could
//! capture on it. Attack sets reuse the per-piece movement rules with two
//! differences: pawns attack their forward diagonals whether or not something
//! stands there (pushes never attack), and kings attack only their neighbours
//! (castling never captures).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::pawn_attacks;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Squares the piece standing on `from` attacks.
pub fn attack_targets(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, out),
        PieceKind::King => generate_king_moves(board, from, piece.color, out),
    }
}

pub fn is_square_attacked(board: &Board, target: Square, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(32);
    board.pieces_of(attacker_color).any(|(from, piece)| {
        targets.clear();
        attack_targets(board, from, piece, &mut targets);
        targets.contains(&target)
    })
}

pub fn attackers_to_square(
    board: &Board,
    target: Square,
    attacker_color: Color,
) -> Vec<(Square, Piece)> {
    let mut targets = Vec::with_capacity(32);
    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| {
            targets.clear();
            attack_targets(board, *from, *piece, &mut targets);
            targets.contains(&target)
        })
        .collect()
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_position(color) else {
        return false;
    };
    is_square_attacked(&game_state.board, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::sq;
    use crate::utils::board_diagram::parse_diagram;

    #[test]
    fn start_position_has_no_checks() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
        // Third rank is covered by white pawns and knights, fifth is not.
        assert!(is_square_attacked(game.board(), sq("e3"), Color::White));
        assert!(!is_square_attacked(game.board(), sq("e5"), Color::White));
    }

    #[test]
    fn pawn_push_square_is_not_attacked_by_that_pawn() {
        let board = parse_diagram(
            "
            ....k...
            ........
            ........
            ........
            ........
            ........
            ...P....
            ....K...",
        )
        .expect("diagram should parse");
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));
        assert!(is_square_attacked(&board, sq("c3"), Color::White));
        assert!(is_square_attacked(&board, sq("e3"), Color::White));
    }

    #[test]
    fn attackers_lists_every_checker() {
        let board = parse_diagram(
            "
            ....k...
            ........
            ........
            ........
            .b......
            ........
            ........
            ....K..r",
        )
        .expect("diagram should parse");
        let mut attackers = attackers_to_square(&board, sq("e1"), Color::Black);
        attackers.sort_by_key(|(square, _)| *square);
        assert_eq!(
            attackers,
            vec![
                (sq("b4"), Piece::new(Color::Black, PieceKind::Bishop)),
                (sq("h1"), Piece::new(Color::Black, PieceKind::Rook)),
            ]
        );
    }

    #[test]
    fn friendly_blocker_shields_the_king() {
        let mut board = parse_diagram(
            "
            ....k...
            ........
            ........
            ........
            .b......
            ........
            ...N....
            ....K...",
        )
        .expect("diagram should parse");
        assert!(!is_square_attacked(&board, sq("e1"), Color::Black));

        board.take(sq("d2"));
        assert!(is_square_attacked(&board, sq("e1"), Color::Black));
    }
}
