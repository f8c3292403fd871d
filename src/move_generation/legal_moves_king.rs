use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{leap_moves, KING_OFFSETS};

/// One-step king moves. Castling is generated separately so attack detection
/// can reuse this without recursing into castling safety checks.
pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    leap_moves(board, from, color, &KING_OFFSETS, out);
}

/// Castling destinations `(row, col±2)` for the king on `king_from`.
///
/// A side is offered only when its right is still held, king and rook stand
/// on their home squares, every square between them is empty, the king is
/// not in check, and neither the square it crosses nor the one it lands on is
/// attacked.
pub fn generate_castling_moves(
    game_state: &GameState,
    king_from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let board = &game_state.board;
    let home_row = color.home_row();
    let enemy = color.opposite();

    if king_from != Square::at(home_row, KING_HOME_COL) {
        return;
    }

    let rights = game_state.castling_rights(color);
    if !CastleSide::BOTH.iter().any(|side| rights.allows(*side)) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    for side in CastleSide::BOTH {
        if !rights.allows(side) {
            continue;
        }

        let rook_home = Square::at(home_row, side.rook_home_col());
        if !board
            .get(rook_home)
            .is_some_and(|piece| piece.is(color, PieceKind::Rook))
        {
            continue;
        }

        let (lo, hi) = if side.rook_home_col() < KING_HOME_COL {
            (side.rook_home_col() + 1, KING_HOME_COL)
        } else {
            (KING_HOME_COL + 1, side.rook_home_col())
        };
        if !(lo..hi).all(|col| board.is_empty_at(Square::at(home_row, col))) {
            continue;
        }

        let transit = Square::at(home_row, (KING_HOME_COL as i8 + side.step()) as u8);
        let target = Square::at(home_row, side.king_target_col());
        if is_square_attacked(board, transit, enemy) || is_square_attacked(board, target, enemy) {
            continue;
        }

        out.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::CastlingRights;
    use crate::utils::algebraic::sq;
    use crate::utils::board_diagram::parse_diagram;

    fn castles(diagram: &str, color: Color, rights: CastlingRights) -> Vec<Square> {
        let board = parse_diagram(diagram).expect("diagram should parse");
        let game = GameState::from_parts(board, color, [rights; 2], None)
            .expect("position should be valid");
        let king = game.king_position(color).expect("king present");
        let mut out = Vec::new();
        generate_castling_moves(&game, king, color, &mut out);
        out.sort();
        out
    }

    const OPEN_BACK_RANK: &str = "
        r...k..r
        pppppppp
        ........
        ........
        ........
        ........
        PPPPPPPP
        R...K..R";

    #[test]
    fn both_sides_available_on_open_back_rank() {
        assert_eq!(
            castles(OPEN_BACK_RANK, Color::White, CastlingRights::ALL),
            vec![sq("c1"), sq("g1")]
        );
        assert_eq!(
            castles(OPEN_BACK_RANK, Color::Black, CastlingRights::ALL),
            vec![sq("c8"), sq("g8")]
        );
    }

    #[test]
    fn cleared_flag_removes_that_side_only() {
        let rights = CastlingRights {
            kingside: false,
            queenside: true,
        };
        assert_eq!(castles(OPEN_BACK_RANK, Color::White, rights), vec![sq("c1")]);
    }

    #[test]
    fn piece_between_king_and_rook_blocks_castling() {
        let diagram = "
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            RN..K.NR";
        assert!(castles(diagram, Color::White, CastlingRights::ALL).is_empty());
    }

    #[test]
    fn cannot_castle_out_of_or_through_check() {
        let in_check = "
            ....k...
            ....r...
            ........
            ........
            ........
            ........
            ........
            R...K..R";
        assert!(castles(in_check, Color::White, CastlingRights::ALL).is_empty());

        let f1_attacked = "
            ....k...
            .....r..
            ........
            ........
            ........
            ........
            ........
            R...K..R";
        assert_eq!(
            castles(f1_attacked, Color::White, CastlingRights::ALL),
            vec![sq("c1")]
        );

        let c1_attacked = "
            ....k...
            ..r.....
            ........
            ........
            ........
            ........
            ........
            R...K..R";
        assert_eq!(
            castles(c1_attacked, Color::White, CastlingRights::ALL),
            vec![sq("g1")]
        );
    }

    #[test]
    fn attacked_b1_does_not_stop_queenside_castling() {
        let diagram = "
            ....k...
            .r......
            ........
            ........
            ........
            ........
            ........
            R...K...";
        assert_eq!(
            castles(diagram, Color::White, CastlingRights::ALL),
            vec![sq("c1")]
        );
    }

    #[test]
    fn missing_rook_means_no_castling() {
        let diagram = "
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....K..R";
        assert_eq!(
            castles(diagram, Color::White, CastlingRights::ALL),
            vec![sq("g1")]
        );
    }
}
