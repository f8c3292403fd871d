//! Canonical chess-rule constants.
//!
//! Board dimensions, the back-rank layout used to build the standard starting
//! position and the king's home column shared by castling logic.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: u8 = 8;

/// Column of both kings at game start.
pub const KING_HOME_COL: u8 = 4;

/// Back-rank pieces from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position as a board diagram (row 0 first).
pub const STARTING_POSITION_DIAGRAM: &str = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR";
