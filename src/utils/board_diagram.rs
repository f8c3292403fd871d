//! Plain-text board diagrams for building positions in tests and tools.
//!
//! A diagram is eight non-blank lines of eight cells, row 0 (rank 8) first.
//! Uppercase `PNBRQK` are White, lowercase are Black, `.` is empty.
//! Whitespace inside and around lines is ignored, so diagrams can be indented
//! in source code.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

pub fn parse_diagram(diagram: &str) -> ChessResult<Board> {
    let rows: Vec<String> = diagram
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != BOARD_SIZE as usize {
        return Err(ChessError::InvalidDiagram(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, cells) in rows.iter().enumerate() {
        let count = cells.chars().count();
        if count != BOARD_SIZE as usize {
            return Err(ChessError::InvalidDiagram(format!(
                "row {row} has {count} cells"
            )));
        }
        for (col, ch) in cells.chars().enumerate() {
            let piece = char_to_piece(ch).map_err(|_| {
                ChessError::InvalidDiagram(format!("unexpected '{ch}' in row {row}"))
            })?;
            board.set(Square::at(row as u8, col as u8), piece);
        }
    }

    Ok(board)
}

/// `Ok(None)` for an empty cell.
pub fn char_to_piece(ch: char) -> Result<Option<Piece>, char> {
    if ch == '.' {
        return Ok(None);
    }
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ch),
    };
    Ok(Some(Piece::new(color, kind)))
}
