//! Conversions between algebraic square names (`e4`) and board squares.
//!
//! Row 0 is rank 8 and col 0 is the a-file, so `a8 == (0, 0)` and
//! `h1 == (7, 7)`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(name.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(name.to_owned()));
    }

    Ok(Square::at(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

/// Shorthand for squares written in tests.
#[cfg(test)]
pub(crate) fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("test square name should parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_expected_coordinates() {
        assert_eq!(algebraic_to_square("a8"), Ok(Square::at(0, 0)));
        assert_eq!(algebraic_to_square("h1"), Ok(Square::at(7, 7)));
        assert_eq!(algebraic_to_square("e2"), Ok(Square::at(6, 4)));
        assert_eq!(square_to_algebraic(Square::at(4, 4)), "e4");
    }

    #[test]
    fn every_square_round_trips() {
        for square in Square::all() {
            let name = square_to_algebraic(square);
            assert_eq!(algebraic_to_square(&name), Ok(square));
        }
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e44", "E4"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidAlgebraic(bad.to_owned()))
            );
        }
    }
}
