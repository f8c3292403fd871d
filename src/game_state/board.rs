//! 8×8 piece storage.
//!
//! `Board` is plain data: it knows where pieces are and nothing about the
//! rules. Look-ahead works on clones, so copying a board is the only
//! "transaction" mechanism the engine needs.

use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let col = col as u8;
                board.set(Square::at(home, col), Some(Piece::new(color, *kind)));
                board.set(
                    Square::at(pawns, col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Deep copy used for speculative look-ahead.
    #[inline]
    pub fn copy(&self) -> Board {
        self.clone()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn standard_board_has_sixteen_pieces_per_side() {
        let board = Board::standard();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert_eq!(board.count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(board.find_king(Color::White), Some(Square::at(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square::at(0, 4)));
        assert_eq!(
            board.get(Square::at(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn copy_is_independent_of_the_original() {
        let board = Board::standard();
        let mut scratch = board.copy();
        let pawn = scratch.take(Square::at(6, 4));
        scratch.set(Square::at(4, 4), pawn);

        assert!(board.get(Square::at(6, 4)).is_some());
        assert!(board.is_empty_at(Square::at(4, 4)));
        assert!(scratch.is_empty_at(Square::at(6, 4)));
        assert_ne!(board, scratch);
    }
}
