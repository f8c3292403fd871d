//! Game state: board plus the bookkeeping the rules need.
//!
//! `GameState` owns the board, the side to move, castling rights per color,
//! the en-passant target and a king-position cache. The cache is derived from
//! the board and is rebuilt on construction and updated on every applied
//! move; the board stays authoritative. The status field always holds the
//! evaluation for the side to move of a state produced by [`apply_move`] or
//! a constructor.
//!
//! [`apply_move`]: crate::move_generation::legal_move_generator::apply_move

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::selection::{select_piece, Selection};
use crate::move_generation::legal_move_generator::{
    apply_move, evaluate_terminal_status, legal_moves,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: [CastlingRights; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) king_positions: [Option<Square>; 2],
    pub(crate) status: TerminalStatus,
}

impl GameState {
    /// Standard initial position: White to move, full castling rights.
    pub fn new_game() -> Self {
        let board = Board::standard();
        let king_positions = [
            board.find_king(Color::White),
            board.find_king(Color::Black),
        ];
        Self {
            board,
            side_to_move: Color::White,
            castling_rights: [CastlingRights::ALL; 2],
            en_passant_target: None,
            king_positions,
            status: TerminalStatus::Normal,
        }
    }

    /// Assemble a state from an arbitrary board.
    ///
    /// Requires exactly one king per color. The king cache is rebuilt and the
    /// status is evaluated for `side_to_move`.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: [CastlingRights; 2],
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        for color in [Color::White, Color::Black] {
            let kings = board.count(color, PieceKind::King);
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "{color} has {kings} kings on the board"
                )));
            }
        }

        let mut game_state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            king_positions: [None; 2],
            status: TerminalStatus::Normal,
        };
        game_state.refresh_king_positions();
        game_state.status = evaluate_terminal_status(&game_state);
        Ok(game_state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling_rights[color.index()]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Square> {
        self.king_positions[color.index()]
    }

    #[inline]
    pub fn status(&self) -> TerminalStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Legal destinations for the piece on `square`.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        legal_moves(self, square)
    }

    pub fn select_piece(&self, square: Square) -> ChessResult<Selection> {
        select_piece(self, square)
    }

    /// Apply a legal move in place and return the status of the new side to
    /// move. On error the state is left untouched.
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<TerminalStatus> {
        let (next, status) = apply_move(self, from, to)?;
        *self = next;
        Ok(status)
    }

    /// Rebuild the king cache from the board.
    pub(crate) fn refresh_king_positions(&mut self) {
        for color in [Color::White, Color::Black] {
            self.king_positions[color.index()] = self.board.find_king(color);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
