//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the board and game-state model, per-piece move generation, check
//! and terminal-state detection, the click-driven selection session and a few
//! utility helpers so binaries, tests and presentation layers can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod selection;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_diagram;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use game_state::chess_types::{
    Board, CastleSide, CastlingRights, Color, GameState, Piece, PieceKind, Square, TerminalStatus,
};
pub use game_state::selection::{ClickOutcome, GameSession, Selection};
pub use move_generation::legal_move_checks::is_square_attacked;
pub use move_generation::legal_move_generator::{apply_move, evaluate_terminal_status, legal_moves};
