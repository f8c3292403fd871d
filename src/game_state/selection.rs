//! Click-driven selection state for a presentation layer.
//!
//! A click on one of the mover's pieces selects it and precomputes its legal
//! destinations for highlighting. The next click either moves to one of those
//! destinations or clears the selection. Rejected input is reported in the
//! outcome and never ends the session.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Square, TerminalStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    from: Square,
    destinations: Vec<Square>,
}

impl Selection {
    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn destinations(&self) -> &[Square] {
        &self.destinations
    }

    #[inline]
    pub fn allows(&self, to: Square) -> bool {
        self.destinations.contains(&to)
    }
}

/// Select the piece on `square` for the side to move.
pub fn select_piece(game_state: &GameState, square: Square) -> ChessResult<Selection> {
    if game_state.is_game_over() {
        return Err(ChessError::GameOver(game_state.status()));
    }
    match game_state.piece_at(square) {
        Some(piece) if piece.color == game_state.side_to_move() => Ok(Selection {
            from: square,
            destinations: legal_moves(game_state, square),
        }),
        _ => Err(ChessError::InvalidSelection(square)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Selection),
    Moved {
        from: Square,
        to: Square,
        status: TerminalStatus,
    },
    /// The click was rejected; any selection was cleared.
    Rejected(ChessError),
}

/// One game driven by square clicks.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    game: GameState,
    selection: Option<Selection>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_game(game: GameState) -> Self {
        Self {
            game,
            selection: None,
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn click(&mut self, square: Square) -> ClickOutcome {
        match self.selection.take() {
            None => match select_piece(&self.game, square) {
                Ok(selection) => {
                    self.selection = Some(selection.clone());
                    ClickOutcome::Selected(selection)
                }
                Err(err) => ClickOutcome::Rejected(err),
            },
            Some(selection) => {
                let from = selection.from();
                if !selection.allows(square) {
                    return ClickOutcome::Rejected(ChessError::IllegalMove { from, to: square });
                }
                match self.game.apply_move(from, square) {
                    Ok(status) => ClickOutcome::Moved {
                        from,
                        to: square,
                        status,
                    },
                    Err(err) => ClickOutcome::Rejected(err),
                }
            }
        }
    }
}
