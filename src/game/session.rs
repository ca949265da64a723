//! Game session - applies decided moves and tracks the outcome
//!
//! [`GameSession`] is the caller-side owner of one game: the piece list, the
//! [`GameLogic`] turn/en-passant state, move history and an undo stack. It
//! asks the rules whether a move is legal, then performs the mutations the
//! rules leave to the caller: castling rook relocation, capture and
//! en-passant removal, promotion, en-passant window updates and the turn
//! toggle. After every move it classifies the position for the side now to
//! move.
//!
//! # Move Flow
//!
//! ```text
//! apply_move → is_legal_move → MovePlan::apply → promotion → en-passant update
//!            → toggle_turn → game_phase(next side) → MoveHistory
//! ```
//!
//! Calls against one session must be serialized by the caller.

use crate::core::GameSettings;
use crate::game::components::{
    standard_position, GamePhase, MoveRecord, Piece, PieceColor, PieceId, PieceKind,
};
use crate::game::error::{GameError, GameResult};
use crate::game::logic::GameLogic;
use crate::game::notation::CoordinateMove;
use crate::game::resources::{GameOverState, MoveHistory};
use crate::game::rules::{BoardState, MovePlan};
use crate::game::types::Square;
use std::collections::VecDeque;
use tracing::{debug, info};

/// State restored by [`GameSession::undo`]
#[derive(Debug, Clone)]
struct Snapshot {
    pieces: Vec<Piece>,
    logic: GameLogic,
    phase: GamePhase,
    game_over: GameOverState,
    history_len: usize,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pieces: Vec<Piece>,
    logic: GameLogic,
    history: MoveHistory,
    undo_stack: VecDeque<Snapshot>,
    phase: GamePhase,
    game_over: GameOverState,
    settings: GameSettings,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl GameSession {
    /// Standard starting position, White to move
    pub fn new(settings: GameSettings) -> Self {
        Self::from_pieces(standard_position(), PieceColor::White, settings)
    }

    /// Custom position with `to_move` to play
    ///
    /// The position is classified immediately, so a set-up mate or stalemate
    /// is reported before any move is made.
    pub fn from_pieces(pieces: Vec<Piece>, to_move: PieceColor, settings: GameSettings) -> Self {
        let mut session = Self {
            pieces,
            logic: GameLogic::starting_with(to_move),
            history: MoveHistory::default(),
            undo_stack: VecDeque::new(),
            phase: GamePhase::Playing,
            game_over: GameOverState::Playing,
            settings,
        };
        session.update_game_phase();
        session
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn logic(&self) -> &GameLogic {
        &self.logic
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.logic.side_to_move()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    /// Slot of the piece standing on `pos`
    pub fn piece_at(&self, pos: (u8, u8)) -> Option<PieceId> {
        BoardState::rebuild(&self.pieces).id_at(pos)
    }

    /// Legal destinations for the piece on `from` (move hints)
    pub fn legal_destinations(&self, from: (u8, u8)) -> Vec<(u8, u8)> {
        if self.game_over.is_game_over() {
            return Vec::new();
        }
        match self.piece_at(from) {
            Some(id) => self.logic.legal_destinations(&self.pieces, id),
            None => Vec::new(),
        }
    }

    pub fn is_legal_move(&self, from: (u8, u8), to: (u8, u8)) -> bool {
        !self.game_over.is_game_over()
            && self
                .piece_at(from)
                .is_some_and(|id| self.logic.is_legal_move(&self.pieces, id, to))
    }

    /// Validate and play a move
    ///
    /// `promotion` names the piece a pawn reaching its last rank becomes;
    /// without it the configured default is used. Kings and pawns are
    /// rejected as promotion pieces. It is ignored for other moves.
    pub fn apply_move(
        &mut self,
        from: (u8, u8),
        to: (u8, u8),
        promotion: Option<PieceKind>,
    ) -> GameResult<MoveRecord> {
        if self.game_over.is_game_over() {
            return Err(GameError::GameOver {
                state: self.game_over,
            });
        }

        let id = self.piece_at(from).ok_or(GameError::PieceNotFound {
            x: from.0,
            y: from.1,
        })?;
        let mover = self.pieces.get(id.index()).copied().ok_or(GameError::PieceNotFound {
            x: from.0,
            y: from.1,
        })?;

        if !self.logic.is_legal_move(&self.pieces, id, to) {
            debug!(
                "[GAME] Rejected {} {:?} {:?} -> {:?}",
                mover.color, mover.kind, from, to
            );
            return Err(GameError::InvalidMove {
                message: format!(
                    "{} {:?} cannot move from {:?} to {:?}",
                    mover.color, mover.kind, from, to
                ),
            });
        }

        let plan = {
            let board = BoardState::rebuild(&self.pieces);
            MovePlan::resolve(&board, id, to, self.logic.en_passant_target()).ok_or(
                GameError::PieceNotFound {
                    x: from.0,
                    y: from.1,
                },
            )?
        };
        let captured = plan
            .captured
            .and_then(|c| self.pieces.get(c.index()))
            .map(|piece| piece.kind);
        let promoted_to = if plan.promotes {
            let kind = promotion.unwrap_or(self.settings.default_promotion);
            if !kind.is_promotion_target() {
                return Err(GameError::InvalidPromotion { kind });
            }
            Some(kind)
        } else {
            None
        };

        self.push_snapshot();
        plan.apply(&mut self.pieces);

        if let Some(kind) = promoted_to {
            let shifted = match plan.captured {
                Some(c) if c.index() < id.index() => id.index() - 1,
                _ => id.index(),
            };
            if let Some(pawn) = self.pieces.get_mut(shifted) {
                pawn.kind = kind;
            }
        }

        match plan.double_step {
            Some(target) => self.logic.set_en_passant_target(target),
            None => self.logic.clear_en_passant_target(),
        }

        self.logic.toggle_turn();
        self.update_game_phase();

        let record = MoveRecord {
            piece_kind: mover.kind,
            piece_color: mover.color,
            from,
            to,
            captured,
            promotion: promoted_to,
            is_castling: plan.is_castling(),
            is_en_passant: plan.is_en_passant,
            is_check: matches!(self.phase, GamePhase::Check | GamePhase::Checkmate),
            is_checkmate: self.phase == GamePhase::Checkmate,
        };
        self.history.add_move(record);

        info!(
            "[GAME] {} {:?} {} -> {}{}",
            mover.color,
            mover.kind,
            Square::from_tuple(from),
            Square::from_tuple(to),
            captured
                .map(|kind| format!(" takes {:?}", kind))
                .unwrap_or_default()
        );

        Ok(record)
    }

    pub fn apply_coordinate_move(&mut self, mv: &CoordinateMove) -> GameResult<MoveRecord> {
        self.apply_move(mv.from.to_tuple(), mv.to.to_tuple(), mv.promotion)
    }

    /// Play a move given in coordinate notation, e.g. `e2e4` or `e7e8q`
    pub fn apply_uci(&mut self, notation: &str) -> GameResult<MoveRecord> {
        let mv: CoordinateMove = notation.parse()?;
        self.apply_coordinate_move(&mv)
    }

    /// Take back the last accepted move
    pub fn undo(&mut self) -> GameResult<()> {
        if !self.settings.allow_undo {
            return Err(GameError::NothingToUndo);
        }
        let snapshot = self.undo_stack.pop_back().ok_or(GameError::NothingToUndo)?;
        self.pieces = snapshot.pieces;
        self.logic = snapshot.logic;
        self.phase = snapshot.phase;
        self.game_over = snapshot.game_over;
        self.history.truncate(snapshot.history_len);
        info!("[GAME] Move taken back; {} to move", self.side_to_move());
        Ok(())
    }

    /// Moves played so far in coordinate notation, space separated
    pub fn moves_uci(&self) -> String {
        self.history.to_coordinate_string()
    }

    fn push_snapshot(&mut self) {
        if !self.settings.allow_undo {
            return;
        }
        self.undo_stack.push_back(Snapshot {
            pieces: self.pieces.clone(),
            logic: self.logic.clone(),
            phase: self.phase,
            game_over: self.game_over,
            history_len: self.history.len(),
        });
        let limit = self.settings.max_undo_depth;
        if limit > 0 && self.undo_stack.len() > limit {
            self.undo_stack.pop_front();
        }
    }

    /// Classify the position for the side to move and record any result
    fn update_game_phase(&mut self) {
        let color = self.side_to_move();
        let previous = self.phase;
        self.phase = self.logic.game_phase(color, &self.pieces);

        match self.phase {
            GamePhase::Check if previous != GamePhase::Check => {
                info!("[GAME] {} king is in check", color);
            }
            GamePhase::Checkmate => {
                self.game_over = GameOverState::checkmated(color);
                info!("[GAME] ========== CHECKMATE! ==========");
                info!("[GAME] {}", self.game_over.message());
            }
            GamePhase::Stalemate => {
                self.game_over = GameOverState::Stalemate;
                info!("[GAME] ========== STALEMATE! ==========");
                info!("[GAME] {} has no legal moves but is not in check", color);
            }
            GamePhase::Playing if previous == GamePhase::Check => {
                info!("[GAME] Check escaped! Game continues normally");
            }
            _ => {}
        }
    }
}
