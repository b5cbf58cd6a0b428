//! Headless turn controller.
//!
//! Owns the current position and the turn record, validates human moves and
//! drives CPU turns through a [`SearchJob`] that is polled, never awaited, by
//! [`MatchController::tick`].

use std::fmt;

use log::{info, warn};
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::board::board::Board;
use crate::board::chess_move::{diff_boards, Move};
use crate::board::chess_types::Color;
use crate::board::tile::Tile;
use crate::game::match_config::{MatchConfig, PlayerKind};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_legal_moves, legal_child_boards, legal_moves};
use crate::search::search_job::SearchJob;
use crate::search::threading::JobStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a reply.
    Check(Color),
    Checkmate { loser: Color },
    /// The side to move has no legal move and is not in check.
    Stalemate(Color),
    /// Bare kings.
    Draw,
    /// The given color has no king, so the position cannot be played.
    MissingKing(Color),
}

impl GameStatus {
    /// Status of `board` with `side_to_move` about to play.
    pub fn evaluate(board: &Board, side_to_move: Color) -> Self {
        for color in [side_to_move, side_to_move.opposite()] {
            if board.king_tile(color).is_none() {
                return GameStatus::MissingKing(color);
            }
        }
        if board.is_draw() {
            return GameStatus::Draw;
        }
        let in_check = is_in_check(side_to_move, board);
        if !has_legal_moves(side_to_move, board) {
            return if in_check {
                GameStatus::Checkmate { loser: side_to_move }
            } else {
                GameStatus::Stalemate(side_to_move)
            };
        }
        if in_check {
            GameStatus::Check(side_to_move)
        } else {
            GameStatus::Ongoing
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. }
                | GameStatus::Stalemate(_)
                | GameStatus::Draw
                | GameStatus::MissingKing(_)
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(color) => write!(f, "{color} in check"),
            GameStatus::Checkmate { loser } => {
                write!(f, "{loser} checkmated, {} wins", loser.opposite())
            }
            GameStatus::Stalemate(color) => write!(f, "{color} stalemated"),
            GameStatus::Draw => write!(f, "draw"),
            GameStatus::MissingKing(color) => write!(f, "no {color} king on the board"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("game is already over ({0})")]
    GameOver(GameStatus),
    #[error("{0} is not played by a human")]
    NotHumanTurn(Color),
    #[error("no {color} piece on {tile}")]
    NoOwnPiece { color: Color, tile: Tile },
    #[error("{origin} to {destination} is not a legal move")]
    IllegalMove { origin: Tile, destination: Tile },
}

/// One committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// 1-based.
    pub order: u32,
    pub color: Color,
    pub player: PlayerKind,
    pub movement: Move,
    pub board_after: Board,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn: {} ({}) - {}", self.order, self.color, self.movement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnProgress {
    WaitingForHuman,
    Thinking,
    Moved(Turn),
    GameOver(GameStatus),
}

pub struct MatchController {
    config: MatchConfig,
    board: Board,
    side_to_move: Color,
    turns: Vec<Turn>,
    pending: Option<SearchJob>,
    search_depth: u32,
    status: GameStatus,
}

impl MatchController {
    pub fn new(config: MatchConfig) -> Self {
        Self::from_board(config, Board::new_game(), Color::White)
    }

    pub fn from_board(config: MatchConfig, board: Board, side_to_move: Color) -> Self {
        let status = GameStatus::evaluate(&board, side_to_move);
        Self {
            config,
            board,
            side_to_move,
            turns: Vec::new(),
            pending: None,
            search_depth: config.search.max_depth,
            status,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[inline]
    pub fn current_player(&self) -> PlayerKind {
        self.config.player(self.side_to_move)
    }

    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Plays `origin -> destination` for the human side to move.
    pub fn play_human_move(&mut self, origin: Tile, destination: Tile) -> Result<Turn, MatchError> {
        if self.status.is_over() {
            return Err(MatchError::GameOver(self.status));
        }
        let color = self.side_to_move;
        if self.current_player() != PlayerKind::Human {
            return Err(MatchError::NotHumanTurn(color));
        }
        if !self.board.piece_at(origin).is_color(color) {
            return Err(MatchError::NoOwnPiece { color, tile: origin });
        }

        let chosen = legal_moves(color, &self.board)
            .into_iter()
            .find(|generated| {
                generated.chess_move.origin == origin && generated.chess_move.destination == destination
            })
            .ok_or(MatchError::IllegalMove { origin, destination })?;

        Ok(self.commit(chosen.board_after_move, PlayerKind::Human))
    }

    /// Advances a CPU turn by one poll. Call once per loop iteration.
    pub fn tick(&mut self) -> TurnProgress {
        if self.status.is_over() {
            return TurnProgress::GameOver(self.status);
        }
        if self.current_player() == PlayerKind::Human {
            return TurnProgress::WaitingForHuman;
        }

        let Some(job) = self.pending.as_mut() else {
            self.start_search();
            return TurnProgress::Thinking;
        };

        match job.poll() {
            JobStatus::Created | JobStatus::Running => TurnProgress::Thinking,
            JobStatus::Done => {
                let chosen = job.random_finished_result().cloned();
                self.pending = None;
                match chosen {
                    Some(next) => TurnProgress::Moved(self.commit(next, PlayerKind::Cpu)),
                    None => self.fallback_move(),
                }
            }
            JobStatus::Aborted => {
                self.pending = None;
                if self.search_depth > 1 {
                    self.search_depth -= 1;
                    warn!(
                        "{} search ran out of time, retrying at depth {}",
                        self.side_to_move, self.search_depth
                    );
                    self.start_search();
                    TurnProgress::Thinking
                } else {
                    warn!(
                        "{} search ran out of time at depth 1, playing a random legal move",
                        self.side_to_move
                    );
                    self.fallback_move()
                }
            }
        }
    }

    fn start_search(&mut self) {
        let mut job = SearchJob::new(
            self.board.clone(),
            self.side_to_move,
            self.search_depth,
            self.config.search.time_budget,
        );
        job.start();
        self.pending = Some(job);
    }

    fn fallback_move(&mut self) -> TurnProgress {
        let children = legal_child_boards(self.side_to_move, &self.board);
        match children.choose(&mut rand::rng()) {
            Some(next) => TurnProgress::Moved(self.commit(next.clone(), PlayerKind::Cpu)),
            None => {
                self.status = GameStatus::evaluate(&self.board, self.side_to_move);
                TurnProgress::GameOver(self.status)
            }
        }
    }

    fn commit(&mut self, board_after: Board, player: PlayerKind) -> Turn {
        let color = self.side_to_move;
        let turn = Turn {
            order: self.turns.len() as u32 + 1,
            color,
            player,
            movement: diff_boards(&self.board, &board_after, color),
            board_after: board_after.clone(),
        };
        info!("{turn}");

        self.board = board_after;
        self.side_to_move = color.opposite();
        self.status = GameStatus::evaluate(&self.board, self.side_to_move);
        self.search_depth = self.config.search.max_depth;
        if self.status != GameStatus::Ongoing {
            info!("{}", self.status);
        }

        self.turns.push(turn.clone());
        turn
    }
}
