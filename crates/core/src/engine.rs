//! Engine module - the game state machine
//!
//! Ties together the board, the piece cursor, the randomizer and scoring, and
//! owns the `Playing` / `Paused` / `GameOver` lifecycle.
//!
//! Time is discrete. [`Engine::tick`] is throttled by a [`FrameClock`] and runs at
//! most one logical [`Engine::step`] per call. Each step:
//!
//! 1. makes sure a piece is falling and commits its staged column;
//! 2. on every `max(1, base - level)`-th step, tries to move the piece down one
//!    row, resting it for `lock_delay` blocked steps before merging it;
//! 3. clears full rows and scores them.
//!
//! Input methods return `false` (or `None`) when the request is rejected: wrong
//! state, blocked move, blocked rotation. Rejections never change state.

use anyhow::Result;
use log::{debug, info};

use crate::board::Board;
use crate::clock::FrameClock;
use crate::config::EngineConfig;
use crate::cursor::{NextPiece, PieceCursor};
use crate::pieces::Shape;
use crate::rng::Randomizer;
use crate::scoring::{drop_points, fall_interval, fractional_level, line_clear_points, whole_level};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameStatus, PieceKind, RotateDirection};

/// What gravity did during one logical step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// Not a gravity step at the current level.
    Waiting,
    /// The piece moved down one row.
    Moved,
    /// The piece is blocked and spent one step of lock delay.
    Resting,
    /// The piece was merged into the board.
    Locked,
    /// The piece could not leave the spawn row; the game is over.
    ToppedOut,
}

/// Result of one logical step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub game_time: u64,
    pub fall: FallOutcome,
    pub rows_cleared: u32,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    randomizer: Randomizer,
    active: Option<PieceCursor>,
    next: NextPiece,
    status: GameStatus,
    clock: FrameClock,
    /// Logical steps taken while playing.
    game_time: u64,
    score: u32,
    /// Rows cleared so far; level is derived from it.
    lines: u32,
    /// Consecutive blocked gravity steps of the current piece.
    lock_delay: u32,
}

impl Engine {
    /// Create a new game and spawn its first piece.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        let mut engine = Self {
            board: Board::new(config.cols(), config.rows()),
            randomizer: Randomizer::new(config.seed),
            active: None,
            next: NextPiece::new(),
            status: GameStatus::Playing,
            clock: FrameClock::new(config.frame_ms),
            game_time: 0,
            score: 0,
            lines: 0,
            lock_delay: 0,
            config,
        };
        engine.ensure_active_piece();
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Fractional level: a tenth per cleared row.
    pub fn level(&self) -> f64 {
        fractional_level(self.lines)
    }

    /// Whole part of [`Engine::level`].
    pub fn whole_level(&self) -> u32 {
        whole_level(self.lines)
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn lock_delay(&self) -> u32 {
        self.lock_delay
    }

    pub fn game_time(&self) -> u64 {
        self.game_time
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&PieceCursor> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next.peek()
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    /// Steps between gravity rows at the current level.
    pub fn fall_interval(&self) -> u32 {
        fall_interval(self.config.base_fall_interval, self.whole_level())
    }

    /// Spawn the queued piece if nothing is falling.
    ///
    /// Returns whether a falling piece exists afterwards. A spawn onto occupied
    /// cells ends the game.
    pub fn ensure_active_piece(&mut self) -> bool {
        if self.active.is_some() {
            return true;
        }
        if self.status != GameStatus::Playing {
            return false;
        }

        let kind = self.next.take(&mut self.randomizer);
        let cursor = PieceCursor::spawn(
            Shape::spawn(kind),
            self.board.width(),
            self.config.spawn_offset,
        );
        self.next.ensure(&mut self.randomizer);
        self.lock_delay = 0;
        self.active = Some(cursor);

        if !self
            .board
            .is_valid_position(cursor.shape(), cursor.x(), cursor.y())
        {
            info!(
                "game over: {} spawned onto occupied cells, score {}",
                kind.as_str(),
                self.score
            );
            self.status = GameStatus::GameOver;
            return false;
        }

        debug!(
            "spawned {} at ({}, {})",
            kind.as_str(),
            cursor.x(),
            cursor.y()
        );
        true
    }

    /// Queued next piece, drawing one if the slot is empty.
    pub fn ensure_next_piece(&mut self) -> PieceKind {
        self.next.ensure(&mut self.randomizer)
    }

    fn accepting_input(&mut self) -> bool {
        self.status == GameStatus::Playing && self.ensure_active_piece()
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Stage a horizontal move; it takes effect at the next step.
    fn shift(&mut self, dx: i32) -> bool {
        if !self.accepting_input() {
            return false;
        }
        let Some(cursor) = self.active.as_mut() else {
            return false;
        };

        let candidate = cursor.pending_x() + dx;
        if !self
            .board
            .is_valid_position(cursor.shape(), candidate, cursor.y())
        {
            return false;
        }
        cursor.set_pending_x(candidate);
        true
    }

    /// Soft drop one row immediately, for one point.
    pub fn move_down(&mut self) -> bool {
        if !self.accepting_input() {
            return false;
        }
        let Some(cursor) = self.active.as_mut() else {
            return false;
        };

        let below = cursor.y() + 1;
        if !self
            .board
            .is_valid_position(cursor.shape(), cursor.pending_x(), below)
        {
            return false;
        }
        cursor.set_y(below);
        self.lock_delay = 0;
        self.score = self.score.saturating_add(drop_points(1, false));
        true
    }

    /// Drop to the lowest valid row and merge immediately, skipping lock delay.
    ///
    /// The staged column is committed first. Returns the rows descended.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.accepting_input() {
            return None;
        }
        let cursor = self.active.as_mut()?;
        cursor.commit_x();

        let mut rows: u32 = 0;
        while self
            .board
            .is_valid_position(cursor.shape(), cursor.x(), cursor.y() + rows as i32 + 1)
        {
            rows += 1;
        }
        cursor.set_y(cursor.y() + rows as i32);

        self.score = self.score.saturating_add(drop_points(rows, true));
        self.lock_active();
        self.settle_rows();
        Some(rows)
    }

    /// Quarter-turn in place. No wall kicks: a blocked rotation is rejected.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        if !self.accepting_input() {
            return false;
        }
        let Some(cursor) = self.active.as_mut() else {
            return false;
        };

        let rotated = cursor.shape().rotated(direction);
        if !self
            .board
            .is_valid_position(&rotated, cursor.pending_x(), cursor.y())
        {
            return false;
        }
        cursor.set_shape(rotated);
        true
    }

    /// Playing <-> Paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver => return false,
        };
        debug!("status: {}", self.status.as_str());
        true
    }

    /// Start over: empty board, zero score and level, fresh piece.
    pub fn reset(&mut self) {
        info!(
            "reset after {} steps, score {}, lines {}",
            self.game_time, self.score, self.lines
        );
        self.board.clear();
        self.active = None;
        self.next.clear();
        self.score = 0;
        self.lines = 0;
        self.lock_delay = 0;
        self.game_time = 0;
        self.clock.reset();
        self.status = GameStatus::Playing;
        self.ensure_active_piece();
    }

    /// Advance one logical step if the frame clock admits `now_ms`.
    ///
    /// Safe to call far more often than the frame cadence. Returns whether a
    /// step ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        if !self.clock.poll(now_ms) {
            return false;
        }
        self.step().is_some()
    }

    /// Run one logical step regardless of wall-clock time.
    ///
    /// Returns None when the game is not being played.
    pub fn step(&mut self) -> Option<StepReport> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.game_time += 1;

        let fall = if self.ensure_active_piece() {
            if let Some(cursor) = self.active.as_mut() {
                cursor.commit_x();
            }
            if self.game_time % self.fall_interval() as u64 == 0 {
                self.fall()
            } else {
                FallOutcome::Waiting
            }
        } else {
            FallOutcome::ToppedOut
        };

        let (rows_cleared, points) = self.settle_rows();
        Some(StepReport {
            game_time: self.game_time,
            fall,
            rows_cleared,
            points,
        })
    }

    fn fall(&mut self) -> FallOutcome {
        let Some(cursor) = self.active.as_mut() else {
            return FallOutcome::Waiting;
        };

        let below = cursor.y() + 1;
        if self
            .board
            .is_valid_position(cursor.shape(), cursor.x(), below)
        {
            cursor.set_y(below);
            self.lock_delay = 0;
            FallOutcome::Moved
        } else if cursor.y() == self.config.spawn_offset {
            info!(
                "game over: {} blocked at spawn, score {}",
                cursor.kind().as_str(),
                self.score
            );
            self.status = GameStatus::GameOver;
            FallOutcome::ToppedOut
        } else if self.lock_delay >= self.config.lock_delay {
            self.lock_active();
            FallOutcome::Locked
        } else {
            self.lock_delay += 1;
            FallOutcome::Resting
        }
    }

    /// Merge the falling piece into the board and clear the cursor.
    fn lock_active(&mut self) {
        let Some(cursor) = self.active.take() else {
            return;
        };
        self.board.merge(cursor.shape(), cursor.x(), cursor.y());
        self.lock_delay = 0;
        debug!(
            "locked {} at ({}, {})",
            cursor.kind().as_str(),
            cursor.x(),
            cursor.y()
        );
    }

    /// Clear full rows and score them at the level reached before the clear.
    fn settle_rows(&mut self) -> (u32, u32) {
        let rows = self.board.clear_full_rows();
        if rows == 0 {
            return (0, 0);
        }

        let points = line_clear_points(&self.config.row_points, rows, self.whole_level());
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(rows as u32);
        debug!(
            "cleared {} rows for {} points, level {:.1}",
            rows,
            points,
            self.level()
        );
        (rows as u32, points)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::RotateCw => self.rotate(RotateDirection::Clockwise),
            GameAction::RotateCcw => self.rotate(RotateDirection::CounterClockwise),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Copy renderer-facing state into `out`, reusing its board allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = self.next.peek().map(Shape::spawn);
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
        out.status = self.status;
        out.game_time = self.game_time;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.board.width(), self.board.height());
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }
}
