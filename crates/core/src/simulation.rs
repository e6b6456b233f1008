//! Board simulation - the per-tick state machine
//!
//! Ties the grid, the active piece, the next-piece buffer and the spawner
//! together. One call to [`BoardSimulation::step`] is one tick:
//!
//! 1. Apply the tick's intents in order. Each is checked on its own and
//!    dropped silently if the move would leave the board or overlap a block.
//! 2. Try to move the active piece down one row.
//! 3. If that is blocked: lock the piece, clear full rows, promote the buffered
//!    piece, spawn a new buffered piece, and end the game if the promoted piece
//!    does not fit where it spawned.
//!
//! Every mutation is preceded by its validity check, so a tick never leaves a
//! half-applied move behind.

use std::mem;

use log::{debug, info};

use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::rules::{self, Delta};
use crate::shape::Catalog;
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use crate::types::{GameAction, GameStatus, LockEvent};

/// What happened during one [`BoardSimulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Gravity moved the active piece down a row.
    pub fell: bool,
    /// Set when the active piece locked this tick.
    pub lock: Option<LockEvent>,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct BoardSimulation<R = SimpleRng> {
    grid: Grid,
    spawner: Spawner<R>,
    active: Piece,
    next: Piece,
    status: GameStatus,
    quit_requested: bool,
    lines_cleared: u64,
    pieces_locked: u64,
    ticks: u64,
}

impl BoardSimulation<SimpleRng> {
    /// Standard catalog, seeded RNG.
    pub fn with_seed(board: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(board, Catalog::standard(), SimpleRng::new(seed))
    }
}

impl<R: RandomSource> BoardSimulation<R> {
    /// Empty board of the configured size.
    pub fn new(board: BoardConfig, catalog: Catalog, rng: R) -> Result<Self, ConfigError> {
        board.validate()?;
        Self::from_grid(Grid::new(board.rows, board.cols)?, catalog, rng)
    }

    /// Start from an existing grid (pre-built stacks, puzzles, tests).
    ///
    /// If the first piece does not fit on that grid the simulation starts in
    /// [`GameStatus::GameOver`].
    pub fn from_grid(grid: Grid, catalog: Catalog, rng: R) -> Result<Self, ConfigError> {
        let mut spawner = Spawner::new(catalog, rng, grid.cols())?;
        let active = spawner.spawn();
        let next = spawner.spawn();

        let status = if rules::is_valid_move(&active, &grid, Delta::NONE) {
            GameStatus::Running
        } else {
            info!("first piece does not fit, game over before the first tick");
            GameStatus::GameOver
        };

        Ok(Self {
            grid,
            spawner,
            active,
            next,
            status,
            quit_requested: false,
            lines_cleared: 0,
            pieces_locked: 0,
            ticks: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Game over or quit: the shell should stop ticking.
    pub fn is_finished(&self) -> bool {
        self.is_game_over() || self.quit_requested
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u64 {
        self.pieces_locked
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply a single intent. Returns whether anything changed.
    ///
    /// Moves and rotations are ignored once the game is over. `Quit` is always
    /// recorded; it does not interrupt the tick it arrives in.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Quit => {
                self.quit_requested = true;
                true
            }
            _ if self.is_game_over() => false,
            GameAction::MoveLeft => self.try_shift(Delta::LEFT),
            GameAction::MoveRight => self.try_shift(Delta::RIGHT),
            GameAction::SoftDrop => self.try_shift(Delta::DOWN),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Run one tick: intents first, then gravity.
    pub fn step(&mut self, actions: &[GameAction]) -> TickOutcome {
        for &action in actions {
            self.apply_action(action);
        }

        if self.is_game_over() {
            return TickOutcome {
                fell: false,
                lock: None,
                status: self.status,
            };
        }

        self.ticks += 1;

        if self.try_shift(Delta::DOWN) {
            return TickOutcome {
                fell: true,
                lock: None,
                status: self.status,
            };
        }

        let event = self.lock_active();
        TickOutcome {
            fell: false,
            lock: Some(event),
            status: self.status,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        match out.active.as_mut() {
            Some(active) => active.clone_from(&self.active),
            None => out.active = Some(self.active.clone()),
        }
        match out.next.as_mut() {
            Some(next) => next.clone_from(&self.next),
            None => out.next = Some(self.next.clone()),
        }
        out.status = self.status;
        out.lines_cleared = self.lines_cleared;
        out.pieces_locked = self.pieces_locked;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::empty(self.grid.clone());
        self.snapshot_into(&mut snap);
        snap
    }

    fn try_shift(&mut self, delta: Delta) -> bool {
        if !rules::is_valid_move(&self.active, &self.grid, delta) {
            return false;
        }
        self.active.row += delta.row;
        self.active.col += delta.col;
        true
    }

    /// Rotate in place or not at all; there is no kick search.
    fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if !rules::is_valid_move(&candidate, &self.grid, Delta::NONE) {
            return false;
        }
        self.active = candidate;
        true
    }

    fn lock_active(&mut self) -> LockEvent {
        rules::lock(&mut self.grid, &self.active);
        self.pieces_locked += 1;
        debug!(
            "locked {} piece at ({}, {})",
            self.active.color.as_str(),
            self.active.row,
            self.active.col
        );

        let cleared = rules::clear_lines(&mut self.grid);
        if cleared > 0 {
            self.lines_cleared += cleared as u64;
            info!("lines cleared: {}", cleared);
        }

        let upcoming = self.spawner.spawn();
        self.active = mem::replace(&mut self.next, upcoming);

        let topped_out = !rules::is_valid_move(&self.active, &self.grid, Delta::NONE);
        if topped_out {
            self.status = GameStatus::GameOver;
            info!(
                "game over after {} pieces, {} lines",
                self.pieces_locked, self.lines_cleared
            );
        }

        LockEvent {
            lines_cleared: cleared as u32,
            topped_out,
        }
    }
}
