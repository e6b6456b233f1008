//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides how pieces move, lock and clear lives here. There
//! is no terminal, timer or I/O code in this crate; a shell feeds it intents
//! once per tick and reads back a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`config`]: board size and tick rate, validated at construction
//! - [`error`]: construction errors
//! - [`grid`]: the locked-cell store and line clearing
//! - [`shape`]: shape matrices, rotation, and the piece catalog
//! - [`piece`]: a shape placed on the grid
//! - [`rules`]: validity checks and locking
//! - [`rng`] / [`spawner`]: seeded, swappable piece selection
//! - [`simulation`]: the per-tick state machine
//! - [`snapshot`]: read-only state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at row 0, horizontally centred with integer halves
//! - One intent per key press; illegal moves are silently dropped
//! - Rotation is 90° clockwise in place, rejected outright if it does not fit
//! - Gravity moves the piece one row per tick; when it cannot, the piece locks
//! - Full rows are removed and everything above shifts down
//! - The game ends when a newly promoted piece does not fit where it spawned
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{BoardConfig, BoardSimulation};
//! use tui_blockfall_types::{GameAction, GameStatus};
//!
//! let mut sim = BoardSimulation::with_seed(BoardConfig::default(), 12345).unwrap();
//!
//! let outcome = sim.step(&[GameAction::MoveLeft, GameAction::Rotate]);
//! assert!(outcome.fell);
//! assert_eq!(sim.status(), GameStatus::Running);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod rules;
pub mod shape;
pub mod simulation;
pub mod snapshot;
pub mod spawner;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{BoardConfig, GameConfig};
pub use error::ConfigError;
pub use grid::Grid;
pub use piece::Piece;
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use rules::{clear_lines, is_valid_move, lock, Delta};
pub use shape::{Catalog, CatalogEntry, Shape, ShapeError};
pub use simulation::{BoardSimulation, TickOutcome};
pub use snapshot::GameSnapshot;
pub use spawner::Spawner;
