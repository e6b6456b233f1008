//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] and buffers
//! them until the next tick. The simulation consumes one batch of intents per
//! tick, so presses that arrive between ticks are queued here rather than
//! applied immediately.

pub mod map;
pub mod queue;

pub use tui_blockfall_types as types;

pub use map::{action_for_key, is_quit_key};
pub use queue::InputQueue;
