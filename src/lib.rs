//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single `tui_blockfall::{..}` path.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
