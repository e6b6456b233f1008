//! Terminal front end for the block-fall game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] turns a [`core::GameSnapshot`] into styled cells and
//! [`TerminalRenderer`] writes only the cells that changed since the last
//! frame. Board cells are drawn two columns wide so they look square on
//! typical terminal fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
