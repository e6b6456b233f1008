//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to an intent.
///
/// Presses and terminal auto-repeats count; releases are ignored.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_quit_key(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(GameAction::Rotate),
        _ => None,
    }
}

/// `q`, `Esc`, or `Ctrl+C`.
pub fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
