use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tui_blockfall::input::{action_for_key, InputQueue};
use tui_blockfall::types::{GameAction, MAX_ACTIONS_PER_TICK};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn presses_flow_from_keys_into_the_tick_batch() {
    let mut queue = InputQueue::new();
    let events = [
        key(KeyCode::Left, KeyEventKind::Press),
        key(KeyCode::Left, KeyEventKind::Release),
        key(KeyCode::Char('w'), KeyEventKind::Press),
        key(KeyCode::Char('j'), KeyEventKind::Repeat),
        key(KeyCode::Char('x'), KeyEventKind::Press),
    ];
    for event in events {
        if let Some(action) = action_for_key(event) {
            queue.push(action);
        }
    }

    let batch = queue.drain();
    assert_eq!(
        batch.as_slice(),
        &[GameAction::MoveLeft, GameAction::Rotate, GameAction::SoftDrop]
    );
    assert!(queue.is_empty());
}

#[test]
fn overflow_is_dropped_but_quit_survives() {
    let mut queue = InputQueue::new();
    for _ in 0..MAX_ACTIONS_PER_TICK {
        assert!(queue.push(GameAction::MoveRight));
    }
    assert!(!queue.push(GameAction::MoveLeft));
    assert_eq!(queue.dropped(), 1);

    assert!(queue.push(GameAction::Quit));
    assert!(queue.quit_pending());

    let batch = queue.drain();
    assert_eq!(batch.len(), MAX_ACTIONS_PER_TICK + 1);
    assert_eq!(batch.last(), Some(&GameAction::Quit));
    assert_eq!(queue.dropped(), 0);
    assert!(!queue.quit_pending());
}

#[test]
fn ctrl_c_and_escape_quit() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(action_for_key(ctrl_c), Some(GameAction::Quit));
    assert_eq!(
        action_for_key(key(KeyCode::Esc, KeyEventKind::Press)),
        Some(GameAction::Quit)
    );
    // Plain `c` does nothing.
    assert_eq!(action_for_key(key(KeyCode::Char('c'), KeyEventKind::Press)), None);
}
