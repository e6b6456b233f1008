//! Per-tick intent buffer.
//!
//! Stack-only: the queue holds at most [`MAX_ACTIONS_PER_TICK`] intents and
//! drops presses beyond that until it is drained.

use arrayvec::ArrayVec;

use crate::types::{GameAction, MAX_ACTIONS_PER_TICK};

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<GameAction, MAX_ACTIONS_PER_TICK>,
    quit: bool,
    dropped: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent. Returns false if the queue was full and it was dropped.
    ///
    /// `Quit` is latched separately and is never dropped.
    pub fn push(&mut self, action: GameAction) -> bool {
        if action == GameAction::Quit {
            self.quit = true;
            return true;
        }
        match self.pending.try_push(action) {
            Ok(()) => true,
            Err(_) => {
                self.dropped = self.dropped.saturating_add(1);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len() + usize::from(self.quit)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn quit_pending(&self) -> bool {
        self.quit
    }

    /// Presses dropped because the queue was full, since the last drain.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Take this tick's intents in arrival order, `Quit` last.
    pub fn drain(&mut self) -> ArrayVec<GameAction, { MAX_ACTIONS_PER_TICK + 1 }> {
        let mut out = ArrayVec::new();
        out.extend(self.pending.drain(..));
        if self.quit {
            out.push(GameAction::Quit);
        }
        self.quit = false;
        self.dropped = 0;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push(GameAction::Rotate);
        queue.push(GameAction::MoveLeft);
        queue.push(GameAction::SoftDrop);

        assert_eq!(
            queue.drain().as_slice(),
            &[GameAction::Rotate, GameAction::MoveLeft, GameAction::SoftDrop]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn auto_repeat_within_one_tick_fits() {
        // Three keys held through a 200ms tick at a 30Hz repeat rate.
        let mut queue = InputQueue::new();
        for _ in 0..6 {
            for action in [GameAction::MoveLeft, GameAction::SoftDrop, GameAction::Rotate] {
                assert!(queue.push(action));
            }
        }
        assert_eq!(queue.dropped(), 0);
        assert_eq!(queue.drain().len(), 18);
    }

    #[test]
    fn overflow_is_dropped_but_quit_survives() {
        let mut queue = InputQueue::new();
        for _ in 0..MAX_ACTIONS_PER_TICK {
            assert!(queue.push(GameAction::MoveRight));
        }
        assert!(!queue.push(GameAction::MoveLeft));
        assert!(queue.push(GameAction::Quit));
        assert_eq!(queue.dropped(), 1);

        let actions = queue.drain();
        assert_eq!(actions.len(), MAX_ACTIONS_PER_TICK + 1);
        assert_eq!(actions.last(), Some(&GameAction::Quit));
        assert_eq!(queue.dropped(), 0);
        assert!(!queue.quit_pending());
    }
}
