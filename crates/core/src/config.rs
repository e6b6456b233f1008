//! Construction-time configuration.
//!
//! Board geometry and tick rate are fixed once a simulation is built. The
//! defaults reproduce the nominal 300x600 px playfield at 30 px per block
//! (10 x 20 cells) and 5 ticks per second.

use std::time::Duration;

use crate::error::ConfigError;
use crate::types::{
    BLOCK_SIZE_PX, BOARD_COLS, BOARD_ROWS, TICKS_PER_SECOND, WINDOW_HEIGHT_PX, WINDOW_WIDTH_PX,
};

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Carve a pixel window into whole blocks.
    ///
    /// Partial blocks at the right/bottom edge are discarded (integer division).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::BoardConfig;
    ///
    /// let board = BoardConfig::from_window_px(300, 600, 30).unwrap();
    /// assert_eq!((board.rows, board.cols), (20, 10));
    ///
    /// assert!(BoardConfig::from_window_px(20, 600, 30).is_err());
    /// ```
    pub fn from_window_px(
        width_px: u32,
        height_px: u32,
        block_px: u32,
    ) -> Result<Self, ConfigError> {
        if block_px == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        let board = Self {
            rows: (height_px / block_px) as usize,
            cols: (width_px / block_px) as usize,
        };
        board.validate()?;
        Ok(board)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
        }
    }
}

/// Everything a shell needs to build and drive a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub ticks_per_second: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Wall-clock period of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::from_window_px(WINDOW_WIDTH_PX, WINDOW_HEIGHT_PX, BLOCK_SIZE_PX)
                .unwrap_or_default(),
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_twenty_at_five_hz() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.board, BoardConfig::new(20, 10));
        assert_eq!(cfg.ticks_per_second, 5);
        assert_eq!(cfg.tick_duration(), Duration::from_millis(200));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn window_smaller_than_a_block_is_rejected() {
        assert_eq!(
            BoardConfig::from_window_px(29, 600, 30),
            Err(ConfigError::ZeroDimension { rows: 20, cols: 0 })
        );
        assert_eq!(
            BoardConfig::from_window_px(300, 600, 0),
            Err(ConfigError::ZeroBlockSize)
        );
    }

    #[test]
    fn partial_blocks_are_truncated() {
        let board = BoardConfig::from_window_px(319, 601, 30).unwrap();
        assert_eq!((board.rows, board.cols), (20, 10));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let cfg = GameConfig {
            ticks_per_second: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickRate));
    }
}
