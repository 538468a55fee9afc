//! Engine configuration, fixed at construction.
//!
//! Board geometry is given in pixels plus a cell size; the grid is the floor
//! division of the two. Everything else is measured in logical steps except the
//! frame cadence, which is wall-clock milliseconds.

use anyhow::{ensure, Result};

use crate::types::{
    BASE_FALL_INTERVAL, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_CELL_SIZE, FRAME_MS,
    LOCK_DELAY_TICKS, ROW_POINTS,
};

/// Smallest grid edge that still fits the 4x4 piece.
pub const MIN_BOARD_CELLS: u16 = 4;

/// Largest grid edge accepted; keeps the board allocation and terminal frame small.
pub const MAX_BOARD_CELLS: u16 = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Board width in pixels.
    pub board_width: u32,
    /// Board height in pixels.
    pub board_height: u32,
    /// Cell edge in pixels.
    pub cell_size: u32,
    /// Steps per gravity row at level 0.
    pub base_fall_interval: u32,
    /// Blocked fall steps before a resting piece merges.
    pub lock_delay: u32,
    /// Row where new pieces appear (rows above it can hold a preview strip).
    pub spawn_offset: i32,
    /// Minimum milliseconds between logical steps.
    pub frame_ms: u64,
    /// Points for clearing 0-4 rows at level 0.
    pub row_points: [u32; 5],
    /// Piece randomizer seed.
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            base_fall_interval: BASE_FALL_INTERVAL,
            lock_delay: LOCK_DELAY_TICKS,
            spawn_offset: 0,
            frame_ms: FRAME_MS,
            row_points: ROW_POINTS,
            seed: 1,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a `cols x rows` grid.
    pub fn with_cells(cols: u16, rows: u16) -> Self {
        let defaults = Self::default();
        Self {
            board_width: cols as u32 * defaults.cell_size,
            board_height: rows as u32 * defaults.cell_size,
            ..defaults
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn cols(&self) -> u16 {
        (self.board_width / self.cell_size.max(1)).min(u16::MAX as u32) as u16
    }

    pub fn rows(&self) -> u16 {
        (self.board_height / self.cell_size.max(1)).min(u16::MAX as u32) as u16
    }

    /// Create from environment variables
    ///
    /// Reads `BLOCKS_WIDTH`, `BLOCKS_HEIGHT`, `BLOCKS_CELL_SIZE`,
    /// `BLOCKS_FALL_INTERVAL`, `BLOCKS_LOCK_DELAY`, `BLOCKS_SPAWN_OFFSET`,
    /// `BLOCKS_FRAME_MS` and `BLOCKS_SEED`. Missing or unparseable values keep
    /// their defaults.
    pub fn from_env() -> Self {
        use std::env;

        fn var<T: std::str::FromStr>(name: &str) -> Option<T> {
            env::var(name).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            board_width: var("BLOCKS_WIDTH").unwrap_or(defaults.board_width),
            board_height: var("BLOCKS_HEIGHT").unwrap_or(defaults.board_height),
            cell_size: var("BLOCKS_CELL_SIZE").unwrap_or(defaults.cell_size),
            base_fall_interval: var("BLOCKS_FALL_INTERVAL")
                .unwrap_or(defaults.base_fall_interval),
            lock_delay: var("BLOCKS_LOCK_DELAY").unwrap_or(defaults.lock_delay),
            spawn_offset: var("BLOCKS_SPAWN_OFFSET").unwrap_or(defaults.spawn_offset),
            frame_ms: var("BLOCKS_FRAME_MS").unwrap_or(defaults.frame_ms),
            row_points: defaults.row_points,
            seed: var("BLOCKS_SEED").unwrap_or(defaults.seed),
        }
    }

    /// Whether `BLOCKS_SEED` was given explicitly.
    pub fn seed_from_env() -> Option<u32> {
        std::env::var("BLOCKS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.cols() >= MIN_BOARD_CELLS && self.rows() >= MIN_BOARD_CELLS,
            "board of {}x{} cells is smaller than {MIN_BOARD_CELLS}x{MIN_BOARD_CELLS}",
            self.cols(),
            self.rows()
        );
        ensure!(
            self.cols() <= MAX_BOARD_CELLS && self.rows() <= MAX_BOARD_CELLS,
            "board of {}x{} cells is larger than {MAX_BOARD_CELLS}x{MAX_BOARD_CELLS}",
            self.cols(),
            self.rows()
        );
        ensure!(
            self.base_fall_interval > 0,
            "base fall interval must be at least one step"
        );
        ensure!(
            self.spawn_offset >= 0 && self.spawn_offset < self.rows() as i32,
            "spawn offset {} outside a board of {} rows",
            self.spawn_offset,
            self.rows()
        );
        ensure!(self.frame_ms > 0, "frame cadence must be positive");
        ensure!(self.row_points[0] == 0, "clearing no rows must score nothing");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!((config.cols(), config.rows()), (13, 23));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn grid_uses_floor_division() {
        let config = EngineConfig {
            board_width: 265,
            board_height: 479,
            ..EngineConfig::default()
        };
        assert_eq!((config.cols(), config.rows()), (13, 23));
    }

    #[test]
    fn with_cells_round_trips() {
        let config = EngineConfig::with_cells(10, 20).with_seed(42);
        assert_eq!((config.cols(), config.rows()), (10, 20));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn rejects_zero_cell_size() {
        let config = EngineConfig {
            cell_size: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_tiny_board() {
        assert!(EngineConfig::with_cells(3, 20).validate().is_err());
        assert!(EngineConfig::with_cells(10, 3).validate().is_err());
        assert!(EngineConfig::with_cells(4, 4).validate().is_ok());
    }

    #[test]
    fn rejects_huge_board() {
        let config = EngineConfig {
            board_width: 1_310_700,
            ..EngineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("larger than"));
        assert!(EngineConfig::with_cells(10, 257).validate().is_err());
        assert!(EngineConfig::with_cells(256, 256).validate().is_ok());
    }

    #[test]
    fn rejects_spawn_offset_outside_board() {
        let mut config = EngineConfig::with_cells(10, 20);
        config.spawn_offset = 20;
        assert!(config.validate().is_err());
        config.spawn_offset = -1;
        assert!(config.validate().is_err());
        config.spawn_offset = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_fall_interval() {
        let config = EngineConfig {
            base_fall_interval: 0,
            ..EngineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fall interval"));
    }
}
