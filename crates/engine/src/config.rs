//! Event loop settings.

use std::time::Duration;

/// Default capacity of the input queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Default number of line-clear animation frames (lit and unlit alternate)
pub const DEFAULT_FLASH_FRAMES: u32 = 6;

/// Default time between line-clear animation frames
pub const DEFAULT_FLASH_MS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub queue_capacity: usize,
    pub flash_frames: u32,
    pub flash_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            flash_frames: DEFAULT_FLASH_FRAMES,
            flash_interval: Duration::from_millis(DEFAULT_FLASH_MS),
        }
    }
}

impl LoopConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_QUEUE_CAPACITY` (minimum 1)
    /// - `TETRIS_FLASH_FRAMES` (0 disables the animation)
    /// - `TETRIS_FLASH_MS`
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let queue_capacity = env::var("TETRIS_QUEUE_CAPACITY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.queue_capacity)
            .max(1);
        let flash_frames = env::var("TETRIS_FLASH_FRAMES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.flash_frames);
        let flash_interval = env::var("TETRIS_FLASH_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.flash_interval);

        Self {
            queue_capacity,
            flash_frames,
            flash_interval,
        }
    }

    /// No animation delay; useful for headless runs.
    pub fn instant() -> Self {
        Self {
            flash_frames: 0,
            flash_interval: Duration::ZERO,
            ..Self::default()
        }
    }
}
