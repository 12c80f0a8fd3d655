//! Construction-time game configuration.

use std::time::Duration;

use crate::{
    CELLS_PER_PIECE, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, INITIAL_DROP_MS, MAX_BOARD_EDGE,
    MIN_BOARD_EDGE, MIN_DROP_MS, SPEEDUP_EVERY_POINTS, SPEEDUP_STEP_MS,
};

/// Board dimensions, spawn anchor and the gravity curve.
///
/// Passed by value into `Board`/`Game` construction; there is no global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Top-left corner of a freshly spawned piece's bounding box, before the
    /// per-shape spawn offset is applied.
    pub spawn: (i32, i32),
    pub initial_delay_ms: u64,
    pub min_delay_ms: u64,
    pub speedup_step_ms: u64,
    pub speedup_every: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_size(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

impl GameConfig {
    /// Default timing on a board of the given size, spawning at the top-center.
    ///
    /// Each edge is clamped to `MIN_BOARD_EDGE..=MAX_BOARD_EDGE`.
    pub fn with_size(width: i32, height: i32) -> Self {
        let width = width.clamp(MIN_BOARD_EDGE, MAX_BOARD_EDGE);
        let height = height.clamp(MIN_BOARD_EDGE, MAX_BOARD_EDGE);
        Self {
            width,
            height,
            spawn: ((width - CELLS_PER_PIECE as i32) / 2, 0),
            initial_delay_ms: INITIAL_DROP_MS,
            min_delay_ms: MIN_DROP_MS,
            speedup_step_ms: SPEEDUP_STEP_MS,
            speedup_every: SPEEDUP_EVERY_POINTS,
        }
    }

    /// Create from environment variables
    ///
    /// - `TETRIS_BOARD_WIDTH`, `TETRIS_BOARD_HEIGHT`
    /// - `TETRIS_INITIAL_DELAY_MS`, `TETRIS_MIN_DELAY_MS`
    /// - `TETRIS_SPEEDUP_STEP_MS`, `TETRIS_SPEEDUP_EVERY`
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        }

        let width = parsed(&lookup, "TETRIS_BOARD_WIDTH").unwrap_or(DEFAULT_BOARD_WIDTH);
        let height = parsed(&lookup, "TETRIS_BOARD_HEIGHT").unwrap_or(DEFAULT_BOARD_HEIGHT);
        let mut config = Self::with_size(width, height);

        if let Some(ms) = parsed(&lookup, "TETRIS_INITIAL_DELAY_MS") {
            config.initial_delay_ms = ms;
        }
        if let Some(ms) = parsed(&lookup, "TETRIS_MIN_DELAY_MS") {
            config.min_delay_ms = ms;
        }
        if let Some(ms) = parsed(&lookup, "TETRIS_SPEEDUP_STEP_MS") {
            config.speedup_step_ms = ms;
        }
        if let Some(points) = parsed::<u32>(&lookup, "TETRIS_SPEEDUP_EVERY") {
            config.speedup_every = points.max(1);
        }
        config.min_delay_ms = config.min_delay_ms.min(config.initial_delay_ms);
        config
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_spawns_top_center() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 18));
        assert_eq!(config.spawn, (3, 0));
        assert_eq!(config.initial_delay(), Duration::from_millis(800));
    }

    #[test]
    fn lookup_overrides_and_ignores_garbage() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_BOARD_WIDTH", "12"),
            ("TETRIS_BOARD_HEIGHT", "tall"),
            ("TETRIS_INITIAL_DELAY_MS", " 600 "),
        ]));
        assert_eq!(config.width, 12);
        assert_eq!(config.height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(config.spawn, (4, 0));
        assert_eq!(config.initial_delay_ms, 600);
        assert_eq!(config.min_delay_ms, MIN_DROP_MS);
    }

    #[test]
    fn tiny_boards_are_clamped() {
        let config = GameConfig::with_size(1, -3);
        assert_eq!((config.width, config.height), (MIN_BOARD_EDGE, MIN_BOARD_EDGE));
        assert_eq!(config.spawn, (0, 0));
    }

    #[test]
    fn huge_boards_are_clamped() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_BOARD_WIDTH", "50000"),
            ("TETRIS_BOARD_HEIGHT", "2147483647"),
        ]));
        assert_eq!((config.width, config.height), (MAX_BOARD_EDGE, MAX_BOARD_EDGE));
        assert_eq!(config.spawn, ((MAX_BOARD_EDGE - 4) / 2, 0));
    }

    #[test]
    fn floor_never_exceeds_initial_delay() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TETRIS_INITIAL_DELAY_MS", "50"),
            ("TETRIS_SPEEDUP_EVERY", "0"),
        ]));
        assert_eq!(config.min_delay_ms, 50);
        assert_eq!(config.speedup_every, 1);
    }
}
