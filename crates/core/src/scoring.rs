//! Scoring module - classic row-clear points and the gravity curve

use std::time::Duration;

use crate::types::{GameConfig, SINGLE_ROW_POINTS};

/// Points for clearing `rows` rows with one piece: 100, 200, 400, 800, ...
///
/// Zero rows score nothing.
pub fn line_clear_points(rows: usize) -> u32 {
    if rows == 0 {
        return 0;
    }
    let shift = (rows - 1).min(31) as u32;
    SINGLE_ROW_POINTS.saturating_mul(1u32 << shift)
}

/// Gravity interval for a score.
///
/// Starts at `initial_delay_ms`, loses `speedup_step_ms` for every
/// `speedup_every` points and never drops below `min_delay_ms`.
pub fn drop_delay(score: u32, config: &GameConfig) -> Duration {
    let steps = u64::from(score / config.speedup_every.max(1));
    let reduction = steps.saturating_mul(config.speedup_step_ms);
    let ms = config
        .initial_delay_ms
        .saturating_sub(reduction)
        .max(config.min_delay_ms);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_row_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 200);
        assert_eq!(line_clear_points(3), 400);
        assert_eq!(line_clear_points(4), 800);
    }

    #[test]
    fn delay_steps_down_per_thousand_points() {
        let config = GameConfig::default();
        assert_eq!(drop_delay(0, &config), Duration::from_millis(800));
        assert_eq!(drop_delay(999, &config), Duration::from_millis(800));
        assert_eq!(drop_delay(1000, &config), Duration::from_millis(750));
        assert_eq!(drop_delay(5400, &config), Duration::from_millis(550));
    }

    #[test]
    fn delay_is_floored() {
        let config = GameConfig::default();
        assert_eq!(drop_delay(14_000, &config), Duration::from_millis(100));
        assert_eq!(drop_delay(u32::MAX, &config), Duration::from_millis(100));
    }
}
