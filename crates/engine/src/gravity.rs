//! Gravity timer.
//!
//! A restartable periodic tick. While stopped, [`Gravity::tick`] never
//! completes, so it can sit in a `select!` arm unconditionally.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[derive(Debug)]
pub struct Gravity {
    interval: Option<Interval>,
}

impl Gravity {
    /// A stopped timer
    pub fn stopped() -> Self {
        Self { interval: None }
    }

    /// A running timer whose first tick arrives one `period` from now
    pub fn started(period: Duration) -> Self {
        let mut gravity = Self::stopped();
        gravity.restart(period);
        gravity
    }

    /// (Re)start with a new period; the first tick is one full period away.
    pub fn restart(&mut self, period: Duration) {
        let period = period.max(Duration::from_millis(1));
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(Interval::period)
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, task};

    // The paused clock may round a deadline up to the next millisecond.
    fn assert_near(elapsed: Duration, ms: u64) {
        let expected = Duration::from_millis(ms);
        assert!(
            elapsed >= expected && elapsed <= expected + Duration::from_millis(2),
            "elapsed {elapsed:?}, expected about {expected:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_one_period_away() {
        let start = Instant::now();
        let mut gravity = Gravity::started(Duration::from_millis(800));
        gravity.tick().await;
        assert_near(start.elapsed(), 800);
        gravity.tick().await;
        assert_near(start.elapsed(), 1600);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_gravity_never_ticks() {
        let mut gravity = Gravity::started(Duration::from_millis(10));
        gravity.stop();
        assert!(!gravity.is_running());

        let mut tick = task::spawn(gravity.tick());
        assert_pending!(tick.poll());
        tokio::time::advance(Duration::from_secs(5)).await;
        assert_pending!(tick.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_changes_period() {
        let mut gravity = Gravity::started(Duration::from_millis(800));
        gravity.restart(Duration::from_millis(250));
        assert_eq!(gravity.period(), Some(Duration::from_millis(250)));

        let start = Instant::now();
        gravity.tick().await;
        assert_near(start.elapsed(), 250);
    }
}
