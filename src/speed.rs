//! Tick interval control.
//!
//! The interval lives in a `watch` channel so the ticking task picks up a
//! replacement immediately instead of finishing a wait on the old period.

use crate::core::constants::{MIN_TICK_INTERVAL_MS, WIN_INTERVAL_STEP_MS};
use std::time::Duration;
use tokio::sync::watch;

/// Interval after one more crossing: minus 200 ms while above 200 ms,
/// halved otherwise. Never below 1 ms.
pub fn sped_up_interval_ms(interval_ms: u64) -> u64 {
    let next = if interval_ms > WIN_INTERVAL_STEP_MS {
        interval_ms - WIN_INTERVAL_STEP_MS
    } else {
        interval_ms / 2
    };
    next.max(MIN_TICK_INTERVAL_MS)
}

#[derive(Debug)]
pub struct SpeedController {
    initial_ms: u64,
    interval_ms: u64,
    ticker: watch::Sender<Duration>,
}

impl SpeedController {
    pub fn new(initial: Duration) -> Self {
        let initial_ms = (initial.as_millis() as u64).max(MIN_TICK_INTERVAL_MS);
        let (ticker, _) = watch::channel(Duration::from_millis(initial_ms));
        Self {
            initial_ms,
            interval_ms: initial_ms,
            ticker,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Receiver for the ticking task. Sees every interval replacement.
    pub fn subscribe(&self) -> watch::Receiver<Duration> {
        self.ticker.subscribe()
    }

    /// Shorten the interval after a crossing.
    pub fn speed_up(&mut self) {
        self.replace(sped_up_interval_ms(self.interval_ms));
    }

    /// Back to the initial interval after a collision.
    pub fn reset(&mut self) {
        self.replace(self.initial_ms);
    }

    fn replace(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
        self.ticker.send_replace(Duration::from_millis(interval_ms));
        log::debug!("tick interval now {}ms", interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_up_rule() {
        assert_eq!(sped_up_interval_ms(1000), 800);
        assert_eq!(sped_up_interval_ms(300), 100);
        assert_eq!(sped_up_interval_ms(201), 1);
        assert_eq!(sped_up_interval_ms(200), 100);
        assert_eq!(sped_up_interval_ms(100), 50);
        assert_eq!(sped_up_interval_ms(3), 1);
        assert_eq!(sped_up_interval_ms(1), 1);
    }

    #[test]
    fn test_interval_is_non_increasing_across_wins() {
        let mut speed = SpeedController::new(Duration::from_millis(1000));
        let mut previous = speed.interval_ms();
        for _ in 0..20 {
            speed.speed_up();
            assert!(speed.interval_ms() <= previous);
            assert!(speed.interval_ms() >= 1);
            previous = speed.interval_ms();
        }
        assert_eq!(speed.interval_ms(), 1);
    }

    #[test]
    fn test_reset_restores_initial_interval() {
        let mut speed = SpeedController::new(Duration::from_millis(1000));
        speed.speed_up();
        speed.speed_up();
        assert_eq!(speed.interval_ms(), 600);
        speed.reset();
        assert_eq!(speed.interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_subscribers_see_replacements() {
        let mut speed = SpeedController::new(Duration::from_millis(1000));
        let mut rx = speed.subscribe();
        assert_eq!(*rx.borrow_and_update(), Duration::from_millis(1000));

        speed.speed_up();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Duration::from_millis(800));

        speed.reset();
        assert_eq!(*rx.borrow_and_update(), Duration::from_millis(1000));
    }
}
