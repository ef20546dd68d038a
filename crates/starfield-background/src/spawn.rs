//! Randomized repeating timer for shooting-star spawns.

use rand::Rng;

/// Fires at random intervals; each firing succeeds with a fixed probability.
///
/// Driven by the frame clock rather than a host timer, so it can only fire
/// between frames. Each firing reschedules relative to the time it was
/// observed, so a long stall produces one firing, not a backlog.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    min_interval_ms: u64,
    max_interval_ms: u64,
    probability: f64,
    next_fire_ms: u64,
    cancelled: bool,
}

impl SpawnTimer {
    /// Create a timer that first fires at time zero.
    pub fn new(min_interval_ms: u64, max_interval_ms: u64, probability: f64) -> Self {
        Self {
            min_interval_ms: min_interval_ms.min(max_interval_ms),
            max_interval_ms,
            probability: probability.clamp(0.0, 1.0),
            next_fire_ms: 0,
            cancelled: false,
        }
    }

    /// Time of the next scheduled firing.
    pub fn next_fire_ms(&self) -> u64 {
        self.next_fire_ms
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop the timer for good.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Check the timer at `now_ms`. Returns `true` when a firing is due and
    /// its probability roll succeeded.
    pub fn poll<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R) -> bool {
        if self.cancelled || now_ms < self.next_fire_ms {
            return false;
        }

        let spawn = rng.gen_bool(self.probability);
        let interval = rng
            .gen_range(self.min_interval_ms..=self.max_interval_ms)
            .max(1);
        self.next_fire_ms = now_ms.saturating_add(interval);
        spawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_fires_immediately_then_waits() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut timer = SpawnTimer::new(2000, 5000, 1.0);
        assert!(timer.poll(0, &mut rng));
        let next = timer.next_fire_ms();
        assert!((2000..=5000).contains(&next));
        assert!(!timer.poll(next - 1, &mut rng));
        assert!(timer.poll(next, &mut rng));
    }

    #[test]
    fn test_reschedules_from_observed_time() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut timer = SpawnTimer::new(2000, 5000, 1.0);
        timer.poll(0, &mut rng);
        assert!(timer.poll(60_000, &mut rng));
        assert!(timer.next_fire_ms() >= 62_000);
        assert!(!timer.poll(60_001, &mut rng));
    }

    #[test]
    fn test_probability_is_honoured() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut timer = SpawnTimer::new(1, 1, 0.25);
        let firings = 20_000;
        let spawned = (0..firings)
            .filter(|&t| timer.poll(t as u64, &mut rng))
            .count();
        let ratio = spawned as f64 / firings as f64;
        assert!((ratio - 0.25).abs() < 0.02, "ratio was {ratio}");
    }

    #[test]
    fn test_cancel_silences() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut timer = SpawnTimer::new(2000, 5000, 1.0);
        timer.cancel();
        assert!(timer.is_cancelled());
        assert!(!timer.poll(0, &mut rng));
        assert!(!timer.poll(u64::MAX, &mut rng));
    }

    #[test]
    fn test_zero_interval_still_advances() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut timer = SpawnTimer::new(0, 0, 1.0);
        assert!(timer.poll(10, &mut rng));
        assert_eq!(timer.next_fire_ms(), 11);
    }
}
