//! Fixed-interval gravity clock
//!
//! Elapsed time accumulates until it reaches the interval; then one tick is
//! due and the accumulator restarts from zero. Leftover time is dropped, so a
//! long frame never produces a burst of ticks.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Add `elapsed_ms`; returns true when a gravity tick is due.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_interval() {
        let mut clock = GravityClock::new(1000);
        assert!(!clock.advance(600));
        assert!(!clock.advance(399));
        assert!(clock.advance(1));
        assert_eq!(clock.elapsed_ms(), 0);
    }

    #[test]
    fn test_overshoot_is_dropped() {
        let mut clock = GravityClock::new(100);
        assert!(clock.advance(250));
        assert_eq!(clock.elapsed_ms(), 0);
        assert!(!clock.advance(99));
    }

    #[test]
    fn test_reset() {
        let mut clock = GravityClock::new(100);
        clock.advance(80);
        clock.reset();
        assert!(!clock.advance(80));
    }
}
