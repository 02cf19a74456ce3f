use std::time::Duration;

/// Tracks simulation time: a monotonic tick counter at a fixed tick rate.
#[derive(Debug, Clone)]
pub struct SimClock {
    tick: u64,
    tick_rate: u32,
}

impl SimClock {
    /// Create a new clock at tick 0.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick: 0,
            tick_rate: tick_rate.max(1),
        }
    }

    /// Advance the clock by one tick. Returns the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Ticks per simulated second.
    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Length of one tick at the configured rate.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }

    /// Simulated time covered by the ticks run so far.
    pub fn simulated(&self) -> Duration {
        Duration::from_nanos(self.tick.saturating_mul(1_000_000_000) / u64::from(self.tick_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_initial_state() {
        let clock = SimClock::new(60);
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.simulated(), Duration::ZERO);
    }

    #[test]
    fn clock_advance_increments() {
        let mut clock = SimClock::new(10);
        clock.advance();
        clock.advance();
        assert_eq!(clock.advance(), 3);
        assert_eq!(clock.tick(), 3);
        assert_eq!(clock.simulated(), Duration::from_millis(300));
    }

    #[test]
    fn tick_duration_from_rate() {
        assert_eq!(SimClock::new(50).tick_duration(), Duration::from_millis(20));
        // A zero rate is treated as one tick per second.
        assert_eq!(SimClock::new(0).tick_duration(), Duration::from_secs(1));
    }
}
