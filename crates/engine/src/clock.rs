//! Fixed-timestep accumulator.

/// Accumulates elapsed time and hands it out in whole ticks.
///
/// The interval is passed per call so engines whose speed changes between
/// ticks (tetris levels) are honoured tick by tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickClock {
    accumulated_ms: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, elapsed_ms: u32) {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms as u64);
    }

    /// Consume one tick's worth of time if enough has accumulated.
    pub fn take_tick(&mut self, interval_ms: u32) -> bool {
        let interval = interval_ms.max(1) as u64;
        if self.accumulated_ms >= interval {
            self.accumulated_ms -= interval;
            true
        } else {
            false
        }
    }

    /// Drop any partial tick.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    pub fn pending_ms(&self) -> u64 {
        self.accumulated_ms
    }

    /// Time left until the next tick at `interval_ms`.
    pub fn until_next_ms(&self, interval_ms: u32) -> u64 {
        (interval_ms as u64).saturating_sub(self.accumulated_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_only() {
        let mut clock = TickClock::new();
        clock.accumulate(450);
        assert!(clock.take_tick(200));
        assert!(clock.take_tick(200));
        assert!(!clock.take_tick(200));
        assert_eq!(clock.pending_ms(), 50);
        assert_eq!(clock.until_next_ms(200), 150);
    }

    #[test]
    fn test_reset_drops_partial_tick() {
        let mut clock = TickClock::new();
        clock.accumulate(199);
        clock.reset();
        clock.accumulate(1);
        assert!(!clock.take_tick(200));
    }

    #[test]
    fn test_zero_interval_does_not_spin() {
        let mut clock = TickClock::new();
        clock.accumulate(3);
        let mut ticks = 0;
        while clock.take_tick(0) {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }
}
