use super::*;
use std::time::Instant;

/// [`MillisClock`] implementation for `std`.
///
/// Counts milliseconds since construction and wraps at `u32::MAX`, the same
/// shape as an MCU tick counter.
pub struct StdClock {
    epoch: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisClock for StdClock {
    #[inline]
    fn millis(&self) -> u32 {
        self.epoch.elapsed().as_millis() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread::sleep, time::Duration};

    #[test]
    fn std_clock_counts_up() {
        let clock = StdClock::new();
        let start = clock.millis();
        sleep(Duration::from_millis(30));
        let elapsed = clock.millis().wrapping_sub(start);
        assert!(elapsed >= 30);
    }
}
