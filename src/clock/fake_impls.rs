use super::*;
use core::cell::Cell;

/// Manually-advanced [`MillisClock`] for host tests.
///
/// Time only moves when the test says so, which makes deadline and wraparound
/// behavior exactly reproducible. Share it by reference with the code under
/// test (`MillisClock` is implemented for `&C`).
#[derive(Default)]
pub struct FakeClock {
    now: Cell<u32>,
}

impl FakeClock {
    pub const fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Jump to an absolute counter value, including backwards.
    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    /// Move the counter forward, wrapping at `u32::MAX`.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl MillisClock for FakeClock {
    #[inline]
    fn millis(&self) -> u32 {
        self.now.get()
    }
}
