//! The LED controller itself.

use crate::clock::MillisClock;
use embedded_hal::digital::StatefulOutputPin;
use fugit::MillisDurationU32;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A blink interval of zero is indistinguishable from the steady state.
    ZeroInterval,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ZeroInterval => f.write_str("blink interval must be greater than zero"),
        }
    }
}

// ----------------------------------------------------------------------------

/// A single LED on one output pin: hold it on, hold it off, or blink it.
///
/// The controller owns the pin, so exactly one controller drives any given pin.
/// It has two states: steady (`interval == 0`, pin held at a fixed level) and
/// blinking (`interval > 0`, pin toggles on qualifying [`poll`](Self::poll)
/// calls). There is no internal timing source beyond the injected clock and no
/// work happens outside the four operations.
pub struct BlinkingLed<P, C> {
    pin: P,
    clock: C,
    /// Blink half-period in milliseconds, 0 while steady.
    interval: u32,
    /// Clock reading at the last toggle, or at blink activation.
    last_update: u32,
}

impl<P, C> BlinkingLed<P, C>
where
    P: StatefulOutputPin,
    C: MillisClock,
{
    /// Binds a controller to an output pin and a clock.
    ///
    /// The pin keeps whatever level it already had; the controller starts in
    /// the steady state.
    pub fn new(pin: P, clock: C) -> Self {
        let last_update = clock.millis();
        Self {
            pin,
            clock,
            interval: 0,
            last_update,
        }
    }

    /// Turns the LED on. Stops blinking. Idempotent.
    pub fn turn_on(&mut self) -> Result<(), P::Error> {
        self.interval = 0;
        self.pin.set_high()
    }

    /// Turns the LED off. Stops blinking. Idempotent.
    pub fn turn_off(&mut self) -> Result<(), P::Error> {
        self.interval = 0;
        self.pin.set_low()
    }

    /// Starts blinking at a constant half-period.
    ///
    /// Does not change the pin level itself; the first toggle happens on a
    /// later [`poll`](Self::poll) once `interval` has elapsed. While blinking,
    /// `poll` must be called at a cadence no coarser than `interval`, or
    /// toggles are delayed (never corrupted).
    ///
    /// A zero interval is rejected: it would silently collapse into the
    /// steady state without ever touching the pin.
    pub fn blink(&mut self, interval: MillisDurationU32) -> Result<(), Error> {
        if interval.ticks() == 0 {
            return Err(Error::ZeroInterval);
        }
        self.last_update = self.clock.millis();
        self.interval = interval.ticks();
        Ok(())
    }

    /// Advances the blink state machine. Only required while blinking; a no-op
    /// (and cheap) otherwise.
    ///
    /// Performs at most one toggle per call: if polling falls behind, missed
    /// deadlines coalesce into a single toggle rather than a catch-up burst.
    pub fn poll(&mut self) -> Result<(), P::Error> {
        if self.interval == 0 {
            return Ok(());
        }

        let now = self.clock.millis();
        // wrapping_sub keeps the elapsed value correct across a counter wrap
        if now.wrapping_sub(self.last_update) >= self.interval {
            self.pin.toggle()?;
            self.last_update = now;
        }
        Ok(())
    }

    pub fn is_blinking(&self) -> bool {
        self.interval > 0
    }

    /// Current blink half-period, `None` while steady.
    pub fn interval(&self) -> Option<MillisDurationU32> {
        if self.interval > 0 {
            Some(MillisDurationU32::from_ticks(self.interval))
        } else {
            None
        }
    }

    /// Releases the pin, leaving it at its last-driven level.
    pub fn release(self) -> P {
        self.pin
    }
}
