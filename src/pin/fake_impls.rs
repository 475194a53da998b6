use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// In-memory pin sink for host tests.
///
/// The pin traits are implemented for `&FakePin`, so a test can hand a
/// reference to the code under test and keep another one around to observe the
/// level. A write counter distinguishes "toggled twice" from "never toggled".
pub struct FakePin {
    level: Cell<bool>,
    writes: Cell<u32>,
}

impl FakePin {
    pub const fn new(level: bool) -> Self {
        Self {
            level: Cell::new(level),
            writes: Cell::new(0),
        }
    }

    /// Current logic level, `true` = high.
    pub fn level(&self) -> bool {
        self.level.get()
    }

    /// Number of level writes since construction.
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl ErrorType for &FakePin {
    type Error = Infallible;
}

impl OutputPin for &FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl StatefulOutputPin for &FakePin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}
