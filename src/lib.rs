#![cfg_attr(not(feature = "std"), no_std)]

//! Non-blocking LED controller for cooperative polling loops.
//!
//! A [`BlinkingLed`] owns one output pin and can hold it on, hold it off, or
//! blink it at a fixed interval. It never blocks and never spawns anything:
//! while blinking, the surrounding firmware loop must call [`BlinkingLed::poll`]
//! at a cadence no coarser than the blink interval.
//!
//! The pin is any [`embedded_hal::digital::StatefulOutputPin`]; the clock is
//! anything implementing [`MillisClock`]. Both can be faked on a host:
//!
//! ```
//! use blinking_led::{BlinkingLed, clock::FakeClock, pin::FakePin};
//! use blinking_led::fugit::ExtU32;
//!
//! let clock = FakeClock::new();
//! let pin = FakePin::new(false);
//!
//! let mut led = BlinkingLed::new(&pin, &clock);
//! led.blink(100.millis()).unwrap();
//!
//! clock.advance(100);
//! led.poll().unwrap();
//! assert!(pin.level());
//! ```

pub mod clock;
pub mod led;
pub mod pin;

pub use clock::MillisClock;
pub use led::{BlinkingLed, Error};

pub use embedded_hal;
pub use fugit;
