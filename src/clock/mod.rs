//! Monotonic millisecond clock boundary.
//!
//! The controller only ever asks "how many milliseconds since an arbitrary
//! epoch", so the whole contract is one free-standing counter read. The counter
//! wraps from `u32::MAX` back to zero; elapsed times are taken with
//! `wrapping_sub`, which stays correct across exactly one wrap.

pub mod fake_impls;
#[cfg(feature = "std")]
pub mod std_impls;

pub use fake_impls::*;
#[cfg(feature = "std")]
pub use std_impls::*;

pub trait MillisClock {
    /// Milliseconds since an arbitrary epoch, e.g. device boot.
    ///
    /// Must be monotonic modulo wrapping: successive reads only ever move
    /// forward, except for the single clean wrap at `u32::MAX`.
    fn millis(&self) -> u32;
}

impl<C: MillisClock> MillisClock for &C {
    #[inline(always)]
    fn millis(&self) -> u32 {
        (*self).millis()
    }
}
