//! Digital pin boundary.
//!
//! The controller consumes three primitives: configure-as-output, write level,
//! read level. In the `embedded-hal` model the first is a type precondition
//! (only a pin already in output mode implements [`StatefulOutputPin`]) and the
//! other two are the trait methods, so no extra pin trait is needed here.

pub mod fake_impls;

pub use fake_impls::*;

pub use embedded_hal::digital::{OutputPin, StatefulOutputPin};
