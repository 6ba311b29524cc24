//! Analog sampling abstraction
//!
//! Provides the trait implemented by chip-specific ADC backends. The
//! firmware implements it on the on-board converter; host tests
//! implement it with canned values.

use crate::channel::AdcChannel;

/// One-shot analog sampler
///
/// A conversion selects the requested channel on the underlying
/// converter and blocks until the hardware result is available. No
/// filtering, averaging, or calibration is applied.
pub trait AnalogSource {
    /// Error type for failed conversions
    type Error;

    /// Sample the given channel, returning the raw unsigned result
    ///
    /// Takes `&mut self` because a conversion claims the converter
    /// exclusively.
    fn sample(&mut self, channel: AdcChannel) -> Result<u16, Self::Error>;
}
