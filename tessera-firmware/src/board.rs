//! Fixed board wiring
//!
//! Everything here is a compile-time fact of the hardware design:
//!
//! - I2C0 SDA on GPIO4, SCL on GPIO5 (internal pull-ups enabled by the
//!   driver). The device is a bus slave, so the clock is supplied by
//!   the master; standard mode (100 kHz) is assumed for the pull-up
//!   dimensioning.
//! - Analog channels ADC0..ADC3 on GPIO26..GPIO29, in selector order.

/// 7-bit I2C slave address the device answers to
pub const SLAVE_ADDRESS: u16 = 0x04;
