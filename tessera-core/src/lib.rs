//! Board-agnostic core logic for the Tessera analog bridge firmware
//!
//! This crate contains everything that does not depend on a specific
//! hardware implementation:
//!
//! - Analog channel identifiers and the selector-byte mapping
//! - The sampling abstraction implemented by chip-specific backends
//! - The bus responder state machine (selector latching, read answers,
//!   fail-closed policy)
//!
//! The firmware crate binds these to the RP2040; tests bind them to
//! mock samplers and run on the host.

#![no_std]
#![deny(unsafe_code)]

// Host tests (proptest) need std
#[cfg(test)]
extern crate std;

pub mod channel;
pub mod responder;
pub mod source;

// Re-export key types at crate root for convenience
pub use channel::AdcChannel;
pub use responder::{BusResponder, RespondError};
pub use source::AnalogSource;
