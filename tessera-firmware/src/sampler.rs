//! On-board ADC sampling
//!
//! Implements the core sampling abstraction on the RP2040's ADC. One
//! input channel is claimed per exposed analog pin at startup; a sample
//! selects the channel and performs one blocking conversion.

use embassy_rp::adc::{Adc, Blocking, Channel, Error};

use tessera_core::{AdcChannel, AnalogSource};

/// The four analog inputs behind the bus responder, in selector order
pub struct OnboardAdc {
    adc: Adc<'static, Blocking>,
    inputs: [Channel<'static>; AdcChannel::COUNT as usize],
}

impl OnboardAdc {
    /// Wrap the converter and its configured input channels
    pub fn new(
        adc: Adc<'static, Blocking>,
        inputs: [Channel<'static>; AdcChannel::COUNT as usize],
    ) -> Self {
        Self { adc, inputs }
    }
}

impl AnalogSource for OnboardAdc {
    type Error = Error;

    fn sample(&mut self, channel: AdcChannel) -> Result<u16, Error> {
        self.adc
            .blocking_read(&mut self.inputs[channel.index() as usize])
    }
}
