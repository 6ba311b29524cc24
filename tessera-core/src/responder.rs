//! I2C bus responder state machine
//!
//! The responder owns the one piece of persistent protocol state: the
//! most recently written channel selector. A master write latches a new
//! selector; a master read samples the selected channel and answers
//! with the conversion result, high byte first.
//!
//! Selector bytes are latched unconditionally, so last-write-wins holds
//! for any byte. Validation happens on the read path: a read while the
//! selector is unmapped, or while the conversion fails, is answered
//! fail-closed with [`BusResponder::FAIL_CLOSED`] by the caller.

use crate::channel::AdcChannel;
use crate::source::AnalogSource;

/// Errors answering a read request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RespondError<E> {
    /// The latched selector does not map to a configured channel
    InvalidChannel(u8),
    /// The underlying conversion failed
    Sample(E),
}

/// Slave-side protocol state
///
/// One instance lives in the bus task; all mutation happens there, so
/// selector accesses are serialized by construction.
#[derive(Debug, Clone)]
pub struct BusResponder {
    selected: u8,
}

impl BusResponder {
    /// Wire answer for a read that cannot be served (unmapped selector
    /// or failed conversion). All-zero, so a misconfigured master reads
    /// 0 rather than stale or undefined data.
    pub const FAIL_CLOSED: [u8; 2] = [0x00, 0x00];

    /// Create a responder with channel 0 selected
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Currently latched selector byte
    pub fn selected_raw(&self) -> u8 {
        self.selected
    }

    /// Currently selected channel, if the selector maps to one
    pub fn selected_channel(&self) -> Option<AdcChannel> {
        AdcChannel::from_index(self.selected)
    }

    /// Latch a new selector byte, overwriting the previous value
    ///
    /// The byte is not validated here; an unmapped selector surfaces as
    /// [`RespondError::InvalidChannel`] on the next read.
    pub fn select(&mut self, selector: u8) {
        self.selected = selector;
    }

    /// Latch selectors from a master write burst
    ///
    /// Each byte overwrites the previous selection in order, so the
    /// last byte of the burst wins. An empty write changes nothing.
    pub fn select_from_write(&mut self, data: &[u8]) {
        for &byte in data {
            self.select(byte);
        }
    }

    /// Answer a read request
    ///
    /// Performs one fresh conversion of the selected channel and
    /// encodes the result big-endian. Nothing is cached between reads.
    pub fn respond<S: AnalogSource>(
        &self,
        source: &mut S,
    ) -> Result<[u8; 2], RespondError<S::Error>> {
        let channel = self
            .selected_channel()
            .ok_or(RespondError::InvalidChannel(self.selected))?;
        let raw = source.sample(channel).map_err(RespondError::Sample)?;
        Ok(raw.to_be_bytes())
    }
}

impl Default for BusResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sampler returning canned per-channel values, counting conversions
    struct MockSource {
        values: [u16; 4],
        conversions: usize,
    }

    impl MockSource {
        fn new(values: [u16; 4]) -> Self {
            Self {
                values,
                conversions: 0,
            }
        }
    }

    impl AnalogSource for MockSource {
        type Error = ();

        fn sample(&mut self, channel: AdcChannel) -> Result<u16, ()> {
            self.conversions += 1;
            Ok(self.values[channel.index() as usize])
        }
    }

    /// Sampler whose conversions always fail
    struct FaultySource;

    impl AnalogSource for FaultySource {
        type Error = u8;

        fn sample(&mut self, _channel: AdcChannel) -> Result<u16, u8> {
            Err(0xEE)
        }
    }

    #[test]
    fn test_write_then_read() {
        let values = [0x0100, 0x0200, 0x0300, 0x0400];
        let mut source = MockSource::new(values);
        let mut responder = BusResponder::new();

        for selector in 0..4u8 {
            responder.select(selector);
            let answer = responder.respond(&mut source).unwrap();
            assert_eq!(answer, values[selector as usize].to_be_bytes());
        }
    }

    #[test]
    fn test_read_samples_at_read_time() {
        let mut source = MockSource::new([10, 20, 30, 40]);
        let mut responder = BusResponder::new();

        responder.select(1);
        // The input changes after the write; the read must see the new value
        source.values[1] = 999;
        let answer = responder.respond(&mut source).unwrap();
        assert_eq!(answer, 999u16.to_be_bytes());
    }

    #[test]
    fn test_default_selection_is_channel_zero() {
        let mut source = MockSource::new([0xABCD, 0, 0, 0]);
        let responder = BusResponder::new();

        let answer = responder.respond(&mut source).unwrap();
        assert_eq!(answer, [0xAB, 0xCD]);
    }

    #[test]
    fn test_byte_order_big_endian() {
        let mut source = MockSource::new([0x1234, 0, 0, 0]);
        let responder = BusResponder::new();

        assert_eq!(responder.respond(&mut source).unwrap(), [0x12, 0x34]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut source = MockSource::new([11, 22, 33, 44]);
        let mut responder = BusResponder::new();

        responder.select(1);
        responder.select(3);
        let answer = responder.respond(&mut source).unwrap();
        assert_eq!(answer, 44u16.to_be_bytes());
    }

    #[test]
    fn test_each_read_is_a_fresh_conversion() {
        let mut source = MockSource::new([7, 8, 9, 10]);
        let mut responder = BusResponder::new();

        responder.select(2);
        let first = responder.respond(&mut source).unwrap();
        let second = responder.respond(&mut source).unwrap();

        assert_eq!(first, second);
        assert_eq!(source.conversions, 2);
        assert_eq!(responder.selected_raw(), 2);
    }

    #[test]
    fn test_burst_write_latches_last_byte() {
        let mut responder = BusResponder::new();

        responder.select_from_write(&[1, 3]);
        assert_eq!(responder.selected_channel(), Some(AdcChannel::Adc3));
    }

    #[test]
    fn test_empty_write_keeps_selection() {
        let mut responder = BusResponder::new();

        responder.select(2);
        responder.select_from_write(&[]);
        assert_eq!(responder.selected_raw(), 2);
    }

    #[test]
    fn test_out_of_range_selector_fails_closed() {
        let mut source = MockSource::new([1, 2, 3, 4]);
        let mut responder = BusResponder::new();

        responder.select(0xFF);
        let result = responder.respond(&mut source);
        assert_eq!(result, Err(RespondError::InvalidChannel(0xFF)));
        // No conversion happens for an unmapped selector
        assert_eq!(source.conversions, 0);
        // The wire answer for this case is all-zero
        assert_eq!(BusResponder::FAIL_CLOSED, [0x00, 0x00]);
    }

    #[test]
    fn test_conversion_failure_reported() {
        let mut responder = BusResponder::new();

        responder.select(0);
        let result = responder.respond(&mut FaultySource);
        assert_eq!(result, Err(RespondError::Sample(0xEE)));
    }

    #[test]
    fn test_scenario_select_channel_two() {
        // Master writes 0x02, then reads two bytes
        let mut source = MockSource::new([0, 0, 0x0BB8, 0]);
        let mut responder = BusResponder::new();

        responder.select_from_write(&[0x02]);
        let answer = responder.respond(&mut source).unwrap();
        assert_eq!(answer, [0x0B, 0xB8]);
    }
}
