//! Analog channel identifiers
//!
//! The device exposes four analog inputs, addressed over the wire by a
//! single selector byte. Selector values 0-3 map to a channel; anything
//! else is unmapped and handled by the read path's fail-closed policy.

/// Logical analog channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// Channel 0 (selector byte 0x00)
    Adc0,
    /// Channel 1 (selector byte 0x01)
    Adc1,
    /// Channel 2 (selector byte 0x02)
    Adc2,
    /// Channel 3 (selector byte 0x03)
    Adc3,
}

impl AdcChannel {
    /// Number of exposed channels
    pub const COUNT: u8 = 4;

    /// All channels in selector order
    pub const ALL: [AdcChannel; Self::COUNT as usize] = [
        AdcChannel::Adc0,
        AdcChannel::Adc1,
        AdcChannel::Adc2,
        AdcChannel::Adc3,
    ];

    /// Map a selector byte to a channel
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(AdcChannel::Adc0),
            1 => Some(AdcChannel::Adc1),
            2 => Some(AdcChannel::Adc2),
            3 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }

    /// Selector index of this channel
    pub fn index(&self) -> u8 {
        *self as u8
    }
}
