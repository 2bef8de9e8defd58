use tmc51x0_core::common::{Freq, MHz};

/// SPI clock polarity and phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SpiMode {
    /// CPOL = 0, CPHA = 0
    Mode0 = 0,
    /// CPOL = 0, CPHA = 1
    Mode1 = 1,
    /// CPOL = 1, CPHA = 0
    Mode2 = 2,
    /// CPOL = 1, CPHA = 1
    #[default]
    Mode3 = 3,
}

/// Bit order on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    /// Most significant bit first
    #[default]
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// Bus parameters passed to [`Link::open`].
///
/// [`Link::open`]: crate::link::Link::open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiParameters {
    /// SCK frequency
    pub clock: Freq<u32>,
    /// Clock polarity and phase
    pub mode: SpiMode,
    /// Bit order
    pub bit_order: BitOrder,
}

impl SpiParameters {
    /// Default SCK frequency in MHz, the fastest the chip accepts on its internal clock.
    pub const CLOCK_MHZ_DEFAULT: u32 = 4;

    /// Creates the default parameters: 4 MHz, mode 3, MSB first.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Self::CLOCK_MHZ_DEFAULT * MHz,
            mode: SpiMode::Mode3,
            bit_order: BitOrder::MsbFirst,
        }
    }

    /// Sets the SCK frequency.
    #[must_use]
    pub fn with_clock(mut self, clock: Freq<u32>) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for SpiParameters {
    fn default() -> Self {
        Self::new()
    }
}
