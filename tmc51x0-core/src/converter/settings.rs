use core::num::NonZeroU8;

use super::params::{
    CLOCK_FREQUENCY_MHZ_DEFAULT, MICROSTEPS_PER_REAL_POSITION_UNIT_DEFAULT,
    SECONDS_PER_REAL_VELOCITY_UNIT_DEFAULT,
};

const CLOCK_FREQUENCY_MHZ: NonZeroU8 = match NonZeroU8::new(CLOCK_FREQUENCY_MHZ_DEFAULT) {
    Some(mhz) => mhz,
    None => panic!("default clock frequency must not be zero"),
};

/// Settings applied to a [`Converter`] by [`Converter::setup`].
///
/// A zero scale is not an error: [`Converter::setup`] replaces it with the
/// default.
///
/// [`Converter`]: crate::converter::Converter
/// [`Converter::setup`]: crate::converter::Converter::setup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterSettings {
    /// Oscillator frequency of the chip in MHz.
    pub clock_frequency_mhz: NonZeroU8,
    /// Microsteps in one application position unit.
    pub microsteps_per_real_position_unit: i32,
    /// Seconds in the time base of application velocity and acceleration units.
    pub seconds_per_real_velocity_unit: i32,
}

impl ConverterSettings {
    /// The compiled-in defaults: 16 MHz, one microstep per unit, one second time base.
    pub const DEFAULT: Self = Self {
        clock_frequency_mhz: CLOCK_FREQUENCY_MHZ,
        microsteps_per_real_position_unit: MICROSTEPS_PER_REAL_POSITION_UNIT_DEFAULT,
        seconds_per_real_velocity_unit: SECONDS_PER_REAL_VELOCITY_UNIT_DEFAULT,
    };

    /// Creates the default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the clock frequency.
    #[must_use]
    pub const fn with_clock_frequency_mhz(mut self, clock_frequency_mhz: NonZeroU8) -> Self {
        self.clock_frequency_mhz = clock_frequency_mhz;
        self
    }

    /// Sets the position scale.
    #[must_use]
    pub const fn with_microsteps_per_real_position_unit(mut self, microsteps: i32) -> Self {
        self.microsteps_per_real_position_unit = microsteps;
        self
    }

    /// Sets the velocity time base.
    #[must_use]
    pub const fn with_seconds_per_real_velocity_unit(mut self, seconds: i32) -> Self {
        self.seconds_per_real_velocity_unit = seconds;
        self
    }
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
