mod acceleration;
pub(crate) mod params;
mod percent;
mod position;
mod settings;
#[cfg(feature = "std")]
mod shared;
mod velocity;

use core::num::NonZeroU8;

use derive_more::Debug;

use crate::common::Freq;

pub use params::*;
pub use settings::ConverterSettings;
#[cfg(feature = "std")]
pub use shared::SharedConverter;

/// Converts between the chip's fixed-point register encodings and
/// application units.
///
/// Position, velocity and acceleration have three representations:
///
/// - chip: the raw register value,
/// - hertz: microsteps per second (per second, for acceleration),
/// - real: application units, `microsteps_per_real_position_unit` microsteps
///   per position unit and `seconds_per_real_velocity_unit` seconds per
///   velocity time base.
///
/// Every conversion is a total function of its input and the configuration.
/// Narrowing to the register width truncates without a check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[debug(
    "Converter {{ clock: {} MHz ({} ns), microsteps/unit: {}, seconds/unit: {} }}",
    clock_frequency_mhz,
    clock_duration_ns,
    microsteps_per_real_position_unit,
    seconds_per_real_velocity_unit
)]
pub struct Converter {
    clock_frequency_mhz: NonZeroU8,
    clock_duration_ns: u16,
    microsteps_per_real_position_unit: i32,
    seconds_per_real_velocity_unit: i32,
}

impl Converter {
    /// Creates a converter with the compiled-in defaults.
    #[must_use]
    pub const fn new() -> Self {
        let settings = ConverterSettings::DEFAULT;
        Self {
            clock_frequency_mhz: settings.clock_frequency_mhz,
            clock_duration_ns: Self::clock_duration_ns_of(settings.clock_frequency_mhz),
            microsteps_per_real_position_unit: settings.microsteps_per_real_position_unit,
            seconds_per_real_velocity_unit: settings.seconds_per_real_velocity_unit,
        }
    }

    /// Creates a converter configured with `settings`.
    #[must_use]
    pub fn with_settings(settings: ConverterSettings) -> Self {
        let mut converter = Self::new();
        converter.setup(settings);
        converter
    }

    /// Applies all three settings. Zero scales fall back to their defaults.
    pub fn setup(&mut self, settings: ConverterSettings) {
        self.set_clock_frequency_mhz(settings.clock_frequency_mhz);
        self.set_microsteps_per_real_position_unit(settings.microsteps_per_real_position_unit);
        self.set_seconds_per_real_velocity_unit(settings.seconds_per_real_velocity_unit);
        tracing::debug!("Converter configured: {:?}", self);
    }

    /// The settings that reproduce this converter.
    #[must_use]
    pub const fn settings(&self) -> ConverterSettings {
        ConverterSettings {
            clock_frequency_mhz: self.clock_frequency_mhz,
            microsteps_per_real_position_unit: self.microsteps_per_real_position_unit,
            seconds_per_real_velocity_unit: self.seconds_per_real_velocity_unit,
        }
    }

    /// Oscillator frequency in MHz.
    #[must_use]
    pub const fn clock_frequency_mhz(&self) -> u8 {
        self.clock_frequency_mhz.get()
    }

    /// Oscillator frequency.
    #[must_use]
    pub const fn clock_frequency(&self) -> Freq<u32> {
        Freq {
            freq: self.clock_frequency_mhz.get() as u32 * 1_000_000,
        }
    }

    /// Duration of one clock cycle in whole nanoseconds.
    #[must_use]
    pub const fn clock_duration_ns(&self) -> u16 {
        self.clock_duration_ns
    }

    /// Duration of one clock cycle, truncated to whole nanoseconds.
    #[must_use]
    pub const fn clock_duration(&self) -> core::time::Duration {
        self.clock_frequency().period()
    }

    /// Microsteps in one real position unit.
    #[must_use]
    pub const fn microsteps_per_real_position_unit(&self) -> i32 {
        self.microsteps_per_real_position_unit
    }

    /// Seconds in the real velocity time base.
    #[must_use]
    pub const fn seconds_per_real_velocity_unit(&self) -> i32 {
        self.seconds_per_real_velocity_unit
    }

    fn set_clock_frequency_mhz(&mut self, clock_frequency_mhz: NonZeroU8) {
        self.clock_frequency_mhz = clock_frequency_mhz;
        self.clock_duration_ns = Self::clock_duration_ns_of(clock_frequency_mhz);
    }

    fn set_microsteps_per_real_position_unit(&mut self, microsteps: i32) {
        if microsteps == 0 {
            tracing::warn!(
                "Microsteps per real position unit must not be zero, using {}",
                MICROSTEPS_PER_REAL_POSITION_UNIT_DEFAULT
            );
            self.microsteps_per_real_position_unit = MICROSTEPS_PER_REAL_POSITION_UNIT_DEFAULT;
            return;
        }
        self.microsteps_per_real_position_unit = microsteps;
    }

    fn set_seconds_per_real_velocity_unit(&mut self, seconds: i32) {
        if seconds == 0 {
            tracing::warn!(
                "Seconds per real velocity unit must not be zero, using {}",
                SECONDS_PER_REAL_VELOCITY_UNIT_DEFAULT
            );
            self.seconds_per_real_velocity_unit = SECONDS_PER_REAL_VELOCITY_UNIT_DEFAULT;
            return;
        }
        self.seconds_per_real_velocity_unit = seconds;
    }

    const fn clock_duration_ns_of(clock_frequency_mhz: NonZeroU8) -> u16 {
        CLOCK_FREQUENCY_TO_DURATION_SCALER / clock_frequency_mhz.get() as u16
    }

    #[inline]
    const fn clock_frequency_hz(&self) -> i64 {
        self.clock_frequency().hz() as i64
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ConverterSettings> for Converter {
    fn from(settings: ConverterSettings) -> Self {
        Self::with_settings(settings)
    }
}
