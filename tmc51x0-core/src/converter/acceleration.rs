use super::{Converter, ACCELERATION_SCALER};

impl Converter {
    /// Converts an acceleration register value to real units.
    #[must_use]
    pub const fn acceleration_chip_to_real(&self, acceleration_chip: i32) -> i32 {
        self.acceleration_hz_per_s_to_real(self.acceleration_chip_to_hz_per_s(acceleration_chip))
    }

    /// Converts an acceleration in real units to an acceleration register value.
    #[must_use]
    pub const fn acceleration_real_to_chip(&self, acceleration_real: i32) -> i32 {
        self.acceleration_hz_per_s_to_chip(self.acceleration_real_to_hz_per_s(acceleration_real))
    }

    /// Converts an acceleration register value to microsteps per second squared.
    #[must_use]
    pub const fn acceleration_chip_to_hz_per_s(&self, acceleration_chip: i32) -> i32 {
        (acceleration_chip as i64 * self.acceleration_clock_factor() / ACCELERATION_SCALER) as i32
    }

    /// Converts microsteps per second squared to an acceleration register value.
    #[must_use]
    pub const fn acceleration_hz_per_s_to_chip(&self, acceleration_hz_per_s: i32) -> i32 {
        // the product overflows i64 above 2^26 Hz/s
        (acceleration_hz_per_s as i128 * ACCELERATION_SCALER as i128
            / self.acceleration_clock_factor() as i128) as i32
    }

    /// Converts an acceleration in real units to microsteps per second squared.
    #[must_use]
    pub const fn acceleration_real_to_hz_per_s(&self, acceleration_real: i32) -> i32 {
        self.position_real_to_chip(
            acceleration_real.wrapping_div(self.seconds_per_real_velocity_unit),
        )
    }

    /// Converts microsteps per second squared to an acceleration in real units.
    #[must_use]
    pub const fn acceleration_hz_per_s_to_real(&self, acceleration_hz_per_s: i32) -> i32 {
        (self.position_chip_to_real(acceleration_hz_per_s) as i64
            * self.seconds_per_real_velocity_unit as i64) as i32
    }

    #[inline]
    const fn acceleration_clock_factor(&self) -> i64 {
        let mhz = self.clock_frequency_mhz.get() as i64;
        mhz * mhz * 1000
    }
}
