use super::{Converter, DIVISOR_DEFAULT, VELOCITY_SCALER};

impl Converter {
    /// Converts a velocity register value to real units.
    #[must_use]
    pub const fn velocity_chip_to_real(&self, velocity_chip: i32) -> i32 {
        self.velocity_hz_to_real(self.velocity_chip_to_hz(velocity_chip))
    }

    /// Converts a velocity in real units to a velocity register value.
    #[must_use]
    pub const fn velocity_real_to_chip(&self, velocity_real: i32) -> i32 {
        self.velocity_hz_to_chip(self.velocity_real_to_hz(velocity_real))
    }

    /// Converts a tstep reading to a velocity in real units.
    #[must_use]
    pub const fn tstep_to_velocity_real(&self, tstep: i32) -> i32 {
        self.velocity_hz_to_real(self.tstep_to_velocity_hz(tstep))
    }

    /// Converts a velocity in real units to a tstep value.
    #[must_use]
    pub const fn velocity_real_to_tstep(&self, velocity_real: i32) -> i32 {
        self.velocity_hz_to_tstep(self.velocity_real_to_hz(velocity_real))
    }

    /// Converts a velocity register value to microsteps per second.
    #[must_use]
    pub const fn velocity_chip_to_hz(&self, velocity_chip: i32) -> i32 {
        (velocity_chip as i64 * self.clock_frequency_hz() / VELOCITY_SCALER) as i32
    }

    /// Converts microsteps per second to a velocity register value.
    #[must_use]
    pub const fn velocity_hz_to_chip(&self, velocity_hz: i32) -> i32 {
        (velocity_hz as i64 * VELOCITY_SCALER / self.clock_frequency_hz()) as i32
    }

    /// Converts a velocity in real units to microsteps per second.
    ///
    /// The time base is divided out before scaling, so real velocities
    /// smaller than one unit per time base become zero.
    #[must_use]
    pub const fn velocity_real_to_hz(&self, velocity_real: i32) -> i32 {
        self.position_real_to_chip(velocity_real.wrapping_div(self.seconds_per_real_velocity_unit))
    }

    /// Converts microsteps per second to a velocity in real units.
    #[must_use]
    pub const fn velocity_hz_to_real(&self, velocity_hz: i32) -> i32 {
        (self.position_chip_to_real(velocity_hz) as i64 * self.seconds_per_real_velocity_unit as i64)
            as i32
    }

    /// Converts a tstep value (clock cycles per microstep) to microsteps per second.
    ///
    /// A zero tstep is read as [`DIVISOR_DEFAULT`].
    #[must_use]
    pub const fn tstep_to_velocity_hz(&self, tstep: i32) -> i32 {
        let tstep = if tstep == 0 { DIVISOR_DEFAULT } else { tstep };
        (self.clock_frequency_hz() / tstep as i64) as i32
    }

    /// Converts microsteps per second to a tstep value (clock cycles per microstep).
    ///
    /// A zero velocity is read as [`DIVISOR_DEFAULT`].
    #[must_use]
    pub const fn velocity_hz_to_tstep(&self, velocity_hz: i32) -> i32 {
        let velocity_hz = if velocity_hz == 0 {
            DIVISOR_DEFAULT
        } else {
            velocity_hz
        };
        (self.clock_frequency_hz() / velocity_hz as i64) as i32
    }
}
