use super::Converter;

impl Converter {
    /// Converts a position in microsteps to real units, truncating toward zero.
    #[must_use]
    pub const fn position_chip_to_real(&self, position_chip: i32) -> i32 {
        position_chip.wrapping_div(self.microsteps_per_real_position_unit)
    }

    /// Converts a position in real units to microsteps.
    ///
    /// Results beyond the 32-bit register wrap around.
    #[must_use]
    pub const fn position_real_to_chip(&self, position_real: i32) -> i32 {
        position_real.wrapping_mul(self.microsteps_per_real_position_unit)
    }
}
