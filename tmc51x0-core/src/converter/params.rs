/// The default oscillator frequency in MHz.
pub const CLOCK_FREQUENCY_MHZ_DEFAULT: u8 = 16;
/// The default number of microsteps in one real position unit.
pub const MICROSTEPS_PER_REAL_POSITION_UNIT_DEFAULT: i32 = 1;
/// The default time base of real velocity and acceleration units.
pub const SECONDS_PER_REAL_VELOCITY_UNIT_DEFAULT: i32 = 1;

/// Nanoseconds per clock cycle is this value divided by the clock frequency in MHz.
pub const CLOCK_FREQUENCY_TO_DURATION_SCALER: u16 = 1000;
/// Velocity register scale, 2^23.
pub const VELOCITY_SCALER: i64 = 8_388_608;
/// Acceleration register scale, 2^37.
pub const ACCELERATION_SCALER: i64 = 137_438_953_472;
/// Clock cycles per tick of the TZEROWAIT timer.
pub const TZEROWAIT_SCALER: u32 = 512;
#[doc(hidden)]
pub const MILLISECONDS_PER_SECOND: u32 = 1000;

/// Substituted for a zero divisor in the tstep conversions.
///
/// The chip reads a zero tstep when the motor runs at its speed limit.
pub const DIVISOR_DEFAULT: i32 = 1;

/// The lower bound of percentage inputs.
pub const PERCENT_MIN: u8 = 0;
/// The upper bound of percentage inputs.
pub const PERCENT_MAX: u8 = 100;

#[doc(hidden)]
pub const GLOBAL_SCALER_MIN: u16 = 0;
/// Full scale of the global current scaler.
///
/// The register encodes full scale as `0`.
pub const GLOBAL_SCALER_MAX: u16 = 256;
/// The smallest nonzero global current scaler the chip accepts.
pub const GLOBAL_SCALER_THRESHOLD: u16 = 32;

#[doc(hidden)]
pub const CURRENT_SETTING_MIN: u8 = 0;
/// The maximum run/hold current setting.
pub const CURRENT_SETTING_MAX: u8 = 31;

#[doc(hidden)]
pub const HOLD_DELAY_MIN: u8 = 0;
/// The maximum hold delay setting.
pub const HOLD_DELAY_MAX: u8 = 15;

#[doc(hidden)]
pub const PWM_SETTING_MIN: u8 = 0;
/// The maximum PWM setting.
pub const PWM_SETTING_MAX: u8 = 255;
