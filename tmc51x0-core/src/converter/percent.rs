use crate::utils::int::{constrain, map};

use super::{
    Converter, CURRENT_SETTING_MAX, CURRENT_SETTING_MIN, GLOBAL_SCALER_MAX, GLOBAL_SCALER_MIN,
    GLOBAL_SCALER_THRESHOLD, HOLD_DELAY_MAX, HOLD_DELAY_MIN, MILLISECONDS_PER_SECOND, PERCENT_MAX,
    PERCENT_MIN, PWM_SETTING_MAX, PWM_SETTING_MIN, TZEROWAIT_SCALER,
};

fn percent_to_setting(percent: u8, setting_min: i32, setting_max: i32) -> i32 {
    map(
        i32::from(constrain(percent, PERCENT_MIN, PERCENT_MAX)),
        i32::from(PERCENT_MIN),
        i32::from(PERCENT_MAX),
        setting_min,
        setting_max,
    )
}

fn setting_to_percent(setting: u8, setting_min: i32, setting_max: i32) -> i32 {
    map(
        i32::from(setting),
        setting_min,
        setting_max,
        i32::from(PERCENT_MIN),
        i32::from(PERCENT_MAX),
    )
}

impl Converter {
    /// Converts a percentage of full scale to a global current scaler code.
    ///
    /// Codes below [`GLOBAL_SCALER_THRESHOLD`] are raised to it. Full scale
    /// maps to `0`, which the chip reads as full scale.
    #[must_use]
    pub fn percent_to_global_current_scaler(&self, percent: u8) -> u8 {
        let scaler = percent_to_setting(
            percent,
            i32::from(GLOBAL_SCALER_MIN),
            i32::from(GLOBAL_SCALER_MAX),
        );
        if scaler < i32::from(GLOBAL_SCALER_THRESHOLD) {
            GLOBAL_SCALER_THRESHOLD as u8
        } else if scaler >= i32::from(GLOBAL_SCALER_MAX) {
            0
        } else {
            scaler as u8
        }
    }

    /// Converts a percentage to a run or hold current setting.
    #[must_use]
    pub fn percent_to_current_setting(&self, percent: u8) -> u8 {
        percent_to_setting(
            percent,
            i32::from(CURRENT_SETTING_MIN),
            i32::from(CURRENT_SETTING_MAX),
        ) as u8
    }

    /// Converts a run or hold current setting to a percentage.
    #[must_use]
    pub fn current_setting_to_percent(&self, current_setting: u8) -> u8 {
        setting_to_percent(
            current_setting,
            i32::from(CURRENT_SETTING_MIN),
            i32::from(CURRENT_SETTING_MAX),
        ) as u8
    }

    /// Converts a percentage to a hold delay setting.
    #[must_use]
    pub fn percent_to_hold_delay_setting(&self, percent: u8) -> u8 {
        percent_to_setting(percent, i32::from(HOLD_DELAY_MIN), i32::from(HOLD_DELAY_MAX)) as u8
    }

    /// Converts a hold delay setting to a percentage.
    #[must_use]
    pub fn hold_delay_setting_to_percent(&self, hold_delay_setting: u8) -> u8 {
        setting_to_percent(
            hold_delay_setting,
            i32::from(HOLD_DELAY_MIN),
            i32::from(HOLD_DELAY_MAX),
        ) as u8
    }

    /// Converts a percentage to a PWM setting.
    #[must_use]
    pub fn percent_to_pwm_setting(&self, percent: u8) -> u8 {
        percent_to_setting(percent, i32::from(PWM_SETTING_MIN), i32::from(PWM_SETTING_MAX)) as u8
    }

    /// Converts a duration in milliseconds to TZEROWAIT timer ticks.
    #[must_use]
    pub const fn milliseconds_to_tzerowait(&self, milliseconds: u16) -> u16 {
        (milliseconds as u32 * MILLISECONDS_PER_SECOND
            / (TZEROWAIT_SCALER * self.clock_duration_ns as u32)) as u16
    }
}
