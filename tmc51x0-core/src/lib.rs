#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Unit conversion core for the TMC51x0 stepper motor controller.
//!
//! The chip stores position in microsteps, velocity and acceleration in
//! clock-scaled fixed point, and currents and delays as small register
//! codes. [`Converter`] maps these to application units.
//!
//! Without the `std` feature the crate is `no_std` but still links `alloc`
//! through `tracing`, so the final binary needs a global allocator.
//!
//! ```
//! use core::num::NonZeroU8;
//! use tmc51x0_core::{Converter, ConverterSettings};
//!
//! let converter = Converter::with_settings(
//!     ConverterSettings::new()
//!         .with_clock_frequency_mhz(NonZeroU8::new(12).unwrap())
//!         .with_microsteps_per_real_position_unit(51200),
//! );
//! assert_eq!(2 * 51200, converter.position_real_to_chip(2));
//! assert_eq!(0, converter.percent_to_global_current_scaler(100));
//! ```
//!
//! [`Converter`]: crate::converter::Converter

/// Frequency units.
pub mod common;
/// The unit converter and its settings.
pub mod converter;
#[doc(hidden)]
pub mod utils;

pub use converter::{Converter, ConverterSettings};
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use converter::SharedConverter;
