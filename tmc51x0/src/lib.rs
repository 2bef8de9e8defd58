#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Driver for the TMC51x0 stepper motor controller.
//!
//! [`Tmc51x0`] opens a [`Link`] to the chip and shares its [`Registers`]
//! and unit converter with the components that drive the motor.
//!
//! ```
//! # #[cfg(feature = "link-nop")]
//! # fn main() -> Result<(), tmc51x0::Tmc51x0Error> {
//! use tmc51x0::{link::Nop, ConverterSettings, Tmc51x0};
//!
//! let mut tmc = Tmc51x0::setup(
//!     Nop::new(),
//!     ConverterSettings::new().with_microsteps_per_real_position_unit(51200),
//! )?;
//! let converter = tmc.converter().snapshot();
//! tmc.registers_mut().write(0x2D, converter.position_real_to_chip(2) as u32)?;
//! assert_eq!(102400, tmc.registers().stored(0x2D)?);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "link-nop"))]
//! # fn main() {}
//! ```
//!
//! [`Link`]: crate::link::Link

mod controller;
mod error;
/// Transport to the chip.
pub mod link;
mod registers;

pub use controller::Tmc51x0;
pub use error::Tmc51x0Error;
pub use registers::{Registers, ADDRESS_MAX, REGISTER_COUNT};
pub use tmc51x0_core::{
    common::{self, kHz, Freq, Hz, MHz},
    converter::{self, Converter},
    ConverterSettings, SharedConverter,
};

/// Common imports.
pub mod prelude {
    pub use crate::{
        link::{Link, LinkError, SpiParameters},
        Converter, ConverterSettings, SharedConverter, Tmc51x0, Tmc51x0Error,
    };
    #[cfg(feature = "link-nop")]
    pub use crate::link::Nop;
}
