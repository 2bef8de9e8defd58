use getset::{Getters, MutGetters};
use tmc51x0_core::{ConverterSettings, SharedConverter};

use crate::{
    error::Tmc51x0Error,
    link::{Link, SpiParameters},
    registers::Registers,
};

/// A TMC51x0 chip.
///
/// Owns the register access and the unit converter that the driver,
/// controller and encoder components of the chip share. Components receive
/// the same [`Registers`] through [`Tmc51x0::registers_mut`] and a
/// [`SharedConverter`] handle through [`Tmc51x0::converter`].
#[derive(Getters, MutGetters)]
pub struct Tmc51x0<L: Link> {
    #[getset(get = "pub", get_mut = "pub")]
    registers: Registers<L>,
    converter: SharedConverter,
}

impl<L: Link> Tmc51x0<L> {
    /// Opens `link` with the default [`SpiParameters`] and configures the converter.
    pub fn setup(link: L, settings: ConverterSettings) -> Result<Self, Tmc51x0Error> {
        Self::setup_with(link, &SpiParameters::default(), settings)
    }

    /// Opens `link` with `params` and configures the converter.
    #[tracing::instrument(skip(link))]
    pub fn setup_with(
        link: L,
        params: &SpiParameters,
        settings: ConverterSettings,
    ) -> Result<Self, Tmc51x0Error> {
        let mut registers = Registers::new(link);
        registers.initialize(params)?;

        let converter = SharedConverter::default();
        converter.setup(settings);

        Ok(Self {
            registers,
            converter,
        })
    }

    /// A handle to the converter shared by the components of this chip.
    #[must_use]
    pub fn converter(&self) -> SharedConverter {
        self.converter.clone()
    }

    /// Replaces the converter configuration for every component of this chip.
    ///
    /// Values converted before keep their old scale and must be converted again.
    pub fn reconfigure(&self, settings: ConverterSettings) {
        tracing::debug!("Reconfiguring converter: {:?}", settings);
        self.converter.setup(settings);
    }

    /// Closes the link. Closing twice does nothing.
    pub fn close(&mut self) -> Result<(), Tmc51x0Error> {
        self.registers.close()
    }
}

impl<L: Link> Drop for Tmc51x0<L> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!("{}", e);
        }
    }
}
