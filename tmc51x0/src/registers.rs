use crate::{
    error::Tmc51x0Error,
    link::{Link, SpiParameters},
};

/// The highest register address.
pub const ADDRESS_MAX: u8 = 0x7F;
/// The number of register addresses.
pub const REGISTER_COUNT: usize = ADDRESS_MAX as usize + 1;

/// Register access over a [`Link`].
///
/// Many chip registers are write-only, so the last value written to each
/// address is kept and available through [`Registers::stored`].
pub struct Registers<L: Link> {
    link: L,
    stored: [u32; REGISTER_COUNT],
}

impl<L: Link> Registers<L> {
    /// Creates a new [`Registers`] over `link`.
    #[must_use]
    pub const fn new(link: L) -> Self {
        Self {
            link,
            stored: [0; REGISTER_COUNT],
        }
    }

    /// Opens the link and clears the stored values.
    pub fn initialize(&mut self, params: &SpiParameters) -> Result<(), Tmc51x0Error> {
        tracing::info!("Opening link with {:?}.", params);
        self.link.open(params)?;
        self.stored = [0; REGISTER_COUNT];
        Ok(())
    }

    /// Closes the link. Closing a closed link does nothing.
    pub fn close(&mut self) -> Result<(), Tmc51x0Error> {
        if !self.link.is_open() {
            return Ok(());
        }
        tracing::info!("Closing link.");
        self.link.close()?;
        Ok(())
    }

    /// Reads the register at `address` from the chip.
    pub fn read(&mut self, address: u8) -> Result<u32, Tmc51x0Error> {
        self.check(address)?;
        let value = self.link.read(address)?;
        tracing::trace!("read {:#04X} = {:#010X}", address, value);
        Ok(value)
    }

    /// Writes `value` to the register at `address` and stores it.
    pub fn write(&mut self, address: u8, value: u32) -> Result<(), Tmc51x0Error> {
        self.check(address)?;
        tracing::trace!("write {:#04X} = {:#010X}", address, value);
        self.link.write(address, value)?;
        self.stored[address as usize] = value;
        Ok(())
    }

    /// The last value written to the register at `address`.
    pub fn stored(&self, address: u8) -> Result<u32, Tmc51x0Error> {
        if address > ADDRESS_MAX {
            return Err(Tmc51x0Error::AddressOutOfRange(address));
        }
        Ok(self.stored[address as usize])
    }

    /// The underlying link.
    #[must_use]
    pub const fn link(&self) -> &L {
        &self.link
    }

    fn check(&self, address: u8) -> Result<(), Tmc51x0Error> {
        if address > ADDRESS_MAX {
            return Err(Tmc51x0Error::AddressOutOfRange(address));
        }
        if !self.link.is_open() {
            return Err(Tmc51x0Error::LinkClosed);
        }
        Ok(())
    }
}
