mod error;
#[cfg_attr(docsrs, doc(cfg(feature = "link-nop")))]
#[cfg(feature = "link-nop")]
mod nop;
mod spi;

pub use error::LinkError;
#[cfg(feature = "link-nop")]
pub use nop::Nop;
pub use spi::{BitOrder, SpiMode, SpiParameters};

/// A trait that provides register access to the chip.
///
/// Implementations own the bus transfer and the chip select line.
pub trait Link: Send {
    /// Opens the link.
    fn open(&mut self, params: &SpiParameters) -> Result<(), LinkError>;

    /// Closes the link.
    fn close(&mut self) -> Result<(), LinkError>;

    /// Reads the register at `address`.
    fn read(&mut self, address: u8) -> Result<u32, LinkError>;

    /// Writes `value` to the register at `address`.
    fn write(&mut self, address: u8, value: u32) -> Result<(), LinkError>;

    /// Checks if the link is open.
    #[must_use]
    fn is_open(&self) -> bool;
}

impl Link for Box<dyn Link> {
    fn open(&mut self, params: &SpiParameters) -> Result<(), LinkError> {
        self.as_mut().open(params)
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.as_mut().close()
    }

    fn read(&mut self, address: u8) -> Result<u32, LinkError> {
        self.as_mut().read(address)
    }

    fn write(&mut self, address: u8, value: u32) -> Result<(), LinkError> {
        self.as_mut().write(address, value)
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }
}
