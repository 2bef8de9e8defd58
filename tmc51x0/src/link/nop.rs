use crate::registers::REGISTER_COUNT;

use super::{Link, LinkError, SpiParameters};

/// A [`Link`] backed by an in-memory register file.
///
/// Every register reads back the last value written to it.
pub struct Nop {
    is_open: bool,
    params: Option<SpiParameters>,
    memory: [u32; REGISTER_COUNT],
}

impl Nop {
    /// Creates a new [`Nop`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_open: false,
            params: None,
            memory: [0; REGISTER_COUNT],
        }
    }

    /// The parameters of the last [`Link::open`].
    #[must_use]
    pub const fn params(&self) -> Option<&SpiParameters> {
        self.params.as_ref()
    }

    fn check_open(&self) -> Result<(), LinkError> {
        if self.is_open {
            Ok(())
        } else {
            Err(LinkError::new("Link is closed"))
        }
    }
}

impl Default for Nop {
    fn default() -> Self {
        Self::new()
    }
}

impl Link for Nop {
    fn open(&mut self, params: &SpiParameters) -> Result<(), LinkError> {
        self.is_open = true;
        self.params = Some(*params);
        Ok(())
    }

    fn close(&mut self) -> Result<(), LinkError> {
        self.is_open = false;
        Ok(())
    }

    fn read(&mut self, address: u8) -> Result<u32, LinkError> {
        self.check_open()?;
        self.memory
            .get(address as usize)
            .copied()
            .ok_or_else(|| LinkError::new(format!("No register at {:#04X}", address)))
    }

    fn write(&mut self, address: u8, value: u32) -> Result<(), LinkError> {
        self.check_open()?;
        let register = self
            .memory
            .get_mut(address as usize)
            .ok_or_else(|| LinkError::new(format!("No register at {:#04X}", address)))?;
        tracing::trace!("Nop write {:#04X} = {:#010X}", address, value);
        *register = value;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
