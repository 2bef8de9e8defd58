use thiserror::Error;

use crate::link::LinkError;

#[derive(Error, Debug, PartialEq, Clone)]
/// An error produced by the driver.
pub enum Tmc51x0Error {
    /// The register address does not exist.
    #[error("Register address ({0:#04X}) is out of range")]
    AddressOutOfRange(u8),
    /// The link is not open.
    #[error("Link is closed")]
    LinkClosed,
    /// An error from the link.
    #[error("{0}")]
    Link(#[from] LinkError),
}
