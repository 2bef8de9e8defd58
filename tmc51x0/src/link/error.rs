use derive_more::Display;
use derive_new::new;
use thiserror::Error;

/// A failure reported by a [`Link`] implementation.
///
/// [`Link`]: crate::link::Link
#[derive(new, Error, Debug, Display, PartialEq, Eq, Clone)]
#[display("SPI link: {}", msg)]
pub struct LinkError {
    #[new(into)]
    msg: String,
}

impl LinkError {
    /// The message given by the link, without the prefix.
    #[must_use]
    pub fn msg(&self) -> &str {
        &self.msg
    }
}
