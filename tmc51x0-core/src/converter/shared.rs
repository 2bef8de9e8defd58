use std::sync::{Arc, PoisonError, RwLock};

use super::{Converter, ConverterSettings};

/// A [`Converter`] shared between components.
///
/// Readers take an immutable snapshot. [`SharedConverter::setup`] builds a
/// new converter and swaps it in, so a snapshot never observes a partially
/// applied configuration and is never changed after it is taken.
#[derive(Clone, Debug, Default)]
pub struct SharedConverter {
    current: Arc<RwLock<Arc<Converter>>>,
}

impl SharedConverter {
    /// Creates a new [`SharedConverter`] starting from `converter`.
    #[must_use]
    pub fn new(converter: Converter) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(converter))),
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Converter> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the settings of the current configuration.
    #[must_use]
    pub fn settings(&self) -> ConverterSettings {
        self.snapshot().settings()
    }

    /// Replaces the configuration. Snapshots taken before keep the old one.
    pub fn setup(&self, settings: ConverterSettings) {
        let converter = Arc::new(Converter::with_settings(settings));
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = converter;
    }
}

impl From<Converter> for SharedConverter {
    fn from(converter: Converter) -> Self {
        Self::new(converter)
    }
}
