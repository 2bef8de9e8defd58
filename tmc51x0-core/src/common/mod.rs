mod freq;

pub use freq::{kHz, Freq, Hz, MHz};
