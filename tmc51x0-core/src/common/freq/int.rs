use super::{kHz, Freq, Hz, MHz};

impl core::ops::Mul<Hz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: Hz) -> Self::Output {
        Self::Output { freq: self }
    }
}

impl core::ops::Mul<kHz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: kHz) -> Self::Output {
        Self::Output { freq: self * 1_000 }
    }
}

impl core::ops::Mul<MHz> for u32 {
    type Output = Freq<u32>;

    fn mul(self, _rhs: MHz) -> Self::Output {
        Self::Output {
            freq: self * 1_000_000,
        }
    }
}
