#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of syllable segments in a chant, always within `MIN..=MAX`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EchoCount(u8);

impl EchoCount {
    pub const MIN: EchoCount = EchoCount(2);
    pub const MAX: EchoCount = EchoCount(12);

    /// Create an echo count, clamping to the nearest boundary
    pub fn new(count: i64) -> Self {
        let clamped = count.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64);
        Self(clamped as u8)
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Shift by `delta` segments, staying inside the domain
    pub fn nudge(self, delta: i64) -> Self {
        Self::new(self.0 as i64 + delta)
    }

    /// Position within the domain as 0.0..=1.0 (for gauges)
    pub fn ratio(self) -> f64 {
        (self.0 - Self::MIN.0) as f64 / (Self::MAX.0 - Self::MIN.0) as f64
    }

    /// Every valid echo count, ascending
    pub fn all() -> impl Iterator<Item = EchoCount> {
        (Self::MIN.0..=Self::MAX.0).map(EchoCount)
    }
}

impl Default for EchoCount {
    fn default() -> Self {
        Self(4)
    }
}

impl From<i64> for EchoCount {
    fn from(count: i64) -> Self {
        Self::new(count)
    }
}
