#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::time::Duration;

/// Tempo in beats per minute, always within `MIN..=MAX` and a multiple of `STEP`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TempoBpm(u16);

impl TempoBpm {
    pub const MIN: TempoBpm = TempoBpm(60);
    pub const MAX: TempoBpm = TempoBpm(180);
    pub const STEP: u16 = 5;

    /// Shortest allowed tick period
    pub const MIN_PERIOD_MS: u64 = 180;
    /// Period at a notional tempo of zero; each bpm shortens it by 6ms
    const BASE_PERIOD_MS: u64 = 1200;
    const MS_PER_BPM: u64 = 6;

    /// Create a tempo, clamping to the domain and snapping to the nearest step
    pub fn new(bpm: i64) -> Self {
        let step = Self::STEP as i64;
        let clamped = bpm.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64);
        // MIN and MAX are multiples of STEP, so snapping cannot leave the domain
        let snapped = (clamped + step / 2) / step * step;
        Self(snapped as u16)
    }

    pub fn bpm(self) -> u16 {
        self.0
    }

    /// Move by `steps` increments of `STEP`, staying inside the domain
    pub fn nudge(self, steps: i64) -> Self {
        Self::new(self.0 as i64 + steps * Self::STEP as i64)
    }

    /// Wave tick period: max(180, 1200 - bpm * 6) milliseconds
    pub fn period(self) -> Duration {
        let shortened = Self::BASE_PERIOD_MS.saturating_sub(self.0 as u64 * Self::MS_PER_BPM);
        Duration::from_millis(shortened.max(Self::MIN_PERIOD_MS))
    }

    /// Position within the domain as 0.0..=1.0 (for gauges)
    pub fn ratio(self) -> f64 {
        (self.0 - Self::MIN.0) as f64 / (Self::MAX.0 - Self::MIN.0) as f64
    }
}

impl Default for TempoBpm {
    fn default() -> Self {
        Self(120)
    }
}

impl From<i64> for TempoBpm {
    fn from(bpm: i64) -> Self {
        Self::new(bpm)
    }
}
