//! Wave cycling - the tempo-driven three-state caption loop
//!
//! The cycler only holds state. Something external (a [`crate::timer::WaveTimer`],
//! or [`WaveCycler::advance`] with measured elapsed time) decides when a tick happens.

pub mod tempo;

pub use tempo::TempoBpm;

use std::time::Duration;

/// Captions shown for each wave state, indexed by [`WaveIndex`]
pub const CAPTIONS: [&str; 3] = [
    "Tranquil shimmer engaged.",
    "Resonant pulse in motion.",
    "Vibrant echo peaking.",
];

/// Number of states in the wave cycle
pub const CYCLE_LEN: u8 = CAPTIONS.len() as u8;

/// Current position in the wave cycle (0, 1 or 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WaveIndex(u8);

impl WaveIndex {
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// The following state; wraps from 2 back to 0
    pub fn next(self) -> Self {
        Self((self.0 + 1) % CYCLE_LEN)
    }

    pub fn caption(self) -> &'static str {
        CAPTIONS[self.get()]
    }
}

/// Repeating three-state cycle advanced once per tick
#[derive(Debug, Clone)]
pub struct WaveCycler {
    index: WaveIndex,
    tempo: TempoBpm,
    /// Elapsed time since the last tick, only used by `advance`
    phase: Duration,
}

impl WaveCycler {
    pub fn new(tempo: TempoBpm) -> Self {
        Self {
            index: WaveIndex::default(),
            tempo,
            phase: Duration::ZERO,
        }
    }

    pub fn index(&self) -> WaveIndex {
        self.index
    }

    pub fn tempo(&self) -> TempoBpm {
        self.tempo
    }

    pub fn period(&self) -> Duration {
        self.tempo.period()
    }

    pub fn caption(&self) -> &'static str {
        self.index.caption()
    }

    /// Advance one state
    pub fn tick(&mut self) -> WaveIndex {
        self.index = self.index.next();
        self.index
    }

    /// Change tempo. Returns true if the tempo changed, meaning any running timer
    /// has to be torn down and restarted. The accumulated phase is dropped.
    pub fn set_tempo(&mut self, tempo: TempoBpm) -> bool {
        if tempo == self.tempo {
            return false;
        }
        self.tempo = tempo;
        self.phase = Duration::ZERO;
        true
    }

    /// Feed elapsed wall time; ticks once per whole period. Returns the number of ticks.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let period = self.period();
        self.phase += elapsed;
        let mut ticks = 0;
        while self.phase >= period {
            self.phase -= period;
            self.tick();
            ticks += 1;
        }
        ticks
    }
}

impl Default for WaveCycler {
    fn default() -> Self {
        Self::new(TempoBpm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let cycler = WaveCycler::default();
        assert_eq!(cycler.index().get(), 0);
        assert_eq!(cycler.caption(), "Tranquil shimmer engaged.");
    }

    #[test]
    fn test_three_ticks_return_to_start() {
        let mut cycler = WaveCycler::new(TempoBpm::new(120));
        assert_eq!(cycler.period(), Duration::from_millis(480));
        assert_eq!(cycler.tick().get(), 1);
        assert_eq!(cycler.tick().get(), 2);
        assert_eq!(cycler.tick().get(), 0);
    }

    #[test]
    fn test_advance_ticks_per_whole_period() {
        let mut cycler = WaveCycler::new(TempoBpm::new(120));
        assert_eq!(cycler.advance(Duration::from_millis(479)), 0);
        assert_eq!(cycler.advance(Duration::from_millis(1)), 1);
        assert_eq!(cycler.advance(Duration::from_millis(960)), 2);
        assert_eq!(cycler.index().get(), 0);
    }

    #[test]
    fn test_set_tempo_restarts_phase() {
        let mut cycler = WaveCycler::new(TempoBpm::new(120));
        cycler.advance(Duration::from_millis(400));

        assert!(cycler.set_tempo(TempoBpm::new(150)));
        assert_eq!(cycler.period(), Duration::from_millis(300));
        // the 400ms from before the retune do not count toward the new period
        assert_eq!(cycler.advance(Duration::from_millis(299)), 0);
        assert_eq!(cycler.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_set_tempo_same_value_is_noop() {
        let mut cycler = WaveCycler::new(TempoBpm::new(170));
        cycler.advance(Duration::from_millis(100));
        assert!(!cycler.set_tempo(TempoBpm::new(170)));
        // phase survives a no-op
        assert_eq!(cycler.advance(Duration::from_millis(80)), 1);

        // 175 floors to the same 180ms period but still counts as a restart
        assert!(cycler.set_tempo(TempoBpm::new(175)));
        assert_eq!(cycler.period(), Duration::from_millis(180));
    }

    #[test]
    fn test_set_tempo_keeps_index() {
        let mut cycler = WaveCycler::default();
        cycler.tick();
        cycler.set_tempo(TempoBpm::new(60));
        assert_eq!(cycler.index().get(), 1);
    }
}
