//! Session state - everything one studio session displays
//!
//! State is mutated only through [`Session::apply`], which reports what the
//! front end has to do next: redraw, and/or restart the wave timer.

use crate::{
    chant::{self, CadenceMode, EchoCount},
    theme::{ThemeKey, ThemeStyle},
    timer::TickSource,
    wave::{TempoBpm, WaveCycler, WaveIndex},
};

/// Input to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Set echo count (clamped)
    SetEchoes(i64),
    /// Add to echo count (clamped)
    NudgeEchoes(i64),
    /// Set tempo in bpm (clamped and snapped to 5)
    SetTempo(i64),
    /// Move tempo by a number of 5 bpm steps
    NudgeTempo(i64),
    SelectCadence(CadenceMode),
    CycleCadence,
    SelectTheme(ThemeKey),
    CycleTheme,
    /// Wave timer fired
    Tick,
}

/// What changed as a result of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Update {
    /// Visible state changed
    pub redraw: bool,
    /// Tempo changed; the wave timer must be torn down and restarted
    pub retime: bool,
}

impl Update {
    const NONE: Update = Update {
        redraw: false,
        retime: false,
    };
    const REDRAW: Update = Update {
        redraw: true,
        retime: false,
    };

    fn redraw_if(changed: bool) -> Self {
        if changed {
            Self::REDRAW
        } else {
            Self::NONE
        }
    }

    /// Combine two updates
    pub fn merge(self, other: Update) -> Update {
        Update {
            redraw: self.redraw || other.redraw,
            retime: self.retime || other.retime,
        }
    }
}

/// Ephemeral state of one studio session
#[derive(Debug, Clone)]
pub struct Session {
    echoes: EchoCount,
    cadence: CadenceMode,
    theme: ThemeKey,
    wave: WaveCycler,
}

impl Session {
    /// Create a session with the default settings (4 echoes, excited, 120 bpm, aurora)
    pub fn new() -> Self {
        Self {
            echoes: EchoCount::default(),
            cadence: CadenceMode::default(),
            theme: ThemeKey::default(),
            wave: WaveCycler::new(TempoBpm::default()),
        }
    }

    /// Set the initial echo count
    pub fn echoes(mut self, echoes: EchoCount) -> Self {
        self.echoes = echoes;
        self
    }

    /// Set the initial cadence
    pub fn cadence(mut self, cadence: CadenceMode) -> Self {
        self.cadence = cadence;
        self
    }

    /// Set the initial tempo
    pub fn tempo(mut self, tempo: TempoBpm) -> Self {
        self.wave = WaveCycler::new(tempo);
        self
    }

    /// Set the initial theme
    pub fn theme(mut self, theme: ThemeKey) -> Self {
        self.theme = theme;
        self
    }

    pub fn echo_count(&self) -> EchoCount {
        self.echoes
    }

    pub fn cadence_mode(&self) -> CadenceMode {
        self.cadence
    }

    pub fn tempo_bpm(&self) -> TempoBpm {
        self.wave.tempo()
    }

    pub fn theme_key(&self) -> ThemeKey {
        self.theme
    }

    pub fn wave_index(&self) -> WaveIndex {
        self.wave.index()
    }

    pub fn wave(&self) -> &WaveCycler {
        &self.wave
    }

    /// Current chant text
    pub fn chant(&self) -> String {
        chant::compose(self.echoes, self.cadence)
    }

    /// Current wave caption
    pub fn caption(&self) -> &'static str {
        self.wave.caption()
    }

    pub fn style(&self) -> &'static ThemeStyle {
        self.theme.style()
    }

    /// Apply one event
    pub fn apply(&mut self, event: SessionEvent) -> Update {
        match event {
            SessionEvent::SetEchoes(n) => self.set_echoes(EchoCount::new(n)),
            SessionEvent::NudgeEchoes(delta) => self.set_echoes(self.echoes.nudge(delta)),
            SessionEvent::SetTempo(bpm) => self.set_tempo(TempoBpm::new(bpm)),
            SessionEvent::NudgeTempo(steps) => self.set_tempo(self.wave.tempo().nudge(steps)),
            SessionEvent::SelectCadence(cadence) => self.set_cadence(cadence),
            SessionEvent::CycleCadence => self.set_cadence(self.cadence.next()),
            SessionEvent::SelectTheme(theme) => self.set_theme(theme),
            SessionEvent::CycleTheme => self.set_theme(self.theme.next()),
            SessionEvent::Tick => {
                self.wave.tick();
                Update::REDRAW
            }
        }
    }

    /// Apply every tick the source has pending
    pub fn pump(&mut self, source: &mut impl TickSource) -> Update {
        let ticks = source.pending_ticks();
        (0..ticks).fold(Update::NONE, |acc, _| acc.merge(self.apply(SessionEvent::Tick)))
    }

    fn set_echoes(&mut self, echoes: EchoCount) -> Update {
        let changed = echoes != self.echoes;
        self.echoes = echoes;
        Update::redraw_if(changed)
    }

    fn set_cadence(&mut self, cadence: CadenceMode) -> Update {
        let changed = cadence != self.cadence;
        self.cadence = cadence;
        Update::redraw_if(changed)
    }

    fn set_theme(&mut self, theme: ThemeKey) -> Update {
        let changed = theme != self.theme;
        self.theme = theme;
        Update::redraw_if(changed)
    }

    fn set_tempo(&mut self, tempo: TempoBpm) -> Update {
        let changed = self.wave.set_tempo(tempo);
        if changed {
            log::debug!("tempo {} bpm, wave period {}ms", tempo.bpm(), tempo.period().as_millis());
        }
        Update {
            redraw: changed,
            retime: changed,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ManualTicks(usize);

    impl TickSource for ManualTicks {
        fn pending_ticks(&mut self) -> usize {
            std::mem::take(&mut self.0)
        }
    }

    #[test]
    fn test_defaults_match_studio_start() {
        let session = Session::new();
        assert_eq!(session.echo_count().get(), 4);
        assert_eq!(session.cadence_mode(), CadenceMode::Excited);
        assert_eq!(session.tempo_bpm().bpm(), 120);
        assert_eq!(session.theme_key(), ThemeKey::Aurora);
        assert_eq!(session.chant(), "Hihigihi!");
        assert_eq!(session.caption(), "Tranquil shimmer engaged.");
    }

    #[test]
    fn test_echo_events_clamp() {
        let mut session = Session::new();
        assert_eq!(session.apply(SessionEvent::SetEchoes(40)), Update::REDRAW);
        assert_eq!(session.echo_count(), EchoCount::MAX);
        // already at max: nothing to redraw
        assert_eq!(session.apply(SessionEvent::NudgeEchoes(1)), Update::NONE);
        session.apply(SessionEvent::NudgeEchoes(-20));
        assert_eq!(session.chant(), "Hihi!");
    }

    #[test]
    fn test_tempo_change_requests_retime() {
        let mut session = Session::new();
        let update = session.apply(SessionEvent::NudgeTempo(2));
        assert!(update.retime && update.redraw);
        assert_eq!(session.tempo_bpm().bpm(), 130);

        let update = session.apply(SessionEvent::SetTempo(130));
        assert!(!update.retime);
    }

    #[test]
    fn test_tempo_does_not_touch_chant() {
        let mut session = Session::new();
        let before = session.chant();
        session.apply(SessionEvent::SetTempo(60));
        session.apply(SessionEvent::SetTempo(180));
        assert_eq!(session.chant(), before);
    }

    #[test]
    fn test_cadence_and_theme_selection() {
        let mut session = Session::new();
        session.apply(SessionEvent::SelectCadence(CadenceMode::Chaotic));
        assert_eq!(session.chant(), "HIHIGIHI!!!");
        session.apply(SessionEvent::CycleCadence);
        assert_eq!(session.chant(), "Hihigihi~");

        let update = session.apply(SessionEvent::SelectTheme(ThemeKey::Aurora));
        assert!(!update.redraw);
        session.apply(SessionEvent::CycleTheme);
        assert_eq!(session.style().label, "Sunrise");
    }

    #[test]
    fn test_pump_applies_all_pending_ticks() {
        let mut session = Session::new();
        let mut ticks = ManualTicks(4);
        assert!(session.pump(&mut ticks).redraw);
        assert_eq!(session.wave_index().get(), 1);
        assert_eq!(session.caption(), "Resonant pulse in motion.");
        assert_eq!(session.pump(&mut ticks), Update::NONE);
    }

    #[test]
    fn test_builder_sets_initial_state() {
        let session = Session::new()
            .echoes(EchoCount::new(6))
            .cadence(CadenceMode::Calm)
            .tempo(TempoBpm::new(90))
            .theme(ThemeKey::Midnight);
        assert_eq!(session.chant(), "Hihigihigihi~");
        assert_eq!(session.wave().period().as_millis(), 660);
        assert_eq!(session.style().label, "Midnight");
    }
}
