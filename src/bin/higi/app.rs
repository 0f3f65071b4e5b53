//! Studio - application builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};

use higi_studio::{timer::WaveTimer, CadenceMode, EchoCount, Session, TempoBpm, ThemeKey};

use super::ui::StudioUi;

/// Main application builder
pub struct Studio {
    session: Session,
}

impl Studio {
    /// Create a studio with the default session
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Initial echo layers (clamped to 2-12)
    pub fn echoes(mut self, echoes: i64) -> Self {
        self.session = self.session.echoes(EchoCount::new(echoes));
        self
    }

    pub fn cadence(mut self, cadence: CadenceMode) -> Self {
        self.session = self.session.cadence(cadence);
        self
    }

    /// Initial tempo in beats per minute (clamped to 60-180, snapped to 5)
    pub fn tempo(mut self, bpm: i64) -> Self {
        self.session = self.session.tempo(TempoBpm::new(bpm));
        self
    }

    pub fn theme(mut self, theme: ThemeKey) -> Self {
        self.session = self.session.theme(theme);
        self
    }

    /// Chant for the configured settings
    pub fn chant(&self) -> String {
        self.session.chant()
    }

    /// Run the studio (takes over the terminal). Returns the final chant.
    pub fn run(self) -> EyreResult<String> {
        let timer = WaveTimer::spawn(self.session.wave().period())
            .wrap_err("failed to start wave timer")?;

        log::info!(
            "studio started: {} echoes, {} cadence, {} bpm, {} theme",
            self.session.echo_count().get(),
            self.session.cadence_mode(),
            self.session.tempo_bpm().bpm(),
            self.session.theme_key(),
        );

        let mut terminal = ratatui::init();
        let result = StudioUi::new(self.session, timer).run(&mut terminal);
        ratatui::restore();

        if let Ok(chant) = &result {
            log::info!("studio closed with chant {}", chant);
        }
        result
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}
