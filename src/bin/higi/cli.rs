//! Command-line argument parsing.

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use env_logger::{Builder, Env, Target};
use higi_studio::{CadenceMode, ThemeKey};
use std::{fs::File, path::PathBuf};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "higi")]
#[command(about = "Sculpt the ultimate Higihihih chant", long_about = None)]
pub struct Args {
    /// Echo layers, 2-12 (out-of-range values are clamped)
    #[arg(long, value_name = "COUNT", default_value_t = 4, allow_negative_numbers = true)]
    pub echoes: i64,

    /// Cadence: calm, excited, chaotic
    #[arg(long, value_name = "CADENCE", default_value = "excited")]
    pub cadence: CadenceMode,

    /// Tempo in bpm, 60-180 in steps of 5 (clamped and snapped)
    #[arg(long, value_name = "BPM", default_value_t = 120, allow_negative_numbers = true)]
    pub tempo: i64,

    /// Vibe palette: aurora, sunrise, midnight
    #[arg(long, value_name = "THEME", default_value = "aurora")]
    pub theme: ThemeKey,

    /// Print the chant and exit without starting the studio
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file (filter with RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Install the logger.
    ///
    /// The studio owns the terminal, so interactive runs only log when a file is given.
    /// Print mode logs warnings to stderr.
    pub fn init_logging(&self) -> EyreResult<()> {
        let mut builder = if let Some(path) = &self.log_file {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        } else if self.print {
            Builder::from_env(Env::default().default_filter_or("warn"))
        } else {
            return Ok(());
        };

        builder.try_init().wrap_err("failed to install logger")
    }
}
