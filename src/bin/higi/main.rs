//! higi - Higihihih Studio in the terminal
//!
//! Run with: cargo run --bin higi -- --echoes 6 --cadence chaotic

mod app;
mod cli;
mod ui;

use app::Studio;
use clap::Parser;
use cli::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    args.init_logging()?;

    let studio = Studio::new()
        .echoes(args.echoes)
        .cadence(args.cadence)
        .tempo(args.tempo)
        .theme(args.theme);

    if args.print {
        println!("{}", studio.chant());
        return Ok(());
    }

    // Export whatever the chant ended up as
    let chant = studio.run()?;
    println!("{}", chant);
    Ok(())
}
