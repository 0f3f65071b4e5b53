//! TUI module for higi
//!
//! Renders the chant preview and control desk, routes key presses into session
//! events and keeps the wave timer in step with the tempo.

mod controls;
mod keys;
mod palette;
mod preview;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{self, Event, KeyEventKind};
use higi_studio::{timer::WaveTimer, Session};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    DefaultTerminal, Frame,
};
use std::time::Duration;

use controls::render_controls;
use keys::{key_action, KeyAction};
use preview::{render_cards, render_header, render_preview};

/// Input poll interval (~60fps)
const FRAME_POLL: Duration = Duration::from_millis(16);

const HELP: &str =
    " [←/→] Echoes  [↑/↓] Tempo  [1-3/C] Cadence  [A/S/M/T] Palette  [Q] Quit";

/// UI application state
pub struct StudioUi {
    session: Session,
    /// Wave timer; restarted on every tempo change, stopped when the UI is dropped
    timer: WaveTimer,
    /// Whether the screen is out of date
    dirty: bool,
    should_quit: bool,
}

impl StudioUi {
    pub fn new(session: Session, timer: WaveTimer) -> Self {
        Self {
            session,
            timer,
            dirty: true,
            should_quit: false,
        }
    }

    /// Run the UI event loop until quit; returns the final chant
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> EyreResult<String> {
        while !self.should_quit {
            // Apply any wave ticks that fired since the last frame
            if self.session.pump(&mut self.timer).redraw {
                self.dirty = true;
            }

            if self.dirty {
                terminal.draw(|frame| render(frame, &self.session))?;
                self.dirty = false;
            }

            if event::poll(FRAME_POLL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_action(key_action(key.code))?;
                    }
                    Event::Resize(..) => self.dirty = true,
                    _ => {}
                }
            }
        }

        Ok(self.session.chant())
    }

    fn handle_action(&mut self, action: KeyAction) -> EyreResult<()> {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Session(event) => {
                let update = self.session.apply(event);
                if update.retime {
                    self.timer
                        .retune(self.session.wave().period())
                        .wrap_err("failed to restart wave timer")?;
                }
                self.dirty |= update.redraw;
            }
            KeyAction::None => {}
        }
        Ok(())
    }
}

/// Render the whole studio
fn render(frame: &mut Frame, session: &Session) {
    let area = frame.area();
    let style = session.style();

    // Backdrop fill
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::rgb(style.backdrop.from))),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(18),   // Preview + control desk
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_header(frame, rows[0], session);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[1]);

    let preview_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Chant
            Constraint::Length(6), // Echo power / tempo cards
        ])
        .split(columns[0]);

    render_preview(frame, preview_rows[0], session);
    render_cards(frame, preview_rows[1], session);
    render_controls(frame, columns[1], session);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[2]);
}
