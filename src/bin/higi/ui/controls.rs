//! Control desk widget - echo and tempo gauges, cadence list, palette, wave state

use higi_studio::{CadenceMode, Session, ThemeKey};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::palette;

/// Render the control desk
pub fn render_controls(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" Control desk ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Echo layers
            Constraint::Length(7), // Cadence list
            Constraint::Length(3), // Tempo
            Constraint::Length(2), // Palette
            Constraint::Min(3),    // Wave state
        ])
        .split(inner);

    let accent = palette::rgb(session.style().accent.via);

    let echoes = session.echo_count();
    render_gauge(
        frame,
        rows[0],
        " Echo layers ",
        echoes.ratio(),
        echoes.get().to_string(),
        accent,
    );

    render_cadences(frame, rows[1], session);

    let tempo = session.tempo_bpm();
    render_gauge(
        frame,
        rows[2],
        " Tempo ",
        tempo.ratio(),
        tempo.bpm().to_string(),
        accent,
    );

    render_palette(frame, rows[3], session);
    render_wave_state(frame, rows[4], session);
}

fn render_gauge(frame: &mut Frame, area: Rect, title: &str, ratio: f64, label: String, color: Color) {
    let gauge = Gauge::default()
        .block(Block::default().title(title).borders(Borders::BOTTOM))
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

/// Cadence options; the selected one is marked and outlined in the ring color
fn render_cadences(frame: &mut Frame, area: Rect, session: &Session) {
    let ring = palette::rgb(session.style().ring);
    let mut lines = vec![Line::from(Span::styled(
        " Cadence",
        Style::default().fg(Color::Gray),
    ))];

    for mode in CadenceMode::ALL {
        let selected = mode == session.cadence_mode();
        let (marker, label_style) = if selected {
            ("●", Style::default().fg(ring).add_modifier(Modifier::BOLD))
        } else {
            ("○", Style::default().fg(Color::White))
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, mode.index() + 1), label_style),
            Span::styled(mode.label(), label_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", mode.description()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_palette(frame: &mut Frame, area: Rect, session: &Session) {
    let mut spans = vec![Span::styled(" Vibe palette  ", Style::default().fg(Color::Gray))];
    for key in ThemeKey::ALL {
        let style = if key == session.theme_key() {
            Style::default()
                .fg(Color::Black)
                .bg(palette::rgb(key.style().ring))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", key.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_wave_state(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" ⚡ WAVE STATE ")
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(Color::DarkGray));

    let caption = Paragraph::new(Line::from(Span::styled(
        session.caption(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .wrap(Wrap { trim: true });
    frame.render_widget(caption, area);
}
