//! Header, chant preview and the echo/tempo cards

use higi_studio::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::palette;

/// Studio name and tagline
pub fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let accent = session.style().accent;

    let lines = vec![
        Line::from(Span::styled(
            " ✦ HIGIHIHIH STUDIO",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(" Sculpt the ultimate "),
            Span::styled(
                "\u{201c}Higihihih\u{201d}",
                Style::default()
                    .fg(palette::rgb(accent.via))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" with rhythm, glow, and endless playful echoes."),
        ]),
        Line::from(Span::styled(
            " Fine-tune the cadence, craft the vibe, and let the syllables shimmer.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines).style(Style::default().fg(Color::White));
    frame.render_widget(header, area);
}

/// Chant text, one gradient color per character
pub fn render_preview(frame: &mut Frame, area: Rect, session: &Session) {
    let style = session.style();

    let block = Block::default()
        .title(" Chant Preview ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::glow(style)))
        .style(Style::default().bg(palette::card(style)));

    let chant = session.chant();
    let colors = palette::accent_cells(style, chant.chars().count());
    let spans: Vec<Span> = chant
        .chars()
        .zip(colors)
        .map(|(ch, color)| {
            Span::styled(
                ch.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    // Vertically center the chant inside the card
    let inner_height = area.height.saturating_sub(2);
    let pad = (inner_height / 2).saturating_sub(1) as usize;
    let mut lines = vec![Line::default(); pad];
    lines.push(Line::from(spans));

    let preview = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(preview, area);
}

/// "Echo power" and "Tempo" cards
pub fn render_cards(frame: &mut Frame, area: Rect, session: &Session) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_card(
        frame,
        columns[0],
        session,
        " ≈ Echo power ",
        session.echo_count().get().to_string(),
        "Each notch adds another syllable swirl.",
    );
    render_card(
        frame,
        columns[1],
        session,
        " ◷ Tempo ",
        format!("{} bpm", session.tempo_bpm().bpm()),
        "Faster tempos tighten the cadence.",
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    title: &str,
    value: String,
    blurb: &str,
) {
    let style = session.style();
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(palette::card(style)));

    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(blurb, Style::default().fg(Color::Gray))),
    ];

    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
