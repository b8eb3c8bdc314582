//! Dashboard rendering.
//!
//! Rendering is a pure function of a `DashboardView`, so it can be drawn to
//! any ratatui backend.

use chrono::{DateTime, Local};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use rigsim_core::SensorReading;

/// Everything one frame shows, captured at a single instant.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub reading: SensorReading,
    pub ticks: u64,
    pub updater_live: bool,
    pub captured_at: DateTime<Local>,
}

/// Draw the dashboard, centered in the frame.
pub fn render(frame: &mut Frame, view: &DashboardView, title: &str) {
    let lines = dashboard_lines(view, title);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

fn dashboard_lines(view: &DashboardView, title: &str) -> Vec<Line<'static>> {
    let reading = &view.reading;
    let status = if view.updater_live {
        Span::styled("live", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            "stalled",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };

    vec![
        Line::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            format!("Temperature: {:.2} °C", reading.temperature),
            Style::default().fg(Color::Green),
        ),
        Line::styled(
            format!("Depth: {:.2} m", reading.depth),
            Style::default().fg(Color::Cyan),
        ),
        Line::styled(
            format!("Pressure: {:.2} bar", reading.pressure),
            Style::default().fg(Color::Magenta),
        ),
        Line::default(),
        Line::styled(
            "(Press 'q' to quit)",
            Style::default().fg(Color::Yellow),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("ticks {} | updater ", view.ticks),
                Style::default().fg(Color::DarkGray),
            ),
            status,
            Span::styled(
                format!(" | {}", view.captured_at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]
}
