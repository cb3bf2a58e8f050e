//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::timer::Mode;
use crate::tui::app::App;
use crate::tui::settings::SettingsForm;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Create layout: mode tabs, timer, hint, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Timer
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_hint(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if let Some(form) = app.settings().filter(|f| f.is_visible()) {
        render_settings(frame, form, area);
    }
}

const fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Red,
        Mode::Break => Color::Green,
    }
}

/// Render the Work/Break tabs.
fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let active = app.controller.mode();
    let titles: Vec<Line<'_>> = Mode::ALL
        .iter()
        .map(|mode| Line::from(format!(" {mode} ")))
        .collect();
    let selected = Mode::ALL.iter().position(|m| *m == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(mode_color(active))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Pomodoro Timer ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

/// Render the remaining time and progress.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mode = app.controller.mode();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(mode_color(mode)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // Time
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let time_style = if app.controller.remaining_seconds() < 0 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let time = Paragraph::new(Line::from(vec![
        Span::styled(format!("{mode}  "), Style::default().fg(mode_color(mode))),
        Span::styled(app.display.text.as_str(), time_style),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(time, rows[1]);

    let gauge_area = centered_columns(rows[3], 60);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(mode_color(mode)).bg(Color::Black))
        .ratio(app.controller.progress())
        .label("");
    frame.render_widget(gauge, gauge_area);
}

/// Render the start/stop hint.
fn render_hint(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (label, color) = if app.display.running {
        ("[space] Stop", Color::Yellow)
    } else {
        ("[space] Start", Color::Green)
    };

    let hint = Paragraph::new(label)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    frame.render_widget(hint, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let default_text;
    let status_text = if let Some(status) = app.status.as_deref() {
        status
    } else if let Some((mode, at)) = app.display.last_completed {
        default_text = format!("{mode} finished at {}", at.format("%H:%M"));
        default_text.as_str()
    } else {
        "space:start/stop | w:work | b:break | r:reset | o:settings | ?:help | q:quit"
    };

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the settings form as a popup.
fn render_settings(frame: &mut Frame<'_>, form: &SettingsForm, area: Rect) {
    let popup = centered_rect(area, 50, 10);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Work label
            Constraint::Length(1), // Work slider
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Break label
            Constraint::Length(1), // Break slider
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    for (mode, label_row, slider_row) in [(Mode::Work, rows[0], rows[1]), (Mode::Break, rows[3], rows[4])] {
        let focused = form.focused() == mode;
        let slider = form.slider(mode);

        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().fg(mode_color(mode)).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label = Paragraph::new(format!("{marker}{mode}: {} min", slider.minutes())).style(label_style);
        frame.render_widget(label, label_row);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(mode_color(mode)).bg(Color::Black))
            .ratio(slider.ratio())
            .label("");
        frame.render_widget(gauge, slider_row);
    }

    let help = Paragraph::new("←/→ ±1 | PgUp/PgDn ±5 | ↑/↓ switch | Enter apply | Esc close")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[6]);
}

/// A horizontally centred slice of `area`, `percent` wide.
fn centered_columns(area: Rect, percent: u16) -> Rect {
    let side = (100 - percent) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent),
            Constraint::Percentage(side),
        ])
        .split(area)[1]
}

/// A rectangle `percent` wide and `height` rows tall, centred in `area`.
fn centered_rect(area: Rect, percent: u16, height: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    centered_columns(rows[1], percent)
}
