//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module draws the UI
//! from AppState but never modifies answers or navigation state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

use crate::answers::LIFE_SKILLS_LIMIT;
use crate::wizard::Step;

use super::state::{AppState, InteractionMode, Row, step_rows};

/// Palette for the card chrome
mod colors {
    use ratatui::style::Color;

    pub const ACCENT: Color = Color::Rgb(129, 140, 248); // Indigo
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED: Color = Color::Rgb(255, 215, 0); // Gold
    pub const CHECKED: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const BADGE: Color = Color::Rgb(251, 191, 36); // Amber
    pub const ALERT: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const DIM: Color = Color::DarkGray;
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    let step = state.wizard.step();
    let show_gauge = !step.is_first() && !step.is_last();

    let constraints = if show_gauge {
        vec![
            Constraint::Length(3), // Header
            Constraint::Length(1), // Progress gauge
            Constraint::Min(0),    // Card content
            Constraint::Length(3), // Footer
        ]
    } else {
        vec![Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    let (content, footer) = if show_gauge {
        render_gauge(state, frame, chunks[1]);
        (chunks[2], chunks[3])
    } else {
        (chunks[1], chunks[2])
    };

    match step {
        Step::Intro => render_intro(frame, content),
        Step::Finish => render_finish(state, frame, content),
        _ => render_card(state, frame, content),
    }

    render_footer(state, frame, footer);

    if let InteractionMode::Alert(message) = &state.mode {
        render_alert(message, frame);
    }
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Ambassador Camp 2026",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(state.wizard.step().title(), Style::default().fg(colors::ACCENT)),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_gauge(state: &AppState, frame: &mut Frame, area: Rect) {
    let percent = state.wizard.progress_percent();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(colors::BADGE))
        .label(format!("Progress {percent}%"))
        .percent(percent);
    frame.render_widget(gauge, area);
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            "Welcome, Ambassador!",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw("Imagine preparing for a divine mission. Your choices will"),
        Line::raw("shape an unforgettable camp experience."),
        Line::raw(""),
        Line::styled("Press Enter to start", Style::default().fg(colors::ACCENT)),
    ];
    let intro = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(intro, area);
}

/// One answer card: its rows with the cursor highlighted
fn render_card(state: &AppState, frame: &mut Frame, area: Rect) {
    let step = state.wizard.step();
    let mut lines = vec![Line::raw("")];

    for (i, row) in step_rows(step).iter().enumerate() {
        let selected = i == state.cursor;
        let marker = if selected { "› " } else { "  " };
        let line_style = if selected {
            Style::default().fg(colors::SELECTED)
        } else {
            Style::default()
        };

        let line = match row {
            Row::Select { field, label, .. } => {
                let value = state.wizard.answers.scalar(*field);
                let shown = if value.is_empty() { "(select)" } else { value };
                Line::from(vec![
                    Span::styled(format!("{marker}{label}: "), line_style),
                    Span::styled(shown.to_string(), line_style.add_modifier(Modifier::BOLD)),
                ])
            }
            Row::Text { field, label } => {
                let value = match &state.mode {
                    InteractionMode::Text(input) if input.field == *field => {
                        format!("{}█", input.buffer)
                    }
                    _ => {
                        let v = state.wizard.answers.scalar(*field);
                        if v.is_empty() { "(press Enter to write)".to_string() } else { v.to_string() }
                    }
                };
                Line::from(vec![
                    Span::styled(format!("{marker}{label}: "), line_style),
                    Span::styled(value, line_style),
                ])
            }
            Row::Check { field, choice } => {
                let checked = state.wizard.answers.set_field(*field).contains(choice.key);
                let (box_mark, box_style) = if checked {
                    ("[x] ", Style::default().fg(colors::CHECKED))
                } else {
                    ("[ ] ", Style::default().fg(colors::DIM))
                };
                Line::from(vec![
                    Span::styled(marker.to_string(), line_style),
                    Span::styled(box_mark, box_style),
                    Span::styled(choice.label.to_string(), line_style),
                ])
            }
        };
        lines.push(line);
    }

    if step == Step::LifeSkills {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!(
                "Selected: {} / {} skills",
                state.wizard.answers.life_skills.len(),
                LIFE_SKILLS_LIMIT
            ),
            Style::default().fg(colors::ACCENT),
        ));
    }
    if step == Step::Hope {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Press s to submit your mission",
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        ));
    }

    let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}

/// Summary screen with the earned badge
fn render_finish(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::raw(""),
        Line::styled("Mission Accepted!", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw("Thank you, Ambassador. Your answers will help us build"),
        Line::raw("an unforgettable camp."),
        Line::raw(""),
    ];

    if let Some(badge) = state.wizard.badge() {
        let label = badge.label();
        let width = label.len() + 8;
        let border: String = "═".repeat(width);
        lines.push(Line::styled(
            format!("╔{border}╗"),
            Style::default().fg(colors::ACCENT),
        ));
        lines.push(Line::from(vec![
            Span::styled("║", Style::default().fg(colors::ACCENT)),
            Span::styled(
                format!("{:^width$}", "Ambassador"),
                Style::default().fg(Color::White),
            ),
            Span::styled("║", Style::default().fg(colors::ACCENT)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("║", Style::default().fg(colors::ACCENT)),
            Span::styled(
                format!("{label:^width$}"),
                Style::default().fg(colors::BADGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("║", Style::default().fg(colors::ACCENT)),
        ]));
        lines.push(Line::styled(
            format!("╚{border}╝"),
            Style::default().fg(colors::ACCENT),
        ));
        lines.push(Line::raw(""));
    }

    let prize = if state.wizard.answers.prize_draw_entry {
        Line::styled("✓ Entered in the prize draw", Style::default().fg(colors::CHECKED))
    } else {
        Line::styled("p: enter the prize draw", Style::default().fg(colors::DIM))
    };
    lines.push(prize);

    let finish = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(finish, area);
}

fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = if state.wizard.is_submitting() {
        Line::styled("Submitting…", Style::default().fg(colors::BADGE))
    } else if let Some(toast) = &state.toast {
        Line::styled(toast.clone(), Style::default().fg(colors::SELECTED))
    } else {
        let keys = match (&state.mode, state.wizard.step()) {
            (InteractionMode::Text(_), _) => "Enter save · Esc cancel",
            (_, Step::Intro) => "Enter start · q quit",
            (_, Step::Finish) => "e edit answers · p prize draw · q quit",
            (_, Step::Hope) => "s submit · ←/→ steps · ↑/↓ move · Enter edit · q quit",
            _ => "←/→ steps · ↑/↓ move · Space/Enter toggle · q quit",
        };
        Line::styled(keys, Style::default().fg(colors::DIM))
    };
    let footer = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Blocking failure dialog, centered over everything
fn render_alert(message: &str, frame: &mut Frame) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::raw(""),
        Line::styled("Something went wrong", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled("Press Enter to continue", Style::default().fg(colors::DIM)),
    ];
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ALERT))
                .title("Submission failed"),
        );
    frame.render_widget(dialog, area);
}

/// Centered sub-rectangle, percent-based
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
