use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use zoobae_core::Screen;

use crate::app::{Alert, App, AppState};

use super::screens::{auth_form, main_tabs, welcome};
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Min(10),   // Screen body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_screen(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render overlays
    if let Some(alert) = app.alert() {
        render_alert_overlay(frame, alert);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

/// "Zoo" in white, "bae" in pink
pub fn logo_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("Zoo", styles::brand_style()),
        Span::styled("bae", styles::brand_accent_style()),
    ])
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.nav.current().title();

    let mut spans = vec![Span::raw("  ")];
    spans.extend(logo_line().spans);
    spans.push(Span::raw(" ".repeat(
        (area.width as usize).saturating_sub(screen.len() + 10),
    )));
    spans.push(Span::styled(screen, styles::muted_style()));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_screen(frame: &mut Frame, app: &App, area: Rect) {
    match app.nav.current() {
        Screen::Welcome => welcome::render(frame, app, area),
        Screen::Login | Screen::Register => {
            if let Some(kind) = app.active_form() {
                auth_form::render(frame, app, kind, area);
            }
        }
        Screen::MainTabs => main_tabs::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.nav.current() {
        Screen::Welcome => "[↑/↓] select | [Enter] choose | [Esc] back",
        Screen::Login | Screen::Register => "[Tab] next field | [Enter] submit | [Esc] back",
        Screen::MainTabs => "[←/→] or [1-5] tabs | [Esc] quit",
    };

    let left_text = if app.active_form().is_some_and(|kind| app.flow(kind).is_busy()) {
        " Waiting for server... ".to_string()
    } else {
        format!(" {} ", app.config.api_base_url)
    };
    let right_text = format!(" {} | [Ctrl+C] quit ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn render_alert_overlay(frame: &mut Frame, alert: &Alert) {
    let area = centered_rect_fixed(44, 9, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let body_style = match alert {
        Alert::Failure { .. } => styles::error_style(),
        Alert::RegistrationConfirmed => styles::list_item_style(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {}", alert.body()), body_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("                 [", styles::muted_style()),
            Span::styled(" OK ", styles::selected_style()),
            Span::styled("]", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .title(format!(" {} ", alert.title()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(40, 7, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}
