use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use zoobae_core::FlowKind;

use crate::app::{App, FormFocus};
use crate::ui::render::{centered_rect_fixed, logo_line};
use crate::ui::styles;

/// Visible width of the input fields
const FIELD_WIDTH: usize = 24;

fn link_text(kind: FlowKind) -> &'static str {
    match kind {
        FlowKind::Login => "Don't have an account? Register",
        FlowKind::Registration => "Already have an account? Sign in",
    }
}

/// Show the tail of long input so the cursor stays visible
fn field_tail(value: &str) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(FIELD_WIDTH)).collect()
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if focused { "▌" } else { " " };
    Line::from(vec![
        Span::styled(format!("{:>9}: [", label), styles::muted_style()),
        Span::styled(
            format!("{:<width$}{}", value, cursor, width = FIELD_WIDTH),
            style,
        ),
        Span::styled("]", styles::muted_style()),
    ])
}

pub fn render(frame: &mut Frame, app: &App, kind: FlowKind, area: Rect) {
    let flow = app.flow(kind);
    let dialog = centered_rect_fixed(46, 14, area);

    let (tagline, fade) = app.branding.tagline(Instant::now());

    let mut lines = vec![
        Line::from(""),
        logo_line().alignment(Alignment::Center),
        Line::from(Span::styled(tagline, styles::tagline_style(fade))).alignment(Alignment::Center),
        Line::from(""),
    ];

    let creds = flow.credentials();
    lines.push(field_line(
        "Email",
        field_tail(&creds.email),
        app.form_focus == FormFocus::Email,
    ));
    let masked = "*".repeat(creds.password.chars().count().min(FIELD_WIDTH));
    lines.push(field_line(
        "Password",
        masked,
        app.form_focus == FormFocus::Password,
    ));
    lines.push(Line::from(""));

    let label = flow.button_label();
    let button_style = if app.form_focus == FormFocus::Submit {
        styles::selected_style().patch(styles::action_style(
            kind == FlowKind::Registration,
            flow.is_busy(),
        ))
    } else {
        styles::action_style(kind == FlowKind::Registration, flow.is_busy())
    };
    let button = if app.form_focus == FormFocus::Submit {
        format!(" ▶ {} ◀ ", label)
    } else {
        format!("   {}   ", label)
    };
    lines.push(
        Line::from(vec![
            Span::raw("["),
            Span::styled(button, button_style),
            Span::raw("]"),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    let link_style = if app.form_focus == FormFocus::Link {
        styles::selected_style()
    } else {
        styles::muted_style()
    };
    lines.push(Line::from(Span::styled(link_text(kind), link_style)).alignment(Alignment::Center));

    let block = Block::default()
        .title(format!(" {} ", kind.action_label()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::backdrop_style(app.branding.backdrop()));

    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}
