use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::branding::{Fade, TAGLINES};
use crate::ui::render::{centered_rect_fixed, logo_line};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let buttons = app.welcome_buttons();
    let height = 8 + buttons.len() as u16 * 2;
    let dialog = centered_rect_fixed(40, height, area);

    let mut lines = vec![
        Line::from(""),
        logo_line().alignment(Alignment::Center),
        Line::from(Span::styled(TAGLINES[0], styles::tagline_style(Fade::Visible)))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(""),
    ];

    for (i, button) in buttons.iter().enumerate() {
        let line = if i == app.welcome_selection {
            Line::from(Span::styled(
                format!(" ▶ {} ◀ ", button.label),
                styles::selected_style(),
            ))
        } else {
            Line::from(Span::styled(
                format!("   {}   ", button.label),
                styles::list_item_style(),
            ))
        };
        lines.push(line.alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::backdrop_style(app.branding.backdrop()));

    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}
