use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use zoobae_core::MainTab;

use crate::app::App;
use crate::ui::styles;

/// Static copy for a tab: heading, subheading, then card title and card lines.
struct TabContent {
    heading: &'static str,
    subheading: &'static str,
    card_title: &'static str,
    card_lines: &'static [&'static str],
}

fn content(tab: MainTab) -> TabContent {
    match tab {
        MainTab::Discover => TabContent {
            heading: "Discover",
            subheading: "Swipe profiles to find matches",
            card_title: "Profile Cards",
            card_lines: &["Swipe left/right with compatibility scores"],
        },
        MainTab::Tbd => TabContent {
            heading: "Coming Soon",
            subheading: "New features are on the way",
            card_title: "TBD",
            card_lines: &[],
        },
        MainTab::MatchAi => TabContent {
            heading: "Match-AI",
            subheading: "Your AI-curated matches",
            card_title: "Complete Questionnaire",
            card_lines: &[
                "Answer personality questions to unlock your AI matches.",
                "You'll see up to 5 highly compatible matches daily.",
                "",
                "[ Take Questionnaire ]",
                "",
                "AI Matches - Max 5 matches per day",
            ],
        },
        MainTab::Messages => TabContent {
            heading: "Messages",
            subheading: "Conversations with your matches",
            card_title: "Chat Conversations",
            card_lines: &["Start matching to see conversations here"],
        },
        MainTab::Profile => TabContent {
            heading: "Profile",
            subheading: "Your Name - your.email@example.com",
            card_title: "Photo",
            card_lines: &["Edit Profile", "Answer Questions", "Settings", "Logout"],
        },
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    render_tab_body(frame, app.nav.main_tab(), chunks[0]);
    render_tab_bar(frame, app.nav.main_tab(), chunks[1]);
}

fn render_tab_body(frame: &mut Frame, tab: MainTab, area: Rect) {
    let content = content(tab);

    let mut lines = vec![
        Line::from(Span::styled(content.heading, styles::title_style())),
        Line::from(Span::styled(content.subheading, styles::muted_style())),
        Line::from(""),
        Line::from(Span::styled(content.card_title, styles::card_style())),
    ];
    lines.extend(
        content
            .card_lines
            .iter()
            .map(|l| Line::from(Span::styled(*l, styles::list_item_style()))),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Bottom bar in the style of a mobile tab navigator
fn render_tab_bar(frame: &mut Frame, selected: MainTab, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in MainTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(
            format!("[{}] {}", i + 1, tab.title()),
            styles::tab_style(*tab == selected),
        ));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
