use ratatui::style::{Color, Modifier, Style};

use crate::branding::{Fade, BACKDROP_COUNT};

// Color palette
pub const PINK: Color = Color::Rgb(255, 105, 180);
pub const CRIMSON: Color = Color::Rgb(220, 20, 60);
pub const BLOSSOM: Color = Color::Rgb(255, 183, 197);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(64, 32, 48);

/// Border tints standing in for the photo backdrops
pub const BACKDROPS: [Color; BACKDROP_COUNT] = [
    Color::Rgb(255, 105, 180),
    Color::Rgb(255, 183, 197),
    Color::Rgb(219, 112, 147),
    Color::Rgb(199, 21, 133),
    Color::Rgb(238, 130, 238),
    Color::Rgb(250, 128, 114),
];

// Styles
pub fn brand_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn brand_accent_style() -> Style {
    Style::default().fg(PINK).add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default().fg(PINK).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default().bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn tab_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(PINK)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PINK)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn backdrop_style(backdrop: usize) -> Style {
    Style::default().fg(BACKDROPS[backdrop % BACKDROPS.len()])
}

/// Submit button colour differs per form
pub fn action_style(register: bool, busy: bool) -> Style {
    if busy {
        return muted_style();
    }
    let color = if register { CRIMSON } else { PINK };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Terminals have no opacity, so a fading tagline is drawn dim.
pub fn tagline_style(fade: Fade) -> Style {
    match fade {
        Fade::Visible => Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        Fade::FadingOut | Fade::FadingIn => Style::default()
            .fg(MUTED)
            .add_modifier(Modifier::ITALIC | Modifier::DIM),
    }
}

pub fn card_style() -> Style {
    Style::default().fg(BLOSSOM)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(40, 24, 32)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default().fg(PINK).add_modifier(Modifier::BOLD)
}
