// UI Styles
// Color scheme and styling for the portfolio page

use ratatui::style::{Color, Modifier, Style};

use crate::core::Theme;

/// Page styles derived from the configured theme
pub struct Styles<'a> {
    pub theme: &'a Theme,
}

impl<'a> Styles<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    // === Page ===

    pub fn background(&self) -> Style {
        Style::default().bg(self.theme.background)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::Rgb(196, 181, 253))
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    // === Navigation ===

    pub fn monogram(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.theme.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_link(&self, current: bool) -> Style {
        if current {
            Style::default()
                .fg(self.theme.highlight)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn social_link(&self) -> Style {
        Style::default().fg(self.theme.highlight)
    }

    // === Hero ===

    pub fn badge(&self) -> Style {
        Style::default().fg(Color::White).bg(self.theme.panel)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.theme.accent)
            .add_modifier(Modifier::BOLD)
    }

    // === Tabs ===

    pub fn tab_border(&self) -> Style {
        Style::default().fg(self.theme.accent)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn bullet(&self) -> Style {
        Style::default().fg(self.theme.highlight)
    }

    pub fn image_frame(&self) -> Style {
        Style::default().fg(self.theme.accent)
    }

    pub fn caption(&self) -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    // === Status / Modal ===

    pub fn status_bar(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.theme.highlight)
    }

    pub fn modal_panel(&self) -> Style {
        Style::default().fg(Color::White).bg(self.theme.panel)
    }

    pub fn modal_selected(&self) -> Style {
        Style::default()
            .bg(self.theme.accent)
            .add_modifier(Modifier::BOLD)
    }
}
