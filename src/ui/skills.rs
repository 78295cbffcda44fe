// Skills & Projects Section
// Heading, intro text, tab bar and the active tab's content panel

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::helpers::{put_str, wrap_text, Layer};
use super::styles::Styles;
use super::tab_bar::render_tab_bar;
use crate::config::SectionConfig;
use crate::core::{ContentBlock, TabController};

/// Horizontal margin between the section edge and the panel
const MARGIN_X: u16 = 2;

/// Horizontal padding inside the panel border
const PADDING_X: u16 = 2;

/// Widest the intro paragraph may grow
const INTRO_WIDTH: u16 = 72;

/// Vertical positions of the section's parts, relative to its top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsLayout {
    pub heading_row: u16,
    pub intro_row: u16,
    pub intro_lines: Vec<String>,
    pub panel_top: u16,
    pub panel_height: u16,
    pub height: u16,
}

fn intro_width(width: u16) -> usize {
    width.saturating_sub(8).clamp(10, INTRO_WIDTH) as usize
}

fn content_width(width: u16) -> usize {
    width.saturating_sub(2 * MARGIN_X + 2 + 2 * PADDING_X).max(10) as usize
}

/// Compute the layout for a section `width` wide, at least `min_height` tall
pub fn measure(section: &SectionConfig, tabs: &TabController, width: u16, min_height: u16, styles: &Styles) -> SkillsLayout {
    let heading_row = 1;
    let intro_row = heading_row + 2;
    let intro_lines = wrap_text(&section.intro, intro_width(width));
    // blank row, then the active tab's cap row
    let panel_top = intro_row + intro_lines.len() as u16 + 2;
    let content_lines = content_lines(tabs, content_width(width), styles).len() as u16;
    // border + padding row on each side
    let panel_height = content_lines + 4;
    let height = (panel_top + panel_height + 1).max(min_height);

    SkillsLayout {
        heading_row,
        intro_row,
        intro_lines,
        panel_top,
        panel_height,
        height,
    }
}

/// Draw the section into its own layer
pub fn render_skills(section: &SectionConfig, tabs: &TabController, width: u16, min_height: u16, styles: &Styles) -> Layer {
    let layout = measure(section, tabs, width, min_height, styles);
    let mut layer = Layer::new(width, layout.height);

    put_centered(&mut layer, layout.heading_row, &section.heading, styles.heading().add_modifier(ratatui::style::Modifier::UNDERLINED));
    for (i, line) in layout.intro_lines.iter().enumerate() {
        put_centered(&mut layer, layout.intro_row + i as u16, line, styles.muted());
    }

    let panel = Rect::new(
        MARGIN_X,
        layout.panel_top,
        width.saturating_sub(2 * MARGIN_X),
        layout.panel_height,
    );
    if panel.width < 4 {
        return layer;
    }

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.tab_border())
        .style(styles.modal_panel())
        .render(panel, &mut layer.buf);

    let hits = render_tab_bar(&mut layer.buf, panel.x, panel.y, panel.width, tabs, styles);
    for (area, target) in hits {
        layer.register(area, target);
    }

    let inner_x = panel.x + 1 + PADDING_X;
    let inner_width = panel.width.saturating_sub(2 + 2 * PADDING_X);
    for (i, line) in content_lines(tabs, content_width(width), styles).iter().enumerate() {
        layer.buf.set_line(inner_x, panel.y + 2 + i as u16, line, inner_width);
    }

    layer
}

fn put_centered(layer: &mut Layer, row: u16, text: &str, style: ratatui::style::Style) {
    let width = layer.area().width as i32;
    let x = (width - text.chars().count() as i32) / 2;
    put_str(&mut layer.buf, x.max(0), row as i32, text, style);
}

/// Lines for the active tab's content, wrapped to `width`
pub fn content_lines(tabs: &TabController, width: usize, styles: &Styles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in tabs.active().content {
        match block {
            ContentBlock::Heading(text) => {
                lines.push(Line::from(Span::styled(text.clone(), styles.heading())));
                lines.push(Line::default());
            }
            ContentBlock::Subheading(text) => {
                lines.push(Line::from(Span::styled(text.clone(), styles.heading())));
            }
            ContentBlock::Paragraph(text) => {
                lines.extend(
                    wrap_text(text, width)
                        .into_iter()
                        .map(|l| Line::from(Span::styled(l, styles.text()))),
                );
                lines.push(Line::default());
            }
            ContentBlock::List(items) => {
                for item in items {
                    for (i, wrapped) in wrap_text(item, width.saturating_sub(2)).into_iter().enumerate() {
                        let marker = if i == 0 { "• " } else { "  " };
                        lines.push(Line::from(vec![
                            Span::styled(marker, styles.bullet()),
                            Span::styled(wrapped, styles.text()),
                        ]));
                    }
                }
                lines.push(Line::default());
            }
            ContentBlock::Gallery(images) => {
                for image in images {
                    let label: String = format!("▣ {}", image.alt)
                        .chars()
                        .take(width.saturating_sub(4))
                        .collect();
                    let inner = label.chars().count() + 2;
                    lines.push(Line::from(Span::styled(format!("┌{}┐", "─".repeat(inner)), styles.image_frame())));
                    lines.push(Line::from(vec![
                        Span::styled("│ ", styles.image_frame()),
                        Span::styled(label, styles.text()),
                        Span::styled(" │", styles.image_frame()),
                    ]));
                    lines.push(Line::from(Span::styled(format!("└{}┘", "─".repeat(inner)), styles.image_frame())));
                    if let Some(caption) = &image.caption {
                        lines.push(Line::from(Span::styled(format!("  {}", caption), styles.caption())));
                    }
                }
                lines.push(Line::default());
            }
        }
    }

    // Drop trailing spacing
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, EMBEDDED_CONFIG};
    use crate::core::Theme;

    fn fixture() -> (SectionConfig, TabController) {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        (config.skills_section, TabController::new(config.tabs).unwrap())
    }

    fn row_text(layer: &Layer, row: u16) -> String {
        (0..layer.area().width)
            .map(|x| layer.buf[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_skills_tab_content() {
        let (_, tabs) = fixture();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        let lines = content_lines(&tabs, 60, &styles);

        assert_eq!(lines[0].spans[0].content, "Frontend Skills");
        assert_eq!(lines[2].spans[1].content, "React");
        assert!(lines.last().is_some_and(|l| !l.spans.is_empty()));
    }

    #[test]
    fn test_switching_tab_changes_content() {
        let (section, mut tabs) = fixture();
        let theme = Theme::default();
        let styles = Styles::new(&theme);

        let skills = measure(&section, &tabs, 80, 0, &styles);
        tabs.select(1).unwrap();
        let projects = measure(&section, &tabs, 80, 0, &styles);

        assert_ne!(skills.panel_height, projects.panel_height);
        let first = content_lines(&tabs, 60, &styles);
        assert_eq!(first[0].spans[0].content, "DataAnalytic Project");
    }

    #[test]
    fn test_min_height_respected() {
        let (section, tabs) = fixture();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        assert_eq!(measure(&section, &tabs, 80, 200, &styles).height, 200);
    }

    #[test]
    fn test_render_places_heading_and_tabs() {
        let (section, tabs) = fixture();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        let layer = render_skills(&section, &tabs, 80, 30, &styles);
        let layout = measure(&section, &tabs, 80, 30, &styles);

        assert!(row_text(&layer, layout.heading_row).contains("Skills & Projects"));
        assert!(row_text(&layer, layout.panel_top).contains("Projects"));
        assert!(row_text(&layer, layout.panel_top + 2).contains("Frontend Skills"));
        assert_eq!(layer.hits.len(), 2);
    }
}
