// Contact Modal
// Centered "Let's Connect" box listing the ways to get in touch

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Widget},
};

use super::helpers::{parse_color, put_str, wrap_text};
use super::styles::Styles;
use crate::config::ContactConfig;
use crate::core::{ContactModal, HitTarget};

const MAX_TEXT_WIDTH: usize = 44;

/// Centered box of `width` x `height`, kept at least 2 cells from each edge
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4)).max(area.width.min(10));
    let height = height.min(area.height.saturating_sub(2)).max(area.height.min(5));
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// Draw the modal over `area` and return the clickable option rows
pub fn render_contact_modal(
    buf: &mut Buffer,
    area: Rect,
    contact: &ContactConfig,
    state: &ContactModal,
    styles: &Styles,
) -> Vec<(Rect, HitTarget)> {
    let description = wrap_text(&contact.description, MAX_TEXT_WIDTH);
    let widest = description
        .iter()
        .map(|l| l.chars().count())
        .chain(contact.options.iter().map(|o| o.label.chars().count() + 6))
        .chain(std::iter::once(contact.title.chars().count()))
        .max()
        .unwrap_or(0);

    // border, title, blank, description, blank, options, blank, border
    let height = description.len() as u16 + contact.options.len() as u16 + 6;
    let popup = popup_area(area, widest as u16 + 8, height);
    Clear.render(popup, buf);

    let panel = styles.modal_panel();
    let inner = popup.width.saturating_sub(2) as usize;
    let left = popup.x as i32;
    let mut y = popup.y as i32;

    put_str(buf, left, y, &format!("┏{}┓", "━".repeat(inner)), panel);
    y += 1;
    put_row(buf, left, y, inner, &contact.title, panel.add_modifier(Modifier::BOLD));
    y += 1;
    put_row(buf, left, y, inner, "", panel);
    y += 1;
    for line in &description {
        put_row(buf, left, y, inner, line, panel);
        y += 1;
    }
    put_row(buf, left, y, inner, "", panel);
    y += 1;

    let mut hits = Vec::new();
    for (index, option) in contact.options.iter().enumerate() {
        let selected = state.selected() == index;
        let color = option.color.as_deref().map(parse_color);
        let style = match (selected, color) {
            (true, _) => panel.patch(styles.modal_selected()),
            (false, Some(color)) => panel.fg(color),
            (false, None) => panel,
        };
        let marker = if selected { "▶" } else { " " };
        put_row(buf, left, y, inner, &format!("{} {}", marker, option.label), style);
        if y >= popup.y as i32 && y < popup.bottom() as i32 - 1 {
            hits.push((Rect::new(popup.x + 1, y as u16, inner as u16, 1), HitTarget::ContactOption(index)));
        }
        y += 1;
    }
    put_row(buf, left, y, inner, "", panel);

    let bottom = popup.bottom() as i32 - 1;
    put_str(buf, left, bottom, &format!("┗{}┛", "━".repeat(inner)), panel);

    hits
}

/// `┃  text  ┃` with `text` centered in `inner` columns
fn put_row(buf: &mut Buffer, x: i32, y: i32, inner: usize, text: &str, style: Style) {
    let text: String = text.chars().take(inner).collect();
    let padding = inner.saturating_sub(text.chars().count());
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;
    let row = format!("┃{}{}{}┃", " ".repeat(left_pad), text, " ".repeat(right_pad));
    put_str(buf, x, y, &row, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, EMBEDDED_CONFIG};
    use crate::core::Theme;

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_popup_area_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(popup_area(area, 40, 10), Rect::new(20, 7, 40, 10));
        // Oversized boxes shrink to fit
        let small = popup_area(Rect::new(0, 0, 20, 8), 60, 30);
        assert!(small.width <= 20 && small.height <= 8);
    }

    #[test]
    fn test_modal_lists_options_with_hits() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        let mut state = ContactModal::new(config.contact.options.len());
        state.open();
        state.select(1);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let hits = render_contact_modal(&mut buf, area, &config.contact, &state, &styles);
        let rendered = text(&buf);

        assert!(rendered.contains("Let's Connect"));
        assert!(rendered.contains("▶ LinkedIn"));
        assert!(rendered.contains("WhatsApp"));
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[2].1, HitTarget::ContactOption(2));
        assert_eq!(hits[1].0.y, hits[0].0.y + 1);
    }
}
