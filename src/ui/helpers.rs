// Helper utilities for the page views

use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Style},
};

use crate::core::app_config::parse_hex;
use crate::core::HitTarget;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Grey of the given intensity (0.0 = black, 1.0 = white)
pub fn grey(intensity: f32) -> Color {
    let level = (intensity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(level, level, level)
}

/// Parse a named color or `#rrggbb`; unknown names fall back to white
pub fn parse_color(color: &str) -> Color {
    match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "dark_gray" => Color::DarkGray,
        "white" => Color::White,
        other => parse_hex(other).unwrap_or(Color::White),
    }
}

/// Dimming context - tracks if modal is visible
pub struct DimmingContext {
    pub modal_visible: bool,
}

impl DimmingContext {
    pub fn new(modal_visible: bool) -> Self {
        Self { modal_visible }
    }

    /// Grey out everything already drawn in `area` when the modal is visible
    pub fn apply(&self, buf: &mut Buffer, area: Rect) {
        if !self.modal_visible {
            return;
        }
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_fg(hex_color(0x444444));
                    cell.set_bg(hex_color(0x0A0A0A));
                }
            }
        }
    }
}

/// Word-wrap `text` to `max_width` columns; blank input lines are kept
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_line.is_empty() {
                current_line = word.to_string();
                current_width = word_width;
            } else if current_width + 1 + word_width <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
                current_width = word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// Off-screen surface for one page section
///
/// Sections are drawn at their full height and then copied into the visible
/// viewport at their scrolled position. Untouched cells are transparent and
/// cells without a background keep the one underneath.
pub struct Layer {
    pub buf: Buffer,
    pub hits: Vec<(Rect, HitTarget)>,
}

impl Layer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buf: Buffer::empty(Rect::new(0, 0, width, height)),
            hits: Vec::new(),
        }
    }

    pub fn area(&self) -> Rect {
        self.buf.area
    }

    pub fn register(&mut self, area: Rect, target: HitTarget) {
        self.hits.push((area, target));
    }

    /// Copy onto `dest` with the layer's origin at (`viewport.x`, `viewport.y + top`),
    /// clipped to `viewport`. Returns the clickable regions that remain visible.
    pub fn blit(&self, dest: &mut Buffer, viewport: Rect, top: i32) -> Vec<(Rect, HitTarget)> {
        let area = self.area();
        for ly in 0..area.height {
            let y = viewport.y as i32 + top + ly as i32;
            if y < viewport.top() as i32 || y >= viewport.bottom() as i32 {
                continue;
            }
            for lx in 0..area.width.min(viewport.width) {
                let Some(src) = self.buf.cell((lx, ly)) else {
                    continue;
                };
                if *src == Cell::default() {
                    continue;
                }
                if let Some(dst) = dest.cell_mut((viewport.x + lx, y as u16)) {
                    let bg = dst.bg;
                    *dst = src.clone();
                    if src.bg == Color::Reset {
                        dst.bg = bg;
                    }
                }
            }
        }

        self.hits
            .iter()
            .filter_map(|(rect, target)| {
                let y = viewport.y as i32 + top + rect.y as i32;
                let clipped_top = y.max(viewport.top() as i32);
                let clipped_bottom = (y + rect.height as i32).min(viewport.bottom() as i32);
                if clipped_bottom <= clipped_top {
                    return None;
                }
                let visible = Rect::new(
                    viewport.x + rect.x,
                    clipped_top as u16,
                    rect.width,
                    (clipped_bottom - clipped_top) as u16,
                );
                Some((visible.intersection(viewport), *target))
            })
            .collect()
    }
}

/// Write `text` at (`x`, `y`) inside `buf`, clipped to its area
pub fn put_str(buf: &mut Buffer, x: i32, y: i32, text: &str, style: Style) {
    let area = buf.area;
    if y < area.top() as i32 || y >= area.bottom() as i32 {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as i32;
        if cx < area.left() as i32 || cx >= area.right() as i32 {
            continue;
        }
        if let Some(cell) = buf.cell_mut((cx as u16, y as u16)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let lines = wrap_text("Dávila Dávila", 13);
        assert_eq!(lines, vec!["Dávila Dávila"]);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("green"), Color::Green);
        assert_eq!(parse_color("GRAY"), Color::Gray);
        assert_eq!(parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("chartreuse-ish"), Color::White);
    }

    #[test]
    fn test_layer_blit_clips_and_is_transparent() {
        let mut layer = Layer::new(4, 3);
        put_str(&mut layer.buf, 0, 0, "ab", Style::default());
        put_str(&mut layer.buf, 0, 2, "cd", Style::default());
        layer.register(Rect::new(0, 2, 2, 1), HitTarget::ConnectButton);

        let mut dest = Buffer::empty(Rect::new(0, 0, 4, 4));
        put_str(&mut dest, 3, 1, "z", Style::default());

        // Shift up by one row: row 0 of the layer falls off the top
        let hits = layer.blit(&mut dest, Rect::new(0, 1, 4, 3), -1);

        assert_eq!(dest[(0, 1)].symbol(), " ");
        assert_eq!(dest[(3, 1)].symbol(), "z");
        assert_eq!(dest[(0, 2)].symbol(), "c");
        assert_eq!(hits, vec![(Rect::new(0, 2, 2, 1), HitTarget::ConnectButton)]);
    }

    #[test]
    fn test_put_str_clips() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        put_str(&mut buf, -1, 0, "abcd", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "b");
        assert_eq!(buf[(2, 0)].symbol(), "d");
        put_str(&mut buf, 0, 5, "x", Style::default());
    }

    #[test]
    fn test_dimming_only_when_visible() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        DimmingContext::new(false).apply(&mut buf, area);
        assert_eq!(buf[(0, 0)].fg, Color::Reset);
        DimmingContext::new(true).apply(&mut buf, area);
        assert_eq!(buf[(0, 0)].fg, hex_color(0x444444));
    }
}
