// Tab Bar
// Curved tab labels drawn into the top border of the content panel:
//
//     ╭──────────╮
//  ───╯ ▲ Skills ╰─ ▆ Projects ─────────
//
// Clicking a label selects that tab.

use ratatui::{buffer::Buffer, layout::Rect};

use super::helpers::put_str;
use super::styles::Styles;
use crate::core::{HitTarget, TabController};

/// Width of the leading border segment before the first tab
const LEADING: u16 = 3;

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub index: usize,
    pub x: u16,
    pub width: u16,
}

/// Label text for tab `index`: icon glyph then label
pub fn tab_label(tabs: &TabController, index: usize) -> String {
    let tab = &tabs.tabs()[index];
    format!("{} {}", tab.icon.glyph(), tab.label)
}

/// Horizontal extent of every tab label, relative to the bar start
pub fn calculate_tab_bounds(tabs: &TabController) -> Vec<TabBounds> {
    let mut bounds = Vec::with_capacity(tabs.len());
    let mut x = LEADING;

    for index in 0..tabs.len() {
        let label_width = tab_label(tabs, index).chars().count() as u16;
        // "╯ LABEL ╰" when active, " LABEL " otherwise
        let width = if tabs.is_active(index) {
            label_width + 4
        } else {
            label_width + 2
        };
        bounds.push(TabBounds { index, x, width });
        x += width + 1;
    }

    bounds
}

/// Draw the bar with the label line on row `y` of `buf` (the panel's top
/// border, already drawn) and the active tab's cap on row `y - 1`.
/// Returns the clickable label rects in `buf` coordinates.
pub fn render_tab_bar(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    max_width: u16,
    tabs: &TabController,
    styles: &Styles,
) -> Vec<(Rect, HitTarget)> {
    let mut hits = Vec::new();
    let right = x.saturating_add(max_width);

    for bounds in calculate_tab_bounds(tabs) {
        let start = x + bounds.x;
        if start >= right {
            break;
        }
        let label = tab_label(tabs, bounds.index);

        if tabs.is_active(bounds.index) {
            let cap = format!("╭{}╮", "─".repeat(bounds.width.saturating_sub(2) as usize));
            put_str(buf, start as i32, y as i32 - 1, &cap, styles.tab_border());
            put_str(buf, start as i32, y as i32, "╯", styles.tab_border());
            put_str(buf, start as i32 + 1, y as i32, &format!(" {} ", label), styles.tab_active());
            put_str(buf, (start + bounds.width) as i32 - 1, y as i32, "╰", styles.tab_border());
        } else {
            put_str(buf, start as i32, y as i32, &format!(" {} ", label), styles.tab_inactive());
        }

        let width = bounds.width.min(right - start);
        let (hit_y, hit_height) = if tabs.is_active(bounds.index) && y > 0 {
            (y - 1, 2)
        } else {
            (y, 1)
        };
        hits.push((Rect::new(start, hit_y, width, hit_height), HitTarget::Tab(bounds.index)));
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContentBlock, TabDefinition, TabIcon, Theme};

    fn tabs() -> TabController {
        let tab = |label: &str| TabDefinition {
            label: label.to_string(),
            icon: TabIcon::Rocket,
            content: vec![ContentBlock::Paragraph(label.to_string())],
        };
        TabController::new(vec![tab("Skills"), tab("Projects")]).unwrap()
    }

    #[test]
    fn test_bounds_follow_active_tab() {
        let mut tabs = tabs();
        // "▲ Skills" = 8, "▲ Projects" = 10
        assert_eq!(
            calculate_tab_bounds(&tabs),
            vec![
                TabBounds { index: 0, x: 3, width: 12 },
                TabBounds { index: 1, x: 16, width: 12 },
            ]
        );

        tabs.select(1).unwrap();
        assert_eq!(
            calculate_tab_bounds(&tabs),
            vec![
                TabBounds { index: 0, x: 3, width: 10 },
                TabBounds { index: 1, x: 14, width: 14 },
            ]
        );
    }

    #[test]
    fn test_render_marks_active_tab() {
        let tabs = tabs();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));

        let hits = render_tab_bar(&mut buf, 0, 1, 40, &tabs, &styles);

        assert_eq!(buf[(3, 0)].symbol(), "╭");
        assert_eq!(buf[(3, 1)].symbol(), "╯");
        assert_eq!(buf[(14, 1)].symbol(), "╰");
        assert_eq!(hits[0], (Rect::new(3, 0, 12, 2), HitTarget::Tab(0)));
        assert_eq!(hits[1], (Rect::new(16, 1, 12, 1), HitTarget::Tab(1)));
    }

    #[test]
    fn test_narrow_bar_truncates_hits() {
        let tabs = tabs();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));

        let hits = render_tab_bar(&mut buf, 0, 1, 10, &tabs, &styles);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.width, 7);
    }
}
