// Navigation Bar
// Fixed top bar: monogram, section anchors and social links

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, Widget},
};

use super::helpers::put_str;
use super::styles::Styles;
use crate::config::{NavLinkConfig, SocialLinkConfig};
use crate::core::HitTarget;

/// Content for one frame of the bar
pub struct NavBar<'a> {
    pub monogram: &'a str,
    pub links: &'a [NavLinkConfig],
    pub social: &'a [SocialLinkConfig],
    /// Anchor the page is currently scrolled to
    pub current: Option<&'a str>,
}

/// Draw the bar into `area` and return its clickable regions
pub fn render_nav_bar(buf: &mut Buffer, area: Rect, nav: &NavBar, styles: &Styles) -> Vec<(Rect, HitTarget)> {
    let mut hits = Vec::new();
    if area.height == 0 || area.width == 0 {
        return hits;
    }

    Clear.render(area, buf);
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles.tab_border())
        .style(styles.background())
        .render(area, buf);

    let row = area.y as i32;
    let right = area.right() as i32;

    let monogram = format!(" {} ", nav.monogram);
    put_str(buf, area.x as i32 + 1, row, &monogram, styles.monogram());
    let mut x = area.x as i32 + monogram.chars().count() as i32 + 3;

    for (index, link) in nav.links.iter().enumerate() {
        let text = format!("{} {}", index + 1, link.label);
        let width = text.chars().count() as i32;
        if x + width > right {
            break;
        }
        let current = nav.current == Some(link.anchor.as_str());
        put_str(buf, x, row, &text, styles.nav_link(current));
        hits.push((Rect::new(x as u16, row as u16, width as u16, 1), HitTarget::NavLink(index)));
        x += width + 3;
    }
    let links_end = x;

    // Social links are right-aligned; drop them when they would collide
    let social_width: i32 = nav
        .social
        .iter()
        .map(|s| s.label.chars().count() as i32 + 2)
        .sum();
    let mut sx = right - social_width - 1;
    if sx < links_end {
        return hits;
    }
    for (index, link) in nav.social.iter().enumerate() {
        let width = link.label.chars().count() as i32;
        put_str(buf, sx, row, &link.label, styles.social_link());
        hits.push((Rect::new(sx as u16, row as u16, width as u16, 1), HitTarget::SocialLink(index)));
        sx += width + 2;
    }

    hits
}
