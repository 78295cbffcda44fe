// Application View
// Page layout: fixed nav bar and status bar around a scrolling page of
// sections, all over the star field

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};
use std::time::Instant;

use super::contact_modal::render_contact_modal;
use super::helpers::DimmingContext;
use super::hero::{render_hero, HeroFrame};
use super::nav_bar::{render_nav_bar, NavBar};
use super::skills::{measure, render_skills};
use super::starfield_view::render_starfield;
use super::Styles;
use crate::constants::{NAV_HEIGHT, SECTION_HOME, SECTION_SKILLS, STATUS_HEIGHT};
use crate::core::{Anchor, App, HitMap};

/// Screen split for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub nav: Rect,
    pub page: Rect,
    pub status: Rect,
}

impl Screen {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_HEIGHT),    // Navigation
                Constraint::Min(0),                // Page
                Constraint::Length(STATUS_HEIGHT), // Status bar
            ])
            .split(area);
        Self {
            nav: chunks[0],
            page: chunks[1],
            status: chunks[2],
        }
    }
}

/// Heights of the page's sections for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub hero_height: u16,
    pub skills_height: u16,
}

impl PageLayout {
    pub fn total(&self) -> u16 {
        self.hero_height.saturating_add(self.skills_height)
    }
}

pub fn page_layout(app: &App, page: Rect) -> PageLayout {
    let theme = &app.config.theme;
    let styles = Styles::new(theme);
    let skills = measure(&app.config.skills_section, &app.tabs, page.width, page.height, &styles);
    PageLayout {
        hero_height: page.height,
        skills_height: skills.height,
    }
}

/// Update scroll limits and section anchors for a terminal of `area`
pub fn sync_scroll_bounds(app: &mut App, area: Rect) {
    let page = Screen::split(area).page;
    let layout = page_layout(app, page);
    let max = layout.total().saturating_sub(page.height);
    app.scroll.set_bounds(
        max,
        vec![
            Anchor {
                name: SECTION_HOME.to_string(),
                top: 0,
            },
            Anchor {
                name: SECTION_SKILLS.to_string(),
                top: layout.hero_height.min(max),
            },
        ],
    );
}

/// Render the entire application and return this frame's click regions
pub fn render_app(f: &mut Frame, app: &App, now: Instant) -> HitMap {
    let area = f.area();
    render_page(f.buffer_mut(), area, app, now)
}

/// Render into a bare buffer
pub fn render_page(buf: &mut Buffer, area: Rect, app: &App, now: Instant) -> HitMap {
    let mut hits = HitMap::new();
    let styles = Styles::new(&app.config.theme);
    let screen = Screen::split(area);

    Block::default().style(styles.background()).render(area, buf);
    render_starfield(buf, area, &app.starfield, now);

    // Scrolling sections
    let layout = page_layout(app, screen.page);
    let offset = app.scroll.offset() as i32;

    let hero = render_hero(
        &HeroFrame {
            profile: &app.config.profile,
            width: screen.page.width,
            height: layout.hero_height,
            top: -offset,
            viewport_height: screen.page.height,
            elapsed: app.starfield.elapsed(now),
        },
        &styles,
    );
    for (rect, target) in hero.blit(buf, screen.page, -offset) {
        hits.register(rect, target);
    }

    let skills = render_skills(
        &app.config.skills_section,
        &app.tabs,
        screen.page.width,
        screen.page.height,
        &styles,
    );
    let skills_top = layout.hero_height as i32 - offset;
    for (rect, target) in skills.blit(buf, screen.page, skills_top) {
        hits.register(rect, target);
    }

    // Fixed chrome
    let nav = NavBar {
        monogram: &app.config.profile.monogram,
        links: &app.config.navigation,
        social: &app.config.social_links,
        current: app.scroll.current_anchor(),
    };
    for (rect, target) in render_nav_bar(buf, screen.nav, &nav, &styles) {
        hits.register(rect, target);
    }

    Clear.render(screen.status, buf);
    Paragraph::new(format!(" {}", app.status_text()))
        .style(styles.status_bar())
        .render(screen.status, buf);

    // Modal
    if app.contact.is_open() {
        // Clicks only reach the modal while it is up
        hits = HitMap::new();
        DimmingContext::new(true).apply(buf, area);
        for (rect, target) in render_contact_modal(buf, area, &app.config.contact, &app.contact, &styles) {
            hits.register(rect, target);
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, EMBEDDED_CONFIG};
    use crate::core::{AppEvent, HitTarget};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn app() -> App {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        App::new(config, Some(3)).unwrap()
    }

    fn screen_text(buf: &Buffer) -> String {
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
    fn test_screen_split() {
        let screen = Screen::split(Rect::new(0, 0, 80, 24));
        assert_eq!(screen.nav.height, NAV_HEIGHT);
        assert_eq!(screen.status, Rect::new(0, 23, 80, 1));
        assert_eq!(screen.page.height, 24 - NAV_HEIGHT - STATUS_HEIGHT);
    }

    #[test]
    fn test_scroll_bounds_and_anchors() {
        let mut app = app();
        let area = Rect::new(0, 0, 100, 30);
        sync_scroll_bounds(&mut app, area);

        let page = Screen::split(area).page;
        let layout = page_layout(&app, page);
        assert_eq!(app.scroll.max(), layout.total() - page.height);
        assert_eq!(app.scroll.anchors()[1].name, SECTION_SKILLS);
        assert_eq!(app.scroll.anchors()[1].top, page.height);
    }

    #[test]
    fn test_renders_hero_and_nav() {
        let mut app = app();
        let t0 = Instant::now();
        app.mount(t0);

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        sync_scroll_bounds(&mut app, Rect::new(0, 0, 100, 30));
        let mut hits = HitMap::new();
        terminal.draw(|f| hits = render_app(f, &app, t0)).unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("Hi, I'm Anthony"));
        assert!(text.contains("1 Home"));
        assert!(hits.len() >= 3);
    }

    #[test]
    fn test_scrolled_to_skills_shows_tabs() {
        let mut app = app();
        let t0 = Instant::now();
        app.mount(t0);
        let area = Rect::new(0, 0, 100, 30);
        sync_scroll_bounds(&mut app, area);

        app.handle_event(AppEvent::JumpTo(1), t0);
        app.tick(t0 + Duration::from_secs(1));

        let mut buf = Buffer::empty(area);
        let hits = render_page(&mut buf, area, &app, t0 + Duration::from_secs(1));
        let text = screen_text(&buf);

        assert!(text.contains("Frontend Skills"));
        assert!(text.contains("Projects"));
        let tab = Screen::split(area).page;
        let found = (tab.top()..tab.bottom())
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .any(|(x, y)| hits.target_at(x, y) == Some(HitTarget::Tab(1)));
        assert!(found);
    }

    #[test]
    fn test_modal_replaces_hits() {
        let mut app = app();
        let t0 = Instant::now();
        app.mount(t0);
        let area = Rect::new(0, 0, 100, 30);
        sync_scroll_bounds(&mut app, area);
        app.handle_event(AppEvent::OpenContact, t0);

        let mut buf = Buffer::empty(area);
        let hits = render_page(&mut buf, area, &app, t0);
        let text = screen_text(&buf);

        assert!(text.contains("Choose your preferred method"));
        assert_eq!(hits.len(), app.config.contact.options.len());
    }
}
