// Application State
// Main application state management and lifecycle

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, info};

use super::contact::ContactModal;
use super::events::{AppEvent, HitMap, HitTarget};
use super::scroll::PageScroll;
use super::tabs::TabController;
use crate::config::AppConfig;
use crate::effects::StarFieldController;

/// Rows moved by PageUp/PageDown
const PAGE_STEP: i32 = 10;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Page content and tuning
    pub config: AppConfig,

    /// Background star field and shooting stars
    pub starfield: StarFieldController,

    /// Skills/Projects panel
    pub tabs: TabController,

    /// Page scroll position
    pub scroll: PageScroll,

    /// "Let's Connect" modal
    pub contact: ContactModal,

    /// Clickable regions from the last frame
    pub hits: HitMap,

    /// Status bar text overriding the configured default
    pub status: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance. `seed` fixes the star field.
    pub fn new(config: AppConfig, seed: Option<u64>) -> Result<Self> {
        let tabs = TabController::new(config.tabs.clone()).context("cannot build the tab panel")?;
        let starfield = match seed {
            Some(seed) => StarFieldController::seeded(config.effects.clone(), seed),
            None => StarFieldController::from_os_rng(config.effects.clone()),
        };
        let contact = ContactModal::new(config.contact.options.len());

        Ok(Self {
            config,
            starfield,
            tabs,
            scroll: PageScroll::new(),
            contact,
            hits: HitMap::new(),
            status: None,
            should_quit: false,
        })
    }

    /// Start the ambient effects
    pub fn mount(&mut self, now: Instant) {
        self.starfield.mount(now);
    }

    /// Advance timers and animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.starfield.tick(now);
        self.scroll.tick(now);
    }

    /// Stop the ambient effects; safe to call more than once
    pub fn teardown(&mut self) {
        self.starfield.teardown();
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Text for the status bar
    pub fn status_text(&self) -> &str {
        if let Some(status) = &self.status {
            return status;
        }
        let bar = &self.config.application.status_bar;
        match (&bar.modal_text, self.contact.is_open()) {
            (Some(modal_text), true) => modal_text,
            _ => &bar.default_text,
        }
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::ScrollUp(rows) => self.scroll.scroll_by(-(rows as i32)),
            AppEvent::ScrollDown(rows) => self.scroll.scroll_by(rows as i32),
            AppEvent::PageUp => self.scroll.scroll_by(-PAGE_STEP),
            AppEvent::PageDown => self.scroll.scroll_by(PAGE_STEP),
            AppEvent::JumpTo(index) => self.jump_to(index, now),
            AppEvent::NextTab => {
                self.tabs.select_next();
            }
            AppEvent::PreviousTab => {
                self.tabs.select_previous();
            }
            AppEvent::OpenContact => self.open_contact(),
            AppEvent::Back => self.close_contact(),
            AppEvent::ModalUp => {
                self.contact.select_previous();
                self.show_selected_contact();
            }
            AppEvent::ModalDown => {
                self.contact.select_next();
                self.show_selected_contact();
            }
            AppEvent::Activate => self.show_selected_contact(),
            AppEvent::Click(column, row) => self.click(column, row, now),
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    fn jump_to(&mut self, index: usize, now: Instant) {
        if let Some(link) = self.config.navigation.get(index) {
            let anchor = link.anchor.clone();
            self.scroll.scroll_to_anchor(&anchor, now);
        }
    }

    fn open_contact(&mut self) {
        self.contact.open();
        self.status = None;
        self.show_selected_contact();
    }

    fn close_contact(&mut self) {
        self.contact.close();
        self.status = None;
    }

    fn show_selected_contact(&mut self) {
        if let Some(option) = self.config.contact.options.get(self.contact.selected()) {
            self.status = Some(format!("{} → {}", option.label, option.href));
        }
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) {
        let target = self.hits.target_at(column, row);
        debug!(column, row, ?target, "click");

        // While the modal is up only its own options react
        if self.contact.is_open() {
            match target {
                Some(HitTarget::ContactOption(index)) => {
                    self.contact.select(index);
                    self.show_selected_contact();
                }
                _ => self.close_contact(),
            }
            return;
        }

        match target {
            Some(HitTarget::Tab(index)) => {
                if let Err(e) = self.tabs.select(index) {
                    debug!(error = %e, "ignoring click on a stale tab region");
                }
            }
            Some(HitTarget::NavLink(index)) => self.jump_to(index, now),
            Some(HitTarget::SocialLink(index)) => {
                if let Some(link) = self.config.social_links.get(index) {
                    self.status = Some(format!("{} → {}", link.label, link.href));
                }
            }
            Some(HitTarget::ConnectButton) => self.open_contact(),
            Some(HitTarget::ContactOption(_)) | None => {}
        }
    }
}
