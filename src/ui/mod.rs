// UI module
// Terminal views for the portfolio page and the main event loop

pub mod app_view;
pub mod contact_modal;
pub mod helpers;
pub mod hero;
pub mod nav_bar;
pub mod skills;
pub mod starfield_view;
pub mod styles;
pub mod tab_bar;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::POLL_INTERVAL_MS;
use crate::core::{App, AppEvent, EventHandler};

pub use app_view::{render_app, render_page, sync_scroll_bounds};
pub use styles::Styles;

/// Run the main application event loop until the user quits
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        // Layout depends on the terminal size and the active tab
        let size = terminal.size()?;
        sync_scroll_bounds(app, ratatui::layout::Rect::new(0, 0, size.width, size.height));

        let mut hits = None;
        terminal.draw(|f| hits = Some(render_app(f, app, now)))?;
        if let Some(hits) = hits {
            app.hits = hits;
        }

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event, app.contact.is_open());
            if app_event != AppEvent::None {
                debug!(?app_event, "event");
            }
            app.handle_event(app_event, Instant::now());
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
