// Event Handling
// Application event types, click targets and the terminal event translator

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Scroll the page up by rows
    ScrollUp(u16),

    /// Scroll the page down by rows
    ScrollDown(u16),

    PageUp,
    PageDown,

    /// Smooth-scroll to the nth navigation anchor
    JumpTo(usize),

    NextTab,
    PreviousTab,

    /// Open the contact modal
    OpenContact,

    /// Close the modal
    Back,

    /// Move the contact selection
    ModalUp,
    ModalDown,

    /// Activate the highlighted contact option
    Activate,

    /// Left click at (column, row)
    Click(u16, u16),

    /// Terminal resized
    Resize,

    /// No operation
    None,
}

/// Something clickable that was drawn in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Tab(usize),
    NavLink(usize),
    SocialLink(usize),
    ConnectButton,
    ContactOption(usize),
}

/// Screen regions of the clickable elements in the last frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target at the given cell; later registrations win
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event, modal_open: bool) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, modal_open),
            Event::Mouse(mouse) => Self::handle_mouse(mouse, modal_open),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent, modal_open: bool) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppEvent::Quit;
        }

        if modal_open {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => AppEvent::Back,
                KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => AppEvent::ModalUp,
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => AppEvent::ModalDown,
                KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Activate,
                _ => AppEvent::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,

            // Scrolling
            KeyCode::Up | KeyCode::Char('k') => AppEvent::ScrollUp(1),
            KeyCode::Down | KeyCode::Char('j') => AppEvent::ScrollDown(1),
            KeyCode::PageUp => AppEvent::PageUp,
            KeyCode::PageDown => AppEvent::PageDown,

            // Anchors
            KeyCode::Home => AppEvent::JumpTo(0),
            KeyCode::Char(c @ '1'..='9') => AppEvent::JumpTo(c as usize - '1' as usize),

            // Tabs
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppEvent::NextTab,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppEvent::PreviousTab,

            // Contact
            KeyCode::Char('c') | KeyCode::Enter => AppEvent::OpenContact,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent, modal_open: bool) -> AppEvent {
        match mouse.kind {
            MouseEventKind::ScrollUp if modal_open => AppEvent::ModalUp,
            MouseEventKind::ScrollDown if modal_open => AppEvent::ModalDown,
            MouseEventKind::ScrollUp => AppEvent::ScrollUp(3),
            MouseEventKind::ScrollDown => AppEvent::ScrollDown(3),
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click(mouse.column, mouse.row),
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_page_keys() {
        assert_eq!(EventHandler::handle(key(KeyCode::Char('q')), false), AppEvent::Quit);
        assert_eq!(EventHandler::handle(key(KeyCode::Char('2')), false), AppEvent::JumpTo(1));
        assert_eq!(EventHandler::handle(key(KeyCode::Tab), false), AppEvent::NextTab);
        assert_eq!(EventHandler::handle(key(KeyCode::Char('c')), false), AppEvent::OpenContact);
        assert_eq!(EventHandler::handle(key(KeyCode::Down), false), AppEvent::ScrollDown(1));
    }

    #[test]
    fn test_modal_keys() {
        assert_eq!(EventHandler::handle(key(KeyCode::Esc), true), AppEvent::Back);
        assert_eq!(EventHandler::handle(key(KeyCode::Char('q')), true), AppEvent::Back);
        assert_eq!(EventHandler::handle(key(KeyCode::Down), true), AppEvent::ModalDown);
        assert_eq!(EventHandler::handle(key(KeyCode::Enter), true), AppEvent::Activate);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(EventHandler::handle(event.clone(), false), AppEvent::Quit);
        assert_eq!(EventHandler::handle(event, true), AppEvent::Quit);
    }

    #[test]
    fn test_mouse_events() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EventHandler::handle(click, false), AppEvent::Click(4, 7));

        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EventHandler::handle(wheel.clone(), false), AppEvent::ScrollDown(3));
        assert_eq!(EventHandler::handle(wheel, true), AppEvent::ModalDown);
    }

    #[test]
    fn test_hit_map_prefers_latest() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 10, 5), HitTarget::ConnectButton);
        hits.register(Rect::new(2, 2, 3, 1), HitTarget::Tab(1));
        hits.register(Rect::new(0, 0, 0, 0), HitTarget::Tab(9));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits.target_at(3, 2), Some(HitTarget::Tab(1)));
        assert_eq!(hits.target_at(0, 4), Some(HitTarget::ConnectButton));
        assert_eq!(hits.target_at(10, 0), None);
    }
}
