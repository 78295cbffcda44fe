// Page Scroll
// Vertical scroll position with animated jumps to section anchors

use std::time::{Duration, Instant};
use tracing::debug;

/// Duration of an animated anchor jump
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Named vertical position within the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub name: String,
    pub top: u16,
}

#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    offset: f32,
    max: u16,
    anchors: Vec<Anchor>,
    animation: Option<ScrollAnimation>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current first visible row of the page
    pub fn offset(&self) -> u16 {
        self.offset.round().clamp(0.0, self.max as f32) as u16
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the scrollable range and anchor positions after a layout pass
    pub fn set_bounds(&mut self, max: u16, anchors: Vec<Anchor>) {
        self.max = max;
        self.anchors = anchors;
        self.offset = self.offset.clamp(0.0, max as f32);
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.clamp(0.0, max as f32);
        }
    }

    /// Scroll by `delta` rows immediately, cancelling any running animation
    pub fn scroll_by(&mut self, delta: i32) {
        self.animation = None;
        self.offset = (self.offset() as i32 + delta).clamp(0, self.max as i32) as f32;
    }

    /// Animate towards `target`
    pub fn scroll_to(&mut self, target: u16, now: Instant) {
        let to = target.min(self.max) as f32;
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            started_at: now,
        });
    }

    /// Animate towards the named anchor. Returns `false` for unknown anchors.
    pub fn scroll_to_anchor(&mut self, name: &str, now: Instant) -> bool {
        let Some(top) = self.anchors.iter().find(|a| a.name == name).map(|a| a.top) else {
            return false;
        };
        debug!(anchor = name, top, "scrolling to anchor");
        self.scroll_to(top, now);
        true
    }

    /// Anchor whose section contains the current offset
    pub fn current_anchor(&self) -> Option<&str> {
        let offset = self.offset();
        self.anchors
            .iter()
            .filter(|a| a.top <= offset)
            .max_by_key(|a| a.top)
            .map(|a| a.name.as_str())
    }

    /// Advance a running animation
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };

        let elapsed = now.saturating_duration_since(animation.started_at);
        let t = (elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32()).min(1.0);
        self.offset = animation.from + (animation.to - animation.from) * ease_out_cubic(t);

        if t >= 1.0 {
            self.offset = animation.to;
            self.animation = None;
        }
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll() -> PageScroll {
        let mut scroll = PageScroll::new();
        scroll.set_bounds(
            60,
            vec![
                Anchor { name: "home".to_string(), top: 0 },
                Anchor { name: "skills-and-projects".to_string(), top: 40 },
            ],
        );
        scroll
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut scroll = scroll();
        scroll.scroll_by(-5);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(100);
        assert_eq!(scroll.offset(), 60);
    }

    #[test]
    fn test_anchor_jump_animates_to_target() {
        let mut scroll = scroll();
        let t0 = Instant::now();

        assert!(scroll.scroll_to_anchor("skills-and-projects", t0));
        assert!(scroll.is_animating());

        scroll.tick(t0 + Duration::from_millis(200));
        let midway = scroll.offset();
        assert!(midway > 0 && midway < 40);

        scroll.tick(t0 + SMOOTH_SCROLL_DURATION);
        assert_eq!(scroll.offset(), 40);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.current_anchor(), Some("skills-and-projects"));
    }

    #[test]
    fn test_unknown_anchor() {
        let mut scroll = scroll();
        assert!(!scroll.scroll_to_anchor("contact", Instant::now()));
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut scroll = scroll();
        let t0 = Instant::now();
        scroll.scroll_to_anchor("skills-and-projects", t0);
        scroll.scroll_by(1);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.offset(), 1);
    }

    #[test]
    fn test_shrinking_bounds_clamps_offset() {
        let mut scroll = scroll();
        scroll.scroll_by(50);
        scroll.set_bounds(10, Vec::new());
        assert_eq!(scroll.offset(), 10);
        assert_eq!(scroll.current_anchor(), None);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
