// Hero Section
// Greeting block, "Let's Connect" button and the parallax planet scene

use ratatui::style::{Color, Style};
use std::time::Duration;

use super::helpers::{put_str, wrap_text, Layer};
use super::styles::Styles;
use crate::config::ProfileConfig;
use crate::core::HitTarget;
use crate::effects::ParallaxLayer;

/// Widths below this stack the scene under the text instead of beside it
const WIDE_LAYOUT: u16 = 80;

const PLANET_LARGE: &[&str] = &[
    "         _.-'''-._",
    "       .'  .:::.  '.",
    "  ~~~~/~~~:::::::~~~\\~~~~",
    " (   |    ':::::'    |   )",
    "  ~~~~\\~~~~~~~~~~~~~~/~~~~",
    "       '.         .'",
    "         '-._._.-'",
];

const PLANET_SMALL: &[&str] = &[
    "    .-\"-.",
    " ~~/~:::~\\~~",
    "(  | ::: |  )",
    " ~~\\~~~~~/~~",
    "    '-.-'",
];

const ASTRONAUT: &[&str] = &[" _ ", "(o)", "/|\\", "/ \\"];

/// Scroll-driven layers of the hero scene
pub const TEXT_LAYER: ParallaxLayer = ParallaxLayer::translate_y(-2.0, 2.0);
pub const PLANET_LAYER: ParallaxLayer = ParallaxLayer::translate_y(4.0, -4.0).with_scale(0.8, 1.2);
pub const ASTRONAUT_LAYER: ParallaxLayer = ParallaxLayer::translate_y(-4.0, 4.0)
    .with_translate_x(-8.0, 8.0)
    .with_scale(0.5, 1.5);
pub const ORB_DOWN_LAYER: ParallaxLayer = ParallaxLayer::translate_y(0.0, 6.0);
pub const ORB_UP_LAYER: ParallaxLayer = ParallaxLayer::translate_y(0.0, -6.0);

/// Float periods of the planet and the astronaut
const FLOAT_PERIOD: f32 = 10.0;
const FLOAT_SLOW_PERIOD: f32 = 15.0;

/// Vertical bob in rows: 0 → -amplitude → 0 over one period
pub fn float_offset(elapsed: Duration, period: f32, amplitude: f32) -> i32 {
    if period <= 0.0 {
        return 0;
    }
    let phase = (elapsed.as_secs_f32() % period) / period;
    let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
    (-amplitude * wave).round() as i32
}

/// Everything needed to draw the hero for one frame
pub struct HeroFrame<'a> {
    pub profile: &'a ProfileConfig,
    pub width: u16,
    pub height: u16,
    /// Row of the hero's top edge relative to the viewport top
    pub top: i32,
    /// Height of the visible viewport
    pub viewport_height: u16,
    /// Time since the effects were mounted
    pub elapsed: Duration,
}

impl HeroFrame<'_> {
    fn text_width(&self) -> u16 {
        if self.width >= WIDE_LAYOUT {
            self.width * 55 / 100
        } else {
            self.width.saturating_sub(4)
        }
    }

    fn summary_lines(&self) -> Vec<String> {
        wrap_text(&self.profile.summary, self.text_width().saturating_sub(2) as usize)
    }

    /// Rows used by the greeting block
    pub fn text_height(&self) -> u16 {
        // badge, blank, heading, blank, summary, blank, button
        self.summary_lines().len() as u16 + 6
    }
}

pub fn render_hero(frame: &HeroFrame, styles: &Styles) -> Layer {
    let mut layer = Layer::new(frame.width, frame.height);
    let text_offset = TEXT_LAYER.offset(frame.top, frame.height, frame.viewport_height);
    let text_height = frame.text_height() as i32;

    let wide = frame.width >= WIDE_LAYOUT;
    let x = 2;
    let mut y = if wide {
        (frame.height as i32 - text_height) / 2
    } else {
        2
    } + text_offset.dy;

    // Badge
    let badge = format!(" {} ", frame.profile.badge);
    put_str(&mut layer.buf, x, y, &badge, styles.badge());
    y += 2;

    put_str(&mut layer.buf, x, y, &frame.profile.heading, styles.heading());
    y += 2;

    for line in frame.summary_lines() {
        put_str(&mut layer.buf, x, y, &line, styles.text());
        y += 1;
    }
    y += 1;

    let button = format!("  {}  ", frame.profile.connect_label);
    let button_width = button.chars().count() as u16;
    put_str(&mut layer.buf, x, y, &button, styles.button());
    if y >= 0 && (y as u16) < frame.height {
        layer.register(
            ratatui::layout::Rect::new(x as u16, y as u16, button_width, 1),
            HitTarget::ConnectButton,
        );
    }

    // Planet scene: beside the text when wide, below it otherwise
    let (scene_x, scene_y) = if wide {
        (frame.text_width() as i32 + 6, frame.height as i32 / 2 - 4)
    } else {
        (4, y + 3)
    };
    render_scene(&mut layer, frame, scene_x, scene_y);
    render_orbs(&mut layer, frame, styles);

    layer
}

fn render_scene(layer: &mut Layer, frame: &HeroFrame, x: i32, y: i32) {
    let planet = PLANET_LAYER.offset(frame.top, frame.height, frame.viewport_height);
    let bob = float_offset(frame.elapsed, FLOAT_PERIOD, 1.0);
    let art = if planet.scale >= 1.0 { PLANET_LARGE } else { PLANET_SMALL };
    let planet_style = Style::default().fg(Color::Rgb(192, 132, 252));
    for (i, row) in art.iter().enumerate() {
        put_str(&mut layer.buf, x, y + planet.dy + bob + i as i32, row, planet_style);
    }

    let astronaut = ASTRONAUT_LAYER.offset(frame.top, frame.height, frame.viewport_height);
    let bob = float_offset(frame.elapsed, FLOAT_SLOW_PERIOD, 1.0);
    let astronaut_x = x + 10 + astronaut.dx;
    let astronaut_y = y + 2 + astronaut.dy + bob;
    for (i, row) in ASTRONAUT.iter().enumerate() {
        put_str(&mut layer.buf, astronaut_x, astronaut_y + i as i32, row, Style::default().fg(Color::White));
    }
}

fn render_orbs(layer: &mut Layer, frame: &HeroFrame, styles: &Styles) {
    let width = frame.width as i32;
    let height = frame.height as i32;

    let down = ORB_DOWN_LAYER.offset(frame.top, frame.height, frame.viewport_height);
    put_str(&mut layer.buf, width / 4, height / 4 + down.dy, "●", styles.social_link());

    let up = ORB_UP_LAYER.offset(frame.top, frame.height, frame.viewport_height);
    put_str(
        &mut layer.buf,
        width * 3 / 4,
        height * 3 / 4 + up.dy,
        "●",
        Style::default().fg(Color::Rgb(192, 132, 252)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, EMBEDDED_CONFIG};
    use crate::core::Theme;

    fn frame_text(layer: &Layer) -> String {
        let area = layer.area();
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(layer.buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_float_offset_cycle() {
        assert_eq!(float_offset(Duration::ZERO, 10.0, 1.0), 0);
        assert_eq!(float_offset(Duration::from_secs(5), 10.0, 1.0), -1);
        assert_eq!(float_offset(Duration::from_secs(10), 10.0, 1.0), 0);
        assert_eq!(float_offset(Duration::from_secs(3), 0.0, 1.0), 0);
    }

    #[test]
    fn test_hero_renders_greeting_and_button() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        let frame = HeroFrame {
            profile: &config.profile,
            width: 100,
            height: 30,
            top: 0,
            viewport_height: 30,
            elapsed: Duration::ZERO,
        };

        let layer = render_hero(&frame, &styles);
        let text = frame_text(&layer);
        assert!(text.contains("Welcome to my Portfolio"));
        assert!(text.contains("Let's Connect"));
        assert_eq!(layer.hits.len(), 1);
        assert_eq!(layer.hits[0].1, HitTarget::ConnectButton);
    }

    #[test]
    fn test_parallax_moves_text_with_scroll() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        let theme = Theme::default();
        let styles = Styles::new(&theme);
        let frame = |top| HeroFrame {
            profile: &config.profile,
            width: 100,
            height: 30,
            top,
            viewport_height: 30,
            elapsed: Duration::ZERO,
        };

        let at_rest = render_hero(&frame(0), &styles);
        let scrolled = render_hero(&frame(-30), &styles);
        assert!(scrolled.hits[0].0.y > at_rest.hits[0].0.y);
    }
}
