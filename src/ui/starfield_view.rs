// Star Field View
// Maps the controller's stars and shooting stars onto terminal cells

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::time::Instant;

use super::helpers::grey;
use crate::effects::{ShootingStarEvent, StarFieldController, StarPoint};

/// Distance a shooting star travels over its lifetime, in cells
const TRAVEL_COLS: f32 = 24.0;
const TRAVEL_ROWS: f32 = 12.0;

/// Cells drawn behind the head of a shooting star
const TRAIL_LENGTH: usize = 3;

/// Render the whole field across `area`
pub fn render_starfield(buf: &mut Buffer, area: Rect, field: &StarFieldController, now: Instant) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let elapsed = field.elapsed(now);
    for star in field.stars() {
        let (x, y) = to_cell(area, star.x, star.y);
        let brightness = star.brightness_at(elapsed);
        set_cell(buf, area, x, y, star_glyph(star), grey(brightness));
    }

    let lifetime = field.config().shooting_star_lifetime();
    for event in field.shooting_stars() {
        render_shooting_star(buf, area, event, event.progress(now, lifetime));
    }
}

fn render_shooting_star(buf: &mut Buffer, area: Rect, event: &ShootingStarEvent, progress: f32) {
    // ease-out: fast start, slow finish
    let eased = 1.0 - (1.0 - progress) * (1.0 - progress);
    let opacity = 1.0 - progress;
    let (dir_x, dir_y) = direction(event.angle);
    let glyph = streak_glyph(event.angle);

    let (start_x, start_y) = to_cell(area, event.x, event.y);
    let head_x = start_x as f32 + dir_x * TRAVEL_COLS * eased;
    let head_y = start_y as f32 + dir_y * TRAVEL_ROWS * eased;

    for step in (0..=TRAIL_LENGTH).rev() {
        let x = (head_x - dir_x * step as f32).round() as i32;
        let y = (head_y - dir_y * step as f32 * 0.5).round() as i32;
        let fade = 1.0 - step as f32 / (TRAIL_LENGTH + 1) as f32;
        let symbol = if step == 0 { "*" } else { glyph };
        set_cell(buf, area, x, y, symbol, grey(opacity * fade));
    }
}

/// Percent position → absolute cell
fn to_cell(area: Rect, x_percent: f32, y_percent: f32) -> (i32, i32) {
    let x = area.x as f32 + (x_percent / 100.0) * area.width.saturating_sub(1) as f32;
    let y = area.y as f32 + (y_percent / 100.0) * area.height.saturating_sub(1) as f32;
    (x.round() as i32, y.round() as i32)
}

fn set_cell(buf: &mut Buffer, area: Rect, x: i32, y: i32, symbol: &str, color: ratatui::style::Color) {
    if x < area.left() as i32 || x >= area.right() as i32 || y < area.top() as i32 || y >= area.bottom() as i32 {
        return;
    }
    if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        cell.set_style(Style::default().fg(color));
    }
}

pub fn star_glyph(star: &StarPoint) -> &'static str {
    if star.size < 1.7 {
        "·"
    } else if star.size < 2.4 {
        "•"
    } else {
        "✦"
    }
}

/// Unit direction for an angle in degrees (0 = east, clockwise on screen)
fn direction(angle: f32) -> (f32, f32) {
    let radians = angle.to_radians();
    (radians.cos(), radians.sin())
}

fn streak_glyph(angle: f32) -> &'static str {
    let a = angle.rem_euclid(180.0);
    if !(22.5..157.5).contains(&a) {
        "─"
    } else if a < 67.5 {
        "╲"
    } else if a < 112.5 {
        "│"
    } else {
        "╱"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EffectsConfig;
    use std::time::Duration;

    #[test]
    fn test_corners_map_inside_area() {
        let area = Rect::new(2, 3, 10, 5);
        assert_eq!(to_cell(area, 0.0, 0.0), (2, 3));
        assert_eq!(to_cell(area, 100.0, 100.0), (11, 7));
    }

    #[test]
    fn test_streak_glyphs() {
        assert_eq!(streak_glyph(0.0), "─");
        assert_eq!(streak_glyph(45.0), "╲");
        assert_eq!(streak_glyph(90.0), "│");
        assert_eq!(streak_glyph(135.0), "╱");
        assert_eq!(streak_glyph(180.0), "─");
        assert_eq!(streak_glyph(225.0), "╲");
    }

    #[test]
    fn test_render_draws_every_star_inside_area() {
        let config = EffectsConfig {
            star_count: 40,
            ..EffectsConfig::default()
        };
        let mut field = StarFieldController::seeded(config, 11);
        let t0 = Instant::now();
        field.mount(t0);
        field.tick(t0 + field.config().spawn_interval());

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        render_starfield(&mut buf, area, &field, t0 + field.config().spawn_interval() + Duration::from_millis(200));

        let drawn = buf.content().iter().filter(|c| c.symbol() != " ").count();
        assert!(drawn > 0);
        for star in field.stars() {
            let (x, y) = to_cell(area, star.x, star.y);
            assert!(area.contains(ratatui::layout::Position::new(x as u16, y as u16)));
        }
    }

    #[test]
    fn test_empty_area_is_noop() {
        let field = StarFieldController::seeded(EffectsConfig::default(), 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        render_starfield(&mut buf, Rect::new(0, 0, 0, 0), &field, Instant::now());
    }
}
