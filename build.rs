// Build script - reads config.yaml at compile time and generates effect defaults
// This allows tuning the star field during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const STAR_COUNT: usize = {star_count};
pub const STAR_SIZE_MIN: f32 = {star_size_min:?};
pub const STAR_SIZE_MAX: f32 = {star_size_max:?};
pub const OPACITY_MIN: f32 = {opacity_min:?};
pub const OPACITY_MAX: f32 = {opacity_max:?};
pub const TWINKLE_DURATION_MIN: f32 = {twinkle_duration_min:?};
pub const TWINKLE_DURATION_MAX: f32 = {twinkle_duration_max:?};
pub const TWINKLE_DELAY_MAX: f32 = {twinkle_delay_max:?};
pub const SPAWN_INTERVAL_MS: u64 = {spawn_interval_ms};
pub const SHOOTING_STAR_LIFETIME_MS: u64 = {shooting_star_lifetime_ms};
pub const MAX_ACTIVE_SHOOTING_STARS: usize = {max_active_shooting_stars};

// Theme colors (RGB tuples)
pub const BACKGROUND: (u8, u8, u8) = {background};
pub const ACCENT: (u8, u8, u8) = {accent};
pub const PANEL: (u8, u8, u8) = {panel};
pub const HIGHLIGHT: (u8, u8, u8) = {highlight};
"#,
        star_count = config.star_count,
        star_size_min = config.star_size_min,
        star_size_max = config.star_size_max,
        opacity_min = config.opacity_min,
        opacity_max = config.opacity_max,
        twinkle_duration_min = config.twinkle_duration_min,
        twinkle_duration_max = config.twinkle_duration_max,
        twinkle_delay_max = config.twinkle_delay_max,
        spawn_interval_ms = config.spawn_interval_ms,
        shooting_star_lifetime_ms = config.shooting_star_lifetime_ms,
        max_active_shooting_stars = config.max_active_shooting_stars,
        background = rgb_tuple(config.background),
        accent = rgb_tuple(config.accent),
        panel = rgb_tuple(config.panel),
        highlight = rgb_tuple(config.highlight),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    star_count: usize,
    star_size_min: f32,
    star_size_max: f32,
    opacity_min: f32,
    opacity_max: f32,
    twinkle_duration_min: f32,
    twinkle_duration_max: f32,
    twinkle_delay_max: f32,
    spawn_interval_ms: u64,
    shooting_star_lifetime_ms: u64,
    max_active_shooting_stars: usize,
    background: (u8, u8, u8),
    accent: (u8, u8, u8),
    panel: (u8, u8, u8),
    highlight: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            star_count: 100,
            star_size_min: 1.0,
            star_size_max: 3.0,
            opacity_min: 0.3,
            opacity_max: 1.0,
            twinkle_duration_min: 2.0,
            twinkle_duration_max: 5.0,
            twinkle_delay_max: 2.0,
            spawn_interval_ms: 5000,
            shooting_star_lifetime_ms: 1000,
            max_active_shooting_stars: 16,
            background: (26, 11, 46),   // #1a0b2e
            accent: (126, 34, 206),     // #7e22ce
            panel: (59, 7, 100),        // #3b0764
            highlight: (147, 197, 253), // #93c5fd
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_effects = false;
    let mut in_theme = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Top-level keys start a new section
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_effects = trimmed.starts_with("effects:");
            in_theme = trimmed.starts_with("theme:");
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        if in_effects {
            match key {
                "star_count" => config.star_count = value.parse().unwrap_or(config.star_count),
                "star_size_min" => config.star_size_min = value.parse().unwrap_or(config.star_size_min),
                "star_size_max" => config.star_size_max = value.parse().unwrap_or(config.star_size_max),
                "opacity_min" => config.opacity_min = value.parse().unwrap_or(config.opacity_min),
                "opacity_max" => config.opacity_max = value.parse().unwrap_or(config.opacity_max),
                "twinkle_duration_min" => config.twinkle_duration_min = value.parse().unwrap_or(config.twinkle_duration_min),
                "twinkle_duration_max" => config.twinkle_duration_max = value.parse().unwrap_or(config.twinkle_duration_max),
                "twinkle_delay_max" => config.twinkle_delay_max = value.parse().unwrap_or(config.twinkle_delay_max),
                "spawn_interval_ms" => config.spawn_interval_ms = value.parse().unwrap_or(config.spawn_interval_ms),
                "shooting_star_lifetime_ms" => config.shooting_star_lifetime_ms = value.parse().unwrap_or(config.shooting_star_lifetime_ms),
                "max_active_shooting_stars" => config.max_active_shooting_stars = value.parse().unwrap_or(config.max_active_shooting_stars),
                _ => {}
            }
        } else if in_theme {
            match key {
                "background" => config.background = parse_hex_color(value).unwrap_or(config.background),
                "accent" => config.accent = parse_hex_color(value).unwrap_or(config.accent),
                "panel" => config.panel = parse_hex_color(value).unwrap_or(config.panel),
                "highlight" => config.highlight = parse_hex_color(value).unwrap_or(config.highlight),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments, but keep a quoted hex color intact
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() != 6 {
        return None;
    }

    Some((
        u8::from_str_radix(&s[0..2], 16).ok()?,
        u8::from_str_radix(&s[2..4], 16).ok()?,
        u8::from_str_radix(&s[4..6], 16).ok()?,
    ))
}

fn rgb_tuple((r, g, b): (u8, u8, u8)) -> String {
    format!("({}, {}, {})", r, g, b)
}
