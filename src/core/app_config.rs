// Effects & Theme Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use ratatui::style::Color;
use serde::Deserialize;
use std::time::Duration;

use super::error::{PortfolioError, PortfolioResult};

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Tuning for the star field and the shooting-star stream
/// Runtime YAML overrides individual fields; missing fields keep the compiled value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Number of static stars generated per mount
    pub star_count: usize,

    /// Star size bounds in pixels, sampled from `[min, max)`
    pub star_size_min: f32,
    pub star_size_max: f32,

    /// Base opacity bounds, sampled from `[min, max)`
    pub opacity_min: f32,
    pub opacity_max: f32,

    /// Twinkle period bounds in seconds, sampled from `[min, max)`
    pub twinkle_duration_min: f32,
    pub twinkle_duration_max: f32,

    /// Twinkle delay in seconds, sampled from `[0, max)`
    pub twinkle_delay_max: f32,

    /// Period of the shooting-star timer
    pub spawn_interval_ms: u64,

    /// Visual lifetime of one shooting star; expired events are dropped
    pub shooting_star_lifetime_ms: u64,

    /// Upper bound on simultaneously active shooting stars (oldest evicted)
    pub max_active_shooting_stars: usize,
}

impl EffectsConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn shooting_star_lifetime(&self) -> Duration {
        Duration::from_millis(self.shooting_star_lifetime_ms)
    }

    /// Check that every range is ordered and every period is usable
    pub fn validate(&self) -> PortfolioResult<()> {
        check_range("star_size", self.star_size_min, self.star_size_max)?;
        check_range("opacity", self.opacity_min, self.opacity_max)?;
        check_range("twinkle_duration", self.twinkle_duration_min, self.twinkle_duration_max)?;
        check_range("twinkle_delay", 0.0, self.twinkle_delay_max)?;

        if self.star_size_min <= 0.0 {
            return Err(PortfolioError::InvalidValue {
                field: "star_size_min",
                reason: "must be positive".to_string(),
            });
        }
        if self.opacity_min < 0.0 {
            return Err(PortfolioError::InvalidValue {
                field: "opacity_min",
                reason: "must not be negative".to_string(),
            });
        }
        if self.twinkle_duration_min <= 0.0 {
            return Err(PortfolioError::InvalidValue {
                field: "twinkle_duration_min",
                reason: "must be positive".to_string(),
            });
        }
        if self.opacity_max > 1.0 {
            return Err(PortfolioError::InvalidValue {
                field: "opacity_max",
                reason: "must not exceed 1.0".to_string(),
            });
        }
        if self.star_count == 0 {
            return Err(PortfolioError::InvalidValue {
                field: "star_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(PortfolioError::InvalidValue {
                field: "spawn_interval_ms",
                reason: "must be at least 1 ms".to_string(),
            });
        }
        if self.shooting_star_lifetime_ms == 0 {
            return Err(PortfolioError::InvalidValue {
                field: "shooting_star_lifetime_ms",
                reason: "must be at least 1 ms".to_string(),
            });
        }
        if self.max_active_shooting_stars == 0 {
            return Err(PortfolioError::InvalidValue {
                field: "max_active_shooting_stars",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn check_range(field: &'static str, min: f32, max: f32) -> PortfolioResult<()> {
    if min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(PortfolioError::InvalidRange {
            field,
            min: min as f64,
            max: max as f64,
        })
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            star_count: compiled::STAR_COUNT,
            star_size_min: compiled::STAR_SIZE_MIN,
            star_size_max: compiled::STAR_SIZE_MAX,
            opacity_min: compiled::OPACITY_MIN,
            opacity_max: compiled::OPACITY_MAX,
            twinkle_duration_min: compiled::TWINKLE_DURATION_MIN,
            twinkle_duration_max: compiled::TWINKLE_DURATION_MAX,
            twinkle_delay_max: compiled::TWINKLE_DELAY_MAX,
            spawn_interval_ms: compiled::SPAWN_INTERVAL_MS,
            shooting_star_lifetime_ms: compiled::SHOOTING_STAR_LIFETIME_MS,
            max_active_shooting_stars: compiled::MAX_ACTIVE_SHOOTING_STARS,
        }
    }
}

/// Page colors, given as `#rrggbb` strings in YAML
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "de_hex_color")]
    pub background: Color,
    #[serde(deserialize_with = "de_hex_color")]
    pub accent: Color,
    #[serde(deserialize_with = "de_hex_color")]
    pub panel: Color,
    #[serde(deserialize_with = "de_hex_color")]
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: rgb(compiled::BACKGROUND),
            accent: rgb(compiled::ACCENT),
            panel: rgb(compiled::PANEL),
            highlight: rgb(compiled::HIGHLIGHT),
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Parse `#rrggbb` (leading `#` optional)
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let packed = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb(
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    ))
}

fn de_hex_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_hex(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{}'", raw)))
}
