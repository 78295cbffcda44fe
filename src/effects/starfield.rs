// Star Field
// Static decorative point lights, generated once per mount

use rand::Rng;
use std::time::Duration;

use super::sample;
use crate::core::EffectsConfig;

/// One twinkling star. Positions are percentages of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPoint {
    /// Horizontal position, 0-100
    pub x: f32,
    /// Vertical position, 0-100
    pub y: f32,
    /// Size in pixels
    pub size: f32,
    /// Base opacity before the twinkle curve is applied
    pub opacity: f32,
    /// Twinkle period in seconds
    pub duration: f32,
    /// Twinkle start delay in seconds
    pub delay: f32,
}

impl StarPoint {
    /// Brightness at `elapsed` since mount, in `[0, 1]`
    ///
    /// The twinkle curve goes 0.3 → 1.0 → 0.3 over one period and holds at
    /// 0.3 until the delay has passed.
    pub fn brightness_at(&self, elapsed: Duration) -> f32 {
        let t = elapsed.as_secs_f32() - self.delay;
        let twinkle = if t <= 0.0 || self.duration <= 0.0 {
            0.3
        } else {
            let phase = (t % self.duration) / self.duration;
            // ease-in-out approximated with a cosine
            let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
            0.3 + 0.7 * wave
        };
        (self.opacity * twinkle).clamp(0.0, 1.0)
    }
}

/// Generate `config.star_count` stars with independently randomized attributes
pub fn generate_stars<R: Rng>(rng: &mut R, config: &EffectsConfig) -> Vec<StarPoint> {
    (0..config.star_count)
        .map(|_| StarPoint {
            x: sample(rng, 0.0, 100.0),
            y: sample(rng, 0.0, 100.0),
            size: sample(rng, config.star_size_min, config.star_size_max),
            opacity: sample(rng, config.opacity_min, config.opacity_max),
            duration: sample(rng, config.twinkle_duration_min, config.twinkle_duration_max),
            delay: sample(rng, 0.0, config.twinkle_delay_max),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> EffectsConfig {
        EffectsConfig {
            star_count: 100,
            star_size_min: 1.0,
            star_size_max: 3.0,
            opacity_min: 0.3,
            opacity_max: 1.0,
            twinkle_duration_min: 2.0,
            twinkle_duration_max: 5.0,
            twinkle_delay_max: 2.0,
            ..EffectsConfig::default()
        }
    }

    #[test]
    fn test_generates_exact_count_within_bounds() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let stars = generate_stars(&mut rng, &config());
            assert_eq!(stars.len(), 100);

            for star in &stars {
                assert!((0.0..=100.0).contains(&star.x));
                assert!((0.0..=100.0).contains(&star.y));
                assert!(star.size >= 1.0 && star.size < 3.0);
                assert!(star.opacity >= 0.3 && star.opacity < 1.0);
                assert!(star.duration >= 2.0 && star.duration < 5.0);
                assert!(star.delay >= 0.0 && star.delay < 2.0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = generate_stars(&mut StdRng::seed_from_u64(42), &config());
        let b = generate_stars(&mut StdRng::seed_from_u64(42), &config());
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges_do_not_panic() {
        let config = EffectsConfig {
            star_count: 5,
            star_size_min: 2.0,
            star_size_max: 2.0,
            twinkle_delay_max: 0.0,
            ..config()
        };
        let stars = generate_stars(&mut StdRng::seed_from_u64(3), &config);
        assert!(stars.iter().all(|s| s.size == 2.0 && s.delay == 0.0));
    }

    #[test]
    fn test_overflowing_ranges_do_not_panic() {
        let config = EffectsConfig {
            star_count: 5,
            twinkle_duration_min: -3.0e38,
            twinkle_duration_max: 3.0e38,
            ..config()
        };
        let stars = generate_stars(&mut StdRng::seed_from_u64(3), &config);
        assert_eq!(stars.len(), 5);
        assert!(stars.iter().all(|s| s.duration == -3.0e38));
    }

    #[test]
    fn test_brightness_follows_twinkle_curve() {
        let star = StarPoint {
            x: 50.0,
            y: 50.0,
            size: 2.0,
            opacity: 1.0,
            duration: 4.0,
            delay: 1.0,
        };

        // Before the delay elapses the star sits at the dim end
        assert!((star.brightness_at(Duration::from_millis(500)) - 0.3).abs() < 1e-4);
        // Half a period after the delay it peaks
        assert!((star.brightness_at(Duration::from_secs(3)) - 1.0).abs() < 1e-4);
        // A full period later it is dim again
        assert!((star.brightness_at(Duration::from_secs(5)) - 0.3).abs() < 1e-4);
    }
}
