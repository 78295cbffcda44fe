// Ambient visual effects
// Star field generation, shooting-star lifecycle and parallax transforms

pub mod controller;
pub mod parallax;
pub mod shooting_stars;
pub mod starfield;

use rand::distr::{Distribution, Uniform};
use rand::Rng;

pub use controller::StarFieldController;
pub use parallax::{ParallaxLayer, ParallaxOffset};
pub use shooting_stars::{IntervalTimer, ShootingStarEvent, ShootingStarId};
pub use starfield::{generate_stars, StarPoint};

/// Sample uniformly from `[min, max)`. Ranges `Uniform` rejects (empty,
/// inverted, non-finite bounds or width) yield `min`.
pub(crate) fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    match Uniform::<f32>::new(min, max) {
        Ok(range) => range.sample(rng),
        Err(_) => min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample(&mut rng, 2.0, 2.0), 2.0);
        assert_eq!(sample(&mut rng, 5.0, 1.0), 5.0);
    }

    #[test]
    fn test_sample_overflowing_width_yields_min() {
        let mut rng = StdRng::seed_from_u64(1);
        // Both bounds finite, but max - min overflows to infinity
        assert_eq!(sample(&mut rng, -3.0e38, 3.0e38), -3.0e38);
        assert!(sample(&mut rng, f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_sample_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = sample(&mut rng, 2.0, 5.0);
            assert!((2.0..5.0).contains(&v));
        }
    }
}
