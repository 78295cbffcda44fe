// Star Field Controller
// Owns the static star field and the shooting-star stream for one mount

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

use super::shooting_stars::{IntervalTimer, ShootingStarEvent, ShootingStarId};
use super::starfield::{generate_stars, StarPoint};
use crate::core::EffectsConfig;

/// Lifecycle: `mount` generates the field and starts the spawn timer,
/// `tick` advances time, `teardown` cancels the timer and releases the field.
/// The owner calls `mount`/`teardown` explicitly.
#[derive(Debug)]
pub struct StarFieldController<R: Rng = StdRng> {
    config: EffectsConfig,
    rng: R,
    timer: IntervalTimer,
    mounted_at: Option<Instant>,
    stars: Vec<StarPoint>,
    shooting_stars: VecDeque<ShootingStarEvent>,
    spawned_total: u64,
}

impl StarFieldController<StdRng> {
    /// Controller backed by an OS-seeded generator
    pub fn from_os_rng(config: EffectsConfig) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }

    /// Controller backed by a fixed seed, for reproducible fields
    pub fn seeded(config: EffectsConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StarFieldController<R> {
    pub fn new(config: EffectsConfig, rng: R) -> Self {
        let timer = IntervalTimer::new(config.spawn_interval());
        Self {
            config,
            rng,
            timer,
            mounted_at: None,
            stars: Vec::new(),
            shooting_stars: VecDeque::new(),
            spawned_total: 0,
        }
    }

    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }

    /// Time since mount, zero when not mounted
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.mounted_at
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or_default()
    }

    /// Generate the field and start spawning. No-op when already mounted.
    pub fn mount(&mut self, now: Instant) -> bool {
        if self.is_mounted() {
            trace!("star field already mounted; skipping regeneration");
            return false;
        }

        self.stars = generate_stars(&mut self.rng, &self.config);
        self.shooting_stars.clear();
        self.spawned_total = 0;
        self.mounted_at = Some(now);
        self.timer.start(now);

        info!(
            stars = self.stars.len(),
            interval_ms = self.config.spawn_interval_ms,
            "star field mounted"
        );
        true
    }

    /// Advance to `now`: spawn one event per elapsed timer period, then drop
    /// expired events. Returns the number of events spawned.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(mounted_at) = self.mounted_at else {
            return 0;
        };

        let fires = self.timer.poll(now);
        for created_at in &fires {
            let id = ShootingStarId(created_at.saturating_duration_since(mounted_at).as_millis() as u64);
            let event = ShootingStarEvent::random(&mut self.rng, id, *created_at);
            debug!(id = id.0, x = event.x, y = event.y, angle = event.angle, "shooting star spawned");
            self.shooting_stars.push_back(event);
            self.spawned_total += 1;
        }

        self.expire(now);
        fires.len()
    }

    /// Cancel the spawn timer and release the field. Returns `true` only for
    /// the call that actually cancelled the timer.
    pub fn teardown(&mut self) -> bool {
        let cancelled = self.timer.cancel();
        if cancelled {
            info!(spawned = self.spawned_total, "star field torn down");
        }
        self.mounted_at = None;
        self.stars.clear();
        self.shooting_stars.clear();
        cancelled
    }

    pub fn stars(&self) -> &[StarPoint] {
        &self.stars
    }

    /// Active shooting stars, oldest first
    pub fn shooting_stars(&self) -> impl Iterator<Item = &ShootingStarEvent> {
        self.shooting_stars.iter()
    }

    pub fn active_shooting_stars(&self) -> usize {
        self.shooting_stars.len()
    }

    /// Events spawned since the current mount, expired ones included
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    fn expire(&mut self, now: Instant) {
        let lifetime = self.config.shooting_star_lifetime();
        while self
            .shooting_stars
            .front()
            .is_some_and(|event| event.is_expired(now, lifetime))
        {
            self.shooting_stars.pop_front();
        }

        let cap = self.config.max_active_shooting_stars.max(1);
        while self.shooting_stars.len() > cap {
            self.shooting_stars.pop_front();
        }
    }
}
