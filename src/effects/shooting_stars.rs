// Shooting Stars
// Recurring spawn timer and the ephemeral events it produces

use rand::Rng;
use std::time::{Duration, Instant};

use super::sample;

/// Identity of a shooting star: milliseconds between mount and its scheduled creation
/// Strictly increasing in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShootingStarId(pub u64);

/// One ephemeral streak across the sky
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStarEvent {
    pub id: ShootingStarId,
    pub created_at: Instant,
    /// Start position, percentages of the viewport
    pub x: f32,
    pub y: f32,
    /// Travel direction in degrees, 0 = east, clockwise
    pub angle: f32,
}

impl ShootingStarEvent {
    pub(crate) fn random<R: Rng>(rng: &mut R, id: ShootingStarId, created_at: Instant) -> Self {
        Self {
            id,
            created_at,
            x: sample(rng, 0.0, 100.0),
            y: sample(rng, 0.0, 100.0),
            angle: sample(rng, 0.0, 360.0),
        }
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Animation progress in `[0, 1]` for a given lifetime
    pub fn progress(&self, now: Instant, lifetime: Duration) -> f32 {
        if lifetime.is_zero() {
            return 1.0;
        }
        (self.age(now).as_secs_f32() / lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        self.age(now) >= lifetime
    }
}

/// Fixed-period timer driven by explicit `poll` calls
///
/// Fire times are scheduled from the start instant, so they never drift with
/// late polls: a poll that arrives three periods late reports three fires.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    started_at: Option<Instant>,
    fired: u64,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            // A zero period would fire unboundedly on every poll
            period: period.max(Duration::from_millis(1)),
            started_at: None,
            fired: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start (or restart) the timer; the first fire is one period after `now`
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.fired = 0;
    }

    /// Stop the timer. Returns `true` if it was running.
    pub fn cancel(&mut self) -> bool {
        self.started_at.take().is_some()
    }

    /// Scheduled instants of every fire due at or before `now`, oldest first
    pub fn poll(&mut self, now: Instant) -> Vec<Instant> {
        let Some(started_at) = self.started_at else {
            return Vec::new();
        };

        let elapsed = now.saturating_duration_since(started_at);
        let due = (elapsed.as_nanos() / self.period.as_nanos()) as u64;

        let fires = (self.fired + 1..=due)
            .filter_map(|n| started_at.checked_add(self.fire_offset(n)))
            .collect();
        self.fired = self.fired.max(due);
        fires
    }

    /// Offset of the `n`th fire from the start, saturating instead of wrapping
    fn fire_offset(&self, n: u64) -> Duration {
        let nanos = self.period.as_nanos().saturating_mul(n as u128);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
