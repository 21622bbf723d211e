//! Delayed full-screen laser beams
//!
//! A laser is not a moving point: it telegraphs for `delay` ms after
//! `fire_time`, then damages along an infinite ray for `remain_time` ms
//! (the renderer uses the same window for its fade-out). It never expires
//! on hit; the player's invulnerability window is the only damage throttle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::point_ray_distance;

/// An enemy-fired beam with a charge delay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    /// Beam origin
    pub pos: Vec2,
    /// Beam heading in radians
    pub angle: f32,
    /// Timestamp the beam was triggered (ms)
    pub fire_time: f64,
    /// Telegraph/charge duration before damage is live (ms)
    pub delay: f64,
    /// Active duration after the delay (ms)
    pub remain_time: f64,
    /// Latch so the activation cue fires once
    pub sound_played: bool,
}

impl Laser {
    pub fn new(pos: Vec2, angle: f32, fire_time: f64, delay: f64, remain_time: f64) -> Self {
        Self {
            pos,
            angle,
            fire_time,
            delay,
            remain_time,
            sound_played: false,
        }
    }

    /// Whether the beam deals damage at `now` (past the charge, not faded)
    #[inline]
    pub fn is_live(&self, now: f64) -> bool {
        now - self.fire_time > self.delay && now <= self.fire_time + self.delay + self.remain_time
    }

    /// Whether the beam is done and can be removed
    #[inline]
    pub fn is_finished(&self, now: f64) -> bool {
        now > self.fire_time + self.delay + self.remain_time
    }

    /// Ray-vs-circle intersection for damage checks
    #[inline]
    pub fn hits_circle(&self, center: Vec2, radius: f32) -> bool {
        point_ray_distance(center, self.pos, self.angle) <= radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_window() {
        // Fired at 1000 with delay 300, active 2000
        let laser = Laser::new(Vec2::ZERO, 0.0, 1000.0, 300.0, 2000.0);
        assert!(!laser.is_live(1250.0), "still charging");
        assert!(laser.is_live(1350.0), "past the charge delay");
        assert!(laser.is_live(3300.0), "last live moment");
        assert!(!laser.is_live(3301.0), "faded out");
        assert!(laser.is_finished(3301.0));
    }

    #[test]
    fn test_hits_circle_along_ray() {
        let laser = Laser::new(Vec2::new(0.0, 0.0), 0.0, 0.0, 0.0, 1000.0);
        assert!(laser.hits_circle(Vec2::new(500.0, 10.0), 20.0));
        assert!(!laser.hits_circle(Vec2::new(500.0, 30.0), 20.0));
        // Behind the origin: no hit
        assert!(!laser.hits_circle(Vec2::new(-100.0, 0.0), 20.0));
    }
}
