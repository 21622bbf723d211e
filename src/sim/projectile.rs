//! Projectile kinematics and bounce-limited wall reflection
//!
//! Projectiles travel in a straight line, reflect elastically off the room
//! walls up to a bounce cap, and expire on overflow, out-of-bounds exit, or
//! collision consumption. Heading is stored as an angle so wall reflection
//! can never change the speed magnitude.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::normalize_angle;

/// A moving projectile (player- or enemy-owned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Heading in radians, normalized to [-π, π)
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
    /// Wall reflections so far (monotonically non-decreasing)
    pub bounces: u32,
    /// Enemy-owned projectiles harm only the player; player-owned only enemies
    pub is_enemy: bool,
    /// Set on bounce-cap overflow, out-of-bounds exit, or consumption
    pub expired: bool,
}

impl Projectile {
    /// Fire a new projectile from `origin` along `angle`
    pub fn fire(id: u32, origin: Vec2, angle: f32, speed: f32, radius: f32, is_enemy: bool) -> Self {
        Self {
            id,
            pos: origin,
            angle: normalize_angle(angle),
            speed,
            radius,
            bounces: 0,
            is_enemy,
            expired: false,
        }
    }

    /// Current velocity vector
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed
    }

    /// Advance by one step, reflecting off walls
    ///
    /// Each axis is checked independently so a projectile striking a corner
    /// reflects both components in the same tick (two bounces). Reflection
    /// only changes direction; the speed magnitude is untouched.
    pub fn advance(&mut self, dt: f32) {
        if self.expired {
            return;
        }

        self.pos += self.velocity() * dt;

        let min_x = self.radius;
        let max_x = ARENA_WIDTH - self.radius;
        if self.pos.x < min_x || self.pos.x > max_x {
            // Mirror the horizontal component
            self.angle = normalize_angle(std::f32::consts::PI - self.angle);
            self.pos.x = self.pos.x.clamp(min_x, max_x);
            self.bounces += 1;
        }

        let min_y = self.radius;
        let max_y = ARENA_HEIGHT - self.radius;
        if self.pos.y < min_y || self.pos.y > max_y {
            // Mirror the vertical component
            self.angle = normalize_angle(-self.angle);
            self.pos.y = self.pos.y.clamp(min_y, max_y);
            self.bounces += 1;
        }

        if self.bounces > MAX_BOUNCES {
            self.expired = true;
        }
    }

    /// Consume on collision (no further motion or damage)
    #[inline]
    pub fn consume(&mut self) {
        self.expired = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_fire_starts_with_zero_bounces() {
        let p = Projectile::fire(1, Vec2::new(300.0, 300.0), 0.5, PROJECTILE_SPEED, PROJECTILE_RADIUS, false);
        assert_eq!(p.bounces, 0);
        assert!(!p.expired);
    }

    #[test]
    fn test_right_wall_bounce_reverses_x() {
        // Moving right at x=595 in a 600-wide arena (radius 5)
        let mut p = Projectile::fire(1, Vec2::new(595.0, 300.0), 0.0, 5.0, 5.0, false);
        let speed_before = p.velocity().length();
        p.advance(1.0);

        assert_eq!(p.bounces, 1);
        assert!(p.velocity().x < 0.0, "x-velocity must reverse sign");
        assert!((p.velocity().length() - speed_before).abs() < 1e-4);
        assert!(p.pos.x <= 595.0);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut p = Projectile::fire(1, Vec2::new(594.0, 594.0), FRAC_PI_4, 10.0, 5.0, false);
        let vel_before = p.velocity();
        p.advance(1.0);

        assert_eq!(p.bounces, 2);
        let vel_after = p.velocity();
        assert!(vel_before.x > 0.0 && vel_after.x < 0.0);
        assert!(vel_before.y > 0.0 && vel_after.y < 0.0);
    }

    #[test]
    fn test_bounce_cap_expires() {
        let mut p = Projectile::fire(1, Vec2::new(300.0, 300.0), 0.0, 5.0, 5.0, false);
        p.bounces = MAX_BOUNCES;
        // Drive it into the right wall for one more bounce
        p.pos = Vec2::new(595.0, 300.0);
        p.advance(1.0);
        assert_eq!(p.bounces, MAX_BOUNCES + 1);
        assert!(p.expired);
    }

    #[test]
    fn test_expired_projectile_does_not_move() {
        let mut p = Projectile::fire(1, Vec2::new(300.0, 300.0), 0.0, 5.0, 5.0, false);
        p.consume();
        let pos = p.pos;
        p.advance(1.0);
        assert_eq!(p.pos, pos);
    }

    proptest! {
        #[test]
        fn prop_bounce_preserves_speed(
            x in 10.0f32..590.0,
            y in 10.0f32..590.0,
            angle in -PI..PI,
            speed in 1.0f32..20.0,
        ) {
            let mut p = Projectile::fire(1, Vec2::new(x, y), angle, speed, 5.0, false);
            for _ in 0..64 {
                p.advance(1.0);
                prop_assert!((p.velocity().length() - speed).abs() < 1e-3);
            }
        }

        #[test]
        fn prop_bounces_monotone_and_position_bounded(
            x in 10.0f32..590.0,
            y in 10.0f32..590.0,
            angle in -PI..PI,
        ) {
            let mut p = Projectile::fire(1, Vec2::new(x, y), angle, 7.0, 5.0, false);
            let mut last = 0;
            for _ in 0..256 {
                p.advance(1.0);
                prop_assert!(p.bounces >= last);
                last = p.bounces;
                prop_assert!(p.pos.x >= p.radius - 1e-3 && p.pos.x <= ARENA_WIDTH - p.radius + 1e-3);
                prop_assert!(p.pos.y >= p.radius - 1e-3 && p.pos.y <= ARENA_HEIGHT - p.radius + 1e-3);
                if p.expired {
                    break;
                }
            }
        }
    }
}
