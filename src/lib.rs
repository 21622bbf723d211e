//! Pixel Raider - top-down arcade shooter combat core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, enemies, projectiles, lasers)
//! - `tuning`: Data-driven combat balance
//!
//! Rendering, audio, input devices, and the room/economy lifecycle are
//! external collaborators: they read the entity snapshot at the end of a
//! tick and feed normalized intents back in. Nothing in here touches a
//! clock or an RNG that is not injected.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (square room)
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 1.0;
    pub const PLAYER_MAX_SPEED: f32 = 5.0;
    pub const PLAYER_FRICTION: f32 = 0.96;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Damage immunity window after a hit (ms)
    pub const INVULNERABLE_TIME: f64 = 1000.0;

    /// Dash tuning
    pub const DASH_COOLDOWN: f64 = 2000.0;
    pub const DASH_DISTANCE: f32 = 100.0;
    pub const DASH_DURATION: f64 = 50.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Wall reflections before a projectile expires
    pub const MAX_BOUNCES: u32 = 10;
    /// Soft cap on concurrent player projectiles (firing-trigger throttle)
    pub const BULLET_LIMIT: usize = 5;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 1.7;
    pub const ENEMY_RADIUS: f32 = 20.0;
    pub const ENEMY_PROJECTILE_SPEED: f32 = 6.0;

    /// Laser beam timing (ms)
    pub const LASER_CHARGE_TIME: f64 = 300.0;
    pub const LASER_ACTIVE_TIME: f64 = 2000.0;
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Signed modular difference `a - b`, normalized to [-π, π)
///
/// Safe across the ±π seam, unlike naive subtraction.
#[inline]
pub fn angle_diff(a: f32, b: f32) -> f32 {
    normalize_angle(a - b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_range() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-5);
        assert!((normalize_angle(-3.0 * PI) - (-PI)).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn test_angle_diff_wraparound() {
        // Two angles straddling the ±π seam are actually close
        let a = PI - 0.1;
        let b = -PI + 0.1;
        assert!(angle_diff(a, b).abs() < 0.21);
        // Naive subtraction would report ~2π
        assert!((a - b).abs() > 6.0);
    }

    #[test]
    fn test_angle_diff_sign() {
        assert!(angle_diff(0.5, 0.2) > 0.0);
        assert!(angle_diff(0.2, 0.5) < 0.0);
    }
}
