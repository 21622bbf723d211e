//! Player controller
//!
//! Velocity integration with friction and a speed cap, a dash state machine
//! that displaces the player by an exact fixed distance, and an
//! invulnerability window that gates every damage source. All timers are
//! absolute millisecond timestamps compared against the injected clock.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Trail history length for the dash motion blur
pub const TRAIL_LENGTH: usize = 12;

/// In-flight dash bookkeeping
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashState {
    /// Position when the dash was triggered
    pub origin: Vec2,
    /// Unit aim direction captured at trigger time
    pub dir: Vec2,
    /// Trigger timestamp (ms)
    pub started_at: f64,
}

/// The player combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_health: f32,
    /// Damage is a no-op until the clock passes this timestamp
    pub invulnerable_until: f64,
    /// Some while a dash is in flight
    pub dash: Option<DashState>,
    /// Timestamp of the last dash trigger, for the cooldown
    pub last_dash: f64,
    /// Recent positions while dashing, newest first (renderer-only)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
    /// Cosmetic dual-arrow aim marker, no physics effect
    pub double: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0))
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            invulnerable_until: 0.0,
            dash: None,
            // Far enough back that the first dash is available immediately
            last_dash: -DASH_COOLDOWN,
            trail: Vec::with_capacity(TRAIL_LENGTH),
            double: false,
        }
    }

    #[inline]
    pub fn is_invulnerable(&self, now: f64) -> bool {
        now < self.invulnerable_until
    }

    #[inline]
    pub fn is_dashing(&self) -> bool {
        self.dash.is_some()
    }

    /// Dash availability reflects the cooldown only, never invulnerability
    #[inline]
    pub fn can_dash(&self, now: f64) -> bool {
        self.dash.is_none() && now - self.last_dash >= DASH_COOLDOWN
    }

    /// Integrate movement input for one tick
    ///
    /// Input accelerates, friction decays toward zero, and the resulting
    /// speed magnitude never exceeds the cap. Ignored while dashing - the
    /// dash owns the position until it completes.
    pub fn integrate(&mut self, move_dir: Vec2, dt: f32) {
        if self.is_dashing() {
            return;
        }

        self.vel += move_dir * PLAYER_SPEED;
        self.vel *= PLAYER_FRICTION;

        let speed = self.vel.length();
        if speed > PLAYER_MAX_SPEED {
            self.vel = self.vel / speed * PLAYER_MAX_SPEED;
        }

        self.pos += self.vel * dt;
        self.clamp_to_arena();
    }

    /// Trigger a dash along `aim_dir` if the cooldown has elapsed
    pub fn try_dash(&mut self, aim_dir: Vec2, now: f64) -> bool {
        if !self.can_dash(now) {
            return false;
        }
        let dir = aim_dir.normalize_or_zero();
        if dir == Vec2::ZERO {
            return false;
        }
        self.dash = Some(DashState {
            origin: self.pos,
            dir,
            started_at: now,
        });
        self.last_dash = now;
        self.trail.clear();
        true
    }

    /// Advance an in-flight dash
    ///
    /// Position is interpolated along the captured direction and snapped to
    /// exactly DASH_DISTANCE from the origin on completion, independent of
    /// tick granularity. The arena clamp still applies afterwards.
    pub fn update_dash(&mut self, now: f64) {
        let Some(dash) = self.dash else {
            return;
        };

        let elapsed = now - dash.started_at;
        let t = (elapsed / DASH_DURATION).clamp(0.0, 1.0) as f32;
        self.pos = dash.origin + dash.dir * DASH_DISTANCE * t;
        self.record_trail();

        if elapsed >= DASH_DURATION {
            self.pos = dash.origin + dash.dir * DASH_DISTANCE;
            self.dash = None;
        }
        self.clamp_to_arena();
    }

    /// Apply damage; a no-op while invulnerable. Returns true on real damage.
    pub fn take_damage(&mut self, amount: f32, now: f64) -> bool {
        if self.is_invulnerable(now) {
            return false;
        }
        self.health -= amount;
        self.invulnerable_until = now + INVULNERABLE_TIME;
        true
    }

    /// Health fraction for the renderer
    #[inline]
    pub fn health_ratio(&self) -> f32 {
        (self.health / self.max_health).max(0.0)
    }

    fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }

    fn clamp_to_arena(&mut self) {
        self.pos.x = self.pos.x.clamp(self.radius, ARENA_WIDTH - self.radius);
        self.pos.y = self.pos.y.clamp(self.radius, ARENA_HEIGHT - self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friction_decays_velocity() {
        let mut player = Player::default();
        player.vel = Vec2::new(4.0, 0.0);
        player.integrate(Vec2::ZERO, 1.0);
        assert!((player.vel.x - 4.0 * PLAYER_FRICTION).abs() < 1e-5);

        for _ in 0..500 {
            player.integrate(Vec2::ZERO, 1.0);
        }
        assert!(player.vel.length() < 0.01, "velocity decays toward zero");
    }

    #[test]
    fn test_speed_cap() {
        let mut player = Player::default();
        for _ in 0..200 {
            player.integrate(Vec2::new(1.0, 0.0), 1.0);
        }
        assert!(player.vel.length() <= PLAYER_MAX_SPEED + 1e-4);
    }

    #[test]
    fn test_position_clamped() {
        let mut player = Player::new(Vec2::new(25.0, 300.0));
        for _ in 0..100 {
            player.integrate(Vec2::new(-1.0, 0.0), 1.0);
        }
        assert_eq!(player.pos.x, player.radius);
    }

    #[test]
    fn test_dash_exact_displacement() {
        let mut player = Player::new(Vec2::new(200.0, 300.0));
        let start = player.pos;
        assert!(player.try_dash(Vec2::new(1.0, 0.0), 0.0));

        // Walk the dash window in uneven steps; the end must land exactly
        for now in [10.0, 23.0, 41.0, 57.0] {
            player.update_dash(now);
        }
        assert!(!player.is_dashing());
        assert!((player.pos.distance(start) - DASH_DISTANCE).abs() < 1e-3);
        assert_eq!(player.pos.y, start.y);
    }

    #[test]
    fn test_dash_cooldown_gates_retrigger() {
        let mut player = Player::new(Vec2::new(200.0, 300.0));
        assert!(player.try_dash(Vec2::new(1.0, 0.0), 0.0));
        player.update_dash(60.0); // dash completes

        assert!(!player.can_dash(100.0));
        assert!(!player.try_dash(Vec2::new(0.0, 1.0), 100.0));
        assert!(player.can_dash(2000.0));
        assert!(player.try_dash(Vec2::new(0.0, 1.0), 2000.0));
    }

    #[test]
    fn test_dash_records_trail() {
        let mut player = Player::new(Vec2::new(200.0, 300.0));
        player.try_dash(Vec2::new(1.0, 0.0), 0.0);
        player.update_dash(10.0);
        player.update_dash(30.0);
        assert!(player.trail.len() >= 2);
        // Newest first
        assert!(player.trail[0].x > player.trail[1].x);
    }

    #[test]
    fn test_invulnerability_window() {
        let mut player = Player::default();
        assert!(player.take_damage(10.0, 1000.0));
        assert_eq!(player.health, PLAYER_MAX_HEALTH - 10.0);

        // Inside the window: every source is a no-op
        assert!(!player.take_damage(10.0, 1500.0));
        assert!(!player.take_damage(10.0, 1999.0));
        assert_eq!(player.health, PLAYER_MAX_HEALTH - 10.0);

        // Window elapsed
        assert!(player.take_damage(10.0, 2000.0));
        assert_eq!(player.health, PLAYER_MAX_HEALTH - 20.0);
    }

    #[test]
    fn test_can_dash_independent_of_invulnerability() {
        let mut player = Player::default();
        player.take_damage(10.0, 0.0);
        assert!(player.is_invulnerable(500.0));
        assert!(player.can_dash(500.0), "cooldown only, not invulnerability");
    }

    #[test]
    fn test_movement_ignored_while_dashing() {
        let mut player = Player::new(Vec2::new(200.0, 300.0));
        player.try_dash(Vec2::new(1.0, 0.0), 0.0);
        let vel = player.vel;
        player.integrate(Vec2::new(0.0, 1.0), 1.0);
        assert_eq!(player.vel, vel);
    }
}
