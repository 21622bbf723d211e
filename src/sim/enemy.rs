//! Enemy behavior model
//!
//! One tagged variant (`EnemyKind`) over a shared record instead of the
//! class hierarchy this kind of game usually grows: variant-specific data
//! (the shield arc) rides along as an optional payload, and `update`
//! dispatches on the tag. Positioning is stateless - seek/hold/retreat is
//! derived every tick from the current distance to the player, nothing is
//! stored that could drift out of sync with the position.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{angle_to, distance, reflect_angle};
use super::laser::Laser;
use super::projectile::Projectile;
use crate::angle_diff;
use crate::consts::*;

/// Enemy behavior variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Melee chaser, no ranged attack
    Regular,
    /// Keeps distance and fires aimed projectiles
    Attacker,
    /// Attacker with a player-facing shield arc that reflects bullets
    Shielded,
    /// Shielded variant whose reflections always fully reverse the bullet
    Reflector,
    /// Fires telegraphed full-screen beams instead of projectiles
    Laser,
}

impl EnemyKind {
    /// Parse a kind name; unknown names degrade to `Regular`
    ///
    /// The fallback is deliberate: room data may reference kinds this build
    /// does not know, and a base enemy is better than a failed room load.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "attacker" => Self::Attacker,
            "shielded" => Self::Shielded,
            "reflector" => Self::Reflector,
            "laser" => Self::Laser,
            _ => Self::Regular,
        }
    }
}

/// Coin reward tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinTier {
    Bronze,
    Silver,
    Gold,
}

/// Tiered reward realized when an enemy deactivates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinDrop {
    pub tier: CoinTier,
    pub value: u32,
}

/// Shield payload for `Shielded`/`Reflector`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shield {
    /// Facing angle, re-aimed at the player every tick
    pub angle: f32,
    /// Full angular width of the arc (±arc/2 around `angle`)
    pub arc: f32,
}

/// What an enemy asked the engine to spawn this tick
#[derive(Debug, Clone)]
pub enum SpawnRequest {
    Projectile {
        origin: Vec2,
        angle: f32,
        speed: f32,
        radius: f32,
    },
    Laser(Laser),
}

/// An enemy combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    /// False once health crosses 0; the enemy stays in the collection but
    /// is excluded from all further simulation (logical deletion)
    pub is_active: bool,
    /// Standoff radius: seek beyond it, retreat inside `standoff - 5`
    pub standoff: f32,
    pub coin_drop: CoinDrop,
    /// Drops a door key on death
    pub has_key: bool,
    /// Drops a health pickup on death
    pub healing: bool,
    /// Ranged-attack cooldown in ms (0 = no ranged attack)
    pub attack_cooldown: f64,
    pub last_attack: f64,
    pub shield: Option<Shield>,
    /// Laser first-shot latch: set on the first update, which backdates
    /// `last_attack` so the first beam fires immediately
    primed: bool,
}

impl Enemy {
    /// Construct an enemy of the given kind
    ///
    /// Attack cooldowns get ±random jitter at construction so a room full
    /// of attackers does not volley in lockstep.
    pub fn spawn(
        kind: EnemyKind,
        pos: Vec2,
        id: u32,
        has_key: bool,
        healing: bool,
        rng: &mut Pcg32,
    ) -> Self {
        let radius = ENEMY_RADIUS;
        let jitter = |rng: &mut Pcg32| 1900.0 + rng.random_range(0.0..200.0);

        let (health, standoff, attack_cooldown, coin_drop) = match kind {
            EnemyKind::Regular => (
                100.0,
                radius * 1.5,
                0.0,
                CoinDrop { tier: CoinTier::Bronze, value: 1 },
            ),
            EnemyKind::Attacker => (
                100.0,
                radius * 12.0,
                jitter(rng),
                CoinDrop { tier: CoinTier::Silver, value: 2 },
            ),
            EnemyKind::Shielded | EnemyKind::Reflector => (
                60.0,
                radius * 10.0,
                jitter(rng),
                CoinDrop { tier: CoinTier::Gold, value: 5 },
            ),
            EnemyKind::Laser => (
                150.0,
                radius * 12.0,
                2500.0,
                CoinDrop { tier: CoinTier::Gold, value: 5 },
            ),
        };

        let shield = match kind {
            EnemyKind::Shielded | EnemyKind::Reflector => Some(Shield {
                angle: 0.0,
                arc: std::f32::consts::FRAC_PI_4,
            }),
            _ => None,
        };

        Self {
            id,
            kind,
            pos,
            radius,
            speed: ENEMY_SPEED,
            health,
            max_health: health,
            is_active: true,
            standoff,
            coin_drop,
            has_key,
            healing,
            attack_cooldown,
            last_attack: 0.0,
            shield,
            primed: false,
        }
    }

    /// Advance one tick: move relative to the player, face the shield,
    /// and produce a spawn request when the attack cooldown elapses.
    ///
    /// Inactive enemies do nothing, permanently.
    pub fn update(&mut self, player_pos: Vec2, now: f64, dt: f32) -> Option<SpawnRequest> {
        if !self.is_active {
            return None;
        }

        // Laser enemies fire the moment they first see the player
        if self.kind == EnemyKind::Laser && !self.primed {
            self.primed = true;
            self.last_attack = now - self.attack_cooldown;
        }

        let dist = distance(self.pos, player_pos);
        let heading = angle_to(self.pos, player_pos);
        let step = Vec2::new(heading.cos(), heading.sin()) * self.speed * dt;

        // Stance is a pure function of distance: seek, hold, or retreat
        if dist > self.standoff {
            self.pos += step;
        } else if dist < self.standoff - 5.0 {
            self.pos -= step;
        }

        self.pos.x = self.pos.x.clamp(self.radius, ARENA_WIDTH - self.radius);
        self.pos.y = self.pos.y.clamp(self.radius, ARENA_HEIGHT - self.radius);

        if let Some(shield) = &mut self.shield {
            shield.angle = angle_to(self.pos, player_pos);
        }

        if self.attack_cooldown > 0.0 && now - self.last_attack >= self.attack_cooldown {
            self.last_attack = now;
            return Some(self.attack(player_pos, now));
        }
        None
    }

    fn attack(&self, player_pos: Vec2, now: f64) -> SpawnRequest {
        let aim = angle_to(self.pos, player_pos);
        match self.kind {
            EnemyKind::Laser => SpawnRequest::Laser(Laser::new(
                self.pos,
                aim,
                now,
                LASER_CHARGE_TIME,
                LASER_ACTIVE_TIME,
            )),
            _ => SpawnRequest::Projectile {
                origin: self.pos,
                angle: aim,
                speed: ENEMY_PROJECTILE_SPEED,
                radius: PROJECTILE_RADIUS,
            },
        }
    }

    /// Whether a projectile at `proj_pos` strikes inside the shield arc
    ///
    /// Uses a modular angle difference so the test behaves correctly when
    /// the shield faces across the ±π seam.
    pub fn shield_blocks(&self, proj_pos: Vec2) -> bool {
        match &self.shield {
            Some(shield) => {
                let incoming = angle_to(self.pos, proj_pos);
                angle_diff(incoming, shield.angle).abs() <= shield.arc / 2.0
            }
            None => false,
        }
    }

    /// Reflector response: a fresh enemy-owned bullet from this enemy's
    /// center, heading fully reversed. Ignores the arc check when invoked.
    pub fn reflect_bullet(&self, incoming: &Projectile, id: u32) -> Projectile {
        Projectile::fire(
            id,
            self.pos,
            reflect_angle(incoming.angle),
            incoming.speed,
            incoming.radius,
            true,
        )
    }

    /// Apply damage; returns true if this call deactivated the enemy
    ///
    /// Health may go negative but is inert once inactive - repeated calls
    /// on a dead enemy are no-ops.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_active {
            return false;
        }
        self.health -= amount;
        if self.health <= 0.0 {
            self.is_active = false;
            log::info!(
                "enemy {} ({:?}) down, dropping {:?} x{}",
                self.id,
                self.kind,
                self.coin_drop.tier,
                self.coin_drop.value
            );
            return true;
        }
        false
    }

    /// Health fraction for the renderer's bar
    #[inline]
    pub fn health_ratio(&self) -> f32 {
        (self.health / self.max_health).max(0.0)
    }

    /// Display color (key carriers override to gold)
    pub fn color(&self) -> &'static str {
        if self.has_key {
            return "#f5c542";
        }
        match self.kind {
            EnemyKind::Regular => "#ff0000",
            EnemyKind::Attacker => "#ff00ff",
            EnemyKind::Shielded => "#00ff00",
            EnemyKind::Reflector => "#0000ff",
            EnemyKind::Laser => "#9c19ff",
        }
    }
}
