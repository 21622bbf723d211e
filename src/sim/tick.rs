//! Per-tick simulation orchestration
//!
//! One call advances the whole combat state by a fixed step, in a fixed
//! order: player motion, firing, enemy updates (collecting their spawn
//! requests), projectile advancement, then the combat resolver. The caller
//! supplies the monotonic clock; the core never reads one.

use glam::Vec2;

use super::combat;
use super::enemy::SpawnRequest;
use super::geometry::angle_to;
use super::projectile::Projectile;
use super::state::{GameEvent, GameState, SoundCue};
use crate::Tuning;
use crate::consts::*;

/// Kinematic step per tick, in frames
const TICK_DT: f32 = 1.0;

/// Normalized input intents for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized movement vector
    pub move_dir: Vec2,
    /// Aim point in arena coordinates
    pub aim: Vec2,
    /// Dash intent
    pub dash: bool,
    /// Fire intent
    pub fire: bool,
}

/// Advance the combat state by one fixed timestep
///
/// `now` is the injected monotonic timestamp in milliseconds. Events
/// produced by the tick accumulate in `state.events` until drained.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, now: f64) {
    // --- Player pass ---
    state.player.integrate(input.move_dir, TICK_DT);
    if input.dash {
        let aim_dir = input.aim - state.player.pos;
        if state.player.try_dash(aim_dir, now) {
            state.events.push(GameEvent::Sound(SoundCue::Dash));
        }
    }
    state.player.update_dash(now);

    // --- Firing trigger (soft concurrent-bullet throttle) ---
    if input.fire && state.room.player_projectile_count() < BULLET_LIMIT {
        let angle = angle_to(state.player.pos, input.aim);
        let id = state.next_entity_id();
        state.room.projectiles.push(Projectile::fire(
            id,
            state.player.pos,
            angle,
            PROJECTILE_SPEED,
            PROJECTILE_RADIUS,
            false,
        ));
        state.events.push(GameEvent::Sound(SoundCue::PlayerFire));
    }

    // --- Enemy pass: movement plus spawn requests ---
    let player_pos = state.player.pos;
    let mut requests: Vec<SpawnRequest> = Vec::new();
    for enemy in &mut state.room.enemies {
        if let Some(request) = enemy.update(player_pos, now, TICK_DT) {
            requests.push(request);
        }
    }
    for request in requests {
        match request {
            SpawnRequest::Projectile { origin, angle, speed, radius } => {
                let id = state.next_entity_id();
                state
                    .room
                    .projectiles
                    .push(Projectile::fire(id, origin, angle, speed, radius, true));
            }
            SpawnRequest::Laser(laser) => state.room.lasers.push(laser),
        }
    }

    // --- Projectile pass (new ones spawned this tick included) ---
    for proj in &mut state.room.projectiles {
        proj.advance(TICK_DT);
    }

    // --- Combat resolution ---
    combat::resolve(state, tuning, now);

    // --- Cleanup: expired projectiles and finished lasers go away;
    // inactive enemies stay in the collection (logical deletion) ---
    state.room.projectiles.retain(|p| !p.expired);
    state.room.lasers.retain(|l| !l.is_finished(now));
}
