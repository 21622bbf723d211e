//! Combat resolver
//!
//! The cross-cutting pass that runs after all motion: pairwise overlap
//! queries between player, enemies, projectiles, and lasers, applying
//! damage, shield reflection, and drop events. Decisions are collected
//! first and applied after each scan so the borrow of one entity list
//! never has to live across a mutation of another.

use crate::Tuning;
use crate::sim::enemy::EnemyKind;
use crate::sim::geometry::{circles_overlap, reflect_angle};
use crate::sim::state::{GameEvent, GameState, SoundCue};

/// What a player projectile did to the enemy it overlapped
enum BulletOutcome {
    /// Normal damaging hit
    Damage,
    /// Shielded: reverse the projectile in place (bounce count preserved)
    ReflectInPlace,
    /// Reflector: replace with a fresh bullet from the enemy center
    ReflectReplace,
}

/// Resolve all combat interactions for this tick
pub fn resolve(state: &mut GameState, tuning: &Tuning, now: f64) {
    resolve_enemy_contact(state, tuning, now);
    resolve_player_bullets(state, tuning);
    resolve_enemy_bullets(state, tuning, now);
    resolve_lasers(state, tuning, now);
}

/// Rule 1: body contact between active enemies and the player
fn resolve_enemy_contact(state: &mut GameState, tuning: &Tuning, now: f64) {
    for enemy in state.room.enemies.iter().filter(|e| e.is_active) {
        if circles_overlap(enemy.pos, enemy.radius, state.player.pos, state.player.radius)
            && state.player.take_damage(tuning.contact_damage, now)
        {
            state.events.push(GameEvent::Sound(SoundCue::PlayerHit));
        }
    }
}

/// Rules 2 and 5: player projectiles vs enemies, with shield reflection
/// and drop events on deactivation
fn resolve_player_bullets(state: &mut GameState, tuning: &Tuning) {
    // (projectile idx, enemy idx, outcome), first overlapping enemy wins
    let mut hits: Vec<(usize, usize, BulletOutcome)> = Vec::new();

    for (pi, proj) in state.room.projectiles.iter().enumerate() {
        if proj.is_enemy || proj.expired {
            continue;
        }
        for (ei, enemy) in state.room.enemies.iter().enumerate() {
            if !enemy.is_active
                || !circles_overlap(proj.pos, proj.radius, enemy.pos, enemy.radius)
            {
                continue;
            }
            let outcome = match enemy.kind {
                EnemyKind::Reflector if enemy.shield_blocks(proj.pos) => {
                    BulletOutcome::ReflectReplace
                }
                EnemyKind::Shielded if enemy.shield_blocks(proj.pos) => {
                    BulletOutcome::ReflectInPlace
                }
                _ => BulletOutcome::Damage,
            };
            hits.push((pi, ei, outcome));
            break;
        }
    }

    for (pi, ei, outcome) in hits {
        match outcome {
            BulletOutcome::Damage => {
                state.room.projectiles[pi].consume();
                state.events.push(GameEvent::Sound(SoundCue::EnemyHit));
                if state.room.enemies[ei].take_damage(tuning.player_projectile_damage) {
                    emit_drops(state, ei);
                }
            }
            BulletOutcome::ReflectInPlace => {
                let proj = &mut state.room.projectiles[pi];
                proj.angle = reflect_angle(proj.angle);
                proj.is_enemy = true;
                state.events.push(GameEvent::Sound(SoundCue::ShieldDeflect));
            }
            BulletOutcome::ReflectReplace => {
                let id = state.next_entity_id();
                let reflected =
                    state.room.enemies[ei].reflect_bullet(&state.room.projectiles[pi], id);
                state.room.projectiles[pi] = reflected;
                state.events.push(GameEvent::Sound(SoundCue::ShieldDeflect));
            }
        }
    }
}

/// Rule 3: enemy projectiles vs the player
///
/// The projectile is consumed either way - invulnerability stops the
/// damage, not the bullet.
fn resolve_enemy_bullets(state: &mut GameState, tuning: &Tuning, now: f64) {
    let player = &mut state.player;
    for proj in &mut state.room.projectiles {
        if !proj.is_enemy || proj.expired {
            continue;
        }
        if circles_overlap(proj.pos, proj.radius, player.pos, player.radius) {
            proj.consume();
            if player.take_damage(tuning.enemy_projectile_damage, now) {
                state.events.push(GameEvent::Sound(SoundCue::PlayerHit));
            }
        }
    }
}

/// Rule 4: live lasers vs the player
///
/// A laser never expires on hit; it can damage every tick it is live,
/// throttled only by the player's invulnerability window.
fn resolve_lasers(state: &mut GameState, tuning: &Tuning, now: f64) {
    let player = &mut state.player;
    for laser in &mut state.room.lasers {
        if !laser.is_live(now) {
            continue;
        }
        if !laser.sound_played {
            laser.sound_played = true;
            state.events.push(GameEvent::Sound(SoundCue::LaserLive));
        }
        if laser.hits_circle(player.pos, player.radius)
            && player.take_damage(tuning.laser_damage, now)
        {
            state.events.push(GameEvent::Sound(SoundCue::PlayerHit));
        }
    }
}

/// Rule 5: realize the drop events for an enemy deactivated this pass
fn emit_drops(state: &mut GameState, enemy_idx: usize) {
    let enemy = &state.room.enemies[enemy_idx];
    state.events.push(GameEvent::CoinDrop {
        tier: enemy.coin_drop.tier,
        value: enemy.coin_drop.value,
        pos: enemy.pos,
    });
    if enemy.has_key {
        state.events.push(GameEvent::KeyDrop { pos: enemy.pos });
    }
    if enemy.healing {
        state.events.push(GameEvent::HealthDrop { pos: enemy.pos });
    }
    state.events.push(GameEvent::Sound(SoundCue::EnemyDown));
}
