//! Pixel Raider headless demo
//!
//! Runs the combat simulation without a renderer: spawns a room of mixed
//! enemies, drives the player with a scripted orbit-and-fire input, and
//! logs the events each tick produces. Useful for eyeballing balance and
//! for profiling the core.

use glam::Vec2;

use pixel_raider::Tuning;
use pixel_raider::consts::*;
use pixel_raider::sim::{EnemyKind, GameEvent, GameState, TickInput, tick};

/// Milliseconds per tick at 60 fps
const TICK_MS: f64 = 1000.0 / 60.0;
const DEMO_TICKS: u32 = 3600; // one minute

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("demo run, seed {seed}");

    let tuning = Tuning::default();
    let mut state = GameState::new(seed);

    state.spawn_enemy(EnemyKind::Regular, Vec2::new(100.0, 100.0), false, false);
    state.spawn_enemy(EnemyKind::Attacker, Vec2::new(500.0, 100.0), false, false);
    state.spawn_enemy(EnemyKind::Shielded, Vec2::new(500.0, 500.0), false, false);
    state.spawn_enemy(EnemyKind::Reflector, Vec2::new(100.0, 500.0), true, false);
    state.spawn_enemy(EnemyKind::Laser, Vec2::new(300.0, 80.0), false, true);

    let mut now = 0.0;
    for n in 0..DEMO_TICKS {
        // Scripted input: strafe in a slow circle, aim at the nearest
        // active enemy, fire continuously, dash every few seconds
        let phase = f64::from(n) * 0.02;
        let aim = state
            .room
            .active_enemies()
            .min_by(|a, b| {
                let da = a.pos.distance(state.player.pos);
                let db = b.pos.distance(state.player.pos);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map_or(Vec2::new(ARENA_WIDTH / 2.0, 0.0), |e| e.pos);
        let input = TickInput {
            move_dir: Vec2::new(phase.cos() as f32, phase.sin() as f32),
            aim,
            dash: n % 240 == 0,
            fire: true,
        };

        tick(&mut state, &input, &tuning, now);
        now += TICK_MS;

        for event in state.take_events() {
            match event {
                GameEvent::CoinDrop { tier, value, pos } => {
                    log::info!("tick {n}: coin drop {tier:?} x{value} at {pos}");
                }
                GameEvent::KeyDrop { pos } => log::info!("tick {n}: key drop at {pos}"),
                GameEvent::HealthDrop { pos } => log::info!("tick {n}: health drop at {pos}"),
                GameEvent::Sound(cue) => log::debug!("tick {n}: sound {cue:?}"),
            }
        }

        if state.player.health <= 0.0 {
            log::info!("player down at tick {n}");
            break;
        }
        if state.room.active_enemies().count() == 0 {
            log::info!("room cleared at tick {n}");
            break;
        }
    }

    log::info!(
        "done: player health {:.0}/{:.0}, {} enemies active, {} projectiles live",
        state.player.health,
        state.player.max_health,
        state.room.active_enemies().count(),
        state.room.projectiles.len()
    );
}
