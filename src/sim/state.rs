//! Game state and outbound event types
//!
//! `GameState` owns everything one tick mutates: the player, the current
//! room's combatants, the seeded RNG, and the event queue the external
//! systems (economy, audio, renderer) drain after each tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{CoinTier, Enemy, EnemyKind};
use super::player::Player;
use super::room::Room;

/// Fire-and-forget audio cues (consumed externally, never read back)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    PlayerFire,
    PlayerHit,
    Dash,
    EnemyHit,
    EnemyDown,
    ShieldDeflect,
    LaserLive,
}

/// Outcomes a tick produces for the external pickup/audio systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Tiered reward emitted exactly once, on enemy deactivation
    CoinDrop { tier: CoinTier, value: u32, pos: Vec2 },
    /// A key-carrier died here
    KeyDrop { pos: Vec2 },
    /// A healing-flagged enemy died here
    HealthDrop { pos: Vec2 },
    Sound(SoundCue),
}

/// RNG state wrapper for serialization
///
/// Hands out a fresh deterministic stream per request so construction-time
/// jitter stays reproducible across save/restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn next_rng(&mut self) -> Pcg32 {
        self.stream += 1;
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream))
    }
}

/// Complete combat state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub player: Player,
    pub room: Room,
    /// Events produced by the last tick, drained by the caller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            player: Player::default(),
            room: Room::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an enemy into the current room; returns its ID
    pub fn spawn_enemy(
        &mut self,
        kind: EnemyKind,
        pos: Vec2,
        has_key: bool,
        healing: bool,
    ) -> u32 {
        let id = self.next_entity_id();
        let mut rng = self.rng_state.next_rng();
        self.room
            .enemies
            .push(Enemy::spawn(kind, pos, id, has_key, healing, &mut rng));
        id
    }

    /// Take ownership of the tick's events, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
