//! Deterministic simulation module
//!
//! All combat logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, timestamps injected by the caller
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod combat;
pub mod enemy;
pub mod geometry;
pub mod laser;
pub mod player;
pub mod projectile;
pub mod room;
pub mod state;
pub mod tick;

pub use enemy::{CoinDrop, CoinTier, Enemy, EnemyKind, Shield, SpawnRequest};
pub use geometry::{angle_to, circles_overlap, distance, point_ray_distance, reflect_angle};
pub use laser::Laser;
pub use player::Player;
pub use projectile::Projectile;
pub use room::{Direction, Gate, GateKind, Pickup, Room, Travel};
pub use state::{GameEvent, GameState, SoundCue};
pub use tick::{TickInput, tick};
