//! Room contract: entity containers, pickups, and travel gates
//!
//! The room's lifecycle (level data, door unlocking, pickup spending) is
//! owned externally; the core mutates the combatant collections each tick
//! and reads the gate descriptors to answer travel queries. A direction
//! with no gate descriptor is open - missing data is never an error.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::laser::Laser;
use super::projectile::Projectile;

/// Door-side directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What kind of barrier sits on a room edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateKind {
    /// Opens after `open_req` registered shots
    Door { open_req: u32, shot_count: u32 },
    /// Opens with a key (external pickup system decides when)
    Key,
}

/// A per-direction travel gate descriptor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gate {
    pub kind: GateKind,
    pub open: bool,
}

impl Gate {
    /// Unlock progress in [0, 1] for the renderer's partial-door fill
    pub fn progress(&self) -> f32 {
        match self.kind {
            GateKind::Door { open_req, shot_count } => {
                if open_req == 0 || self.open {
                    1.0
                } else {
                    (shot_count as f32 / open_req as f32).min(1.0)
                }
            }
            GateKind::Key => {
                if self.open {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// The four gate slots of a room
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Travel {
    pub up: Option<Gate>,
    pub down: Option<Gate>,
    pub left: Option<Gate>,
    pub right: Option<Gate>,
}

impl Travel {
    pub fn gate(&self, dir: Direction) -> Option<&Gate> {
        match dir {
            Direction::Up => self.up.as_ref(),
            Direction::Down => self.down.as_ref(),
            Direction::Left => self.left.as_ref(),
            Direction::Right => self.right.as_ref(),
        }
    }

    /// Whether travel in `dir` is possible; no gate means open
    pub fn is_open(&self, dir: Direction) -> bool {
        self.gate(dir).is_none_or(|gate| gate.open)
    }
}

/// A coin/key/health pickup lying in the room (consumed externally)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub radius: f32,
    pub value: u32,
}

/// One arena room's combat contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub lasers: Vec<Laser>,
    pub coins: Vec<Pickup>,
    pub keys: Vec<Pickup>,
    pub health_packs: Vec<Pickup>,
    pub travel: Travel,
}

impl Room {
    /// Active (still simulated) enemies
    pub fn active_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_active)
    }

    /// Live player-owned projectiles, for the firing throttle
    pub fn player_projectile_count(&self) -> usize {
        self.projectiles
            .iter()
            .filter(|p| !p.is_enemy && !p.expired)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_gate_is_open() {
        let travel = Travel::default();
        assert!(travel.is_open(Direction::Up));
        assert!(travel.is_open(Direction::Left));
    }

    #[test]
    fn test_closed_door_blocks() {
        let travel = Travel {
            up: Some(Gate {
                kind: GateKind::Door { open_req: 3, shot_count: 1 },
                open: false,
            }),
            ..Default::default()
        };
        assert!(!travel.is_open(Direction::Up));
        assert!(travel.is_open(Direction::Down));
    }

    #[test]
    fn test_door_progress() {
        let gate = Gate {
            kind: GateKind::Door { open_req: 4, shot_count: 1 },
            open: false,
        };
        assert!((gate.progress() - 0.25).abs() < 1e-6);

        let no_req = Gate {
            kind: GateKind::Door { open_req: 0, shot_count: 0 },
            open: false,
        };
        assert_eq!(no_req.progress(), 1.0);
    }
}
