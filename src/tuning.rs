//! Data-driven combat balance
//!
//! Damage numbers are data, not behavior: the defaults here match the
//! shipped balance, and an external loader can override them from JSON
//! without touching the simulation.

use serde::{Deserialize, Serialize};

/// Tunable damage values, all in health points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Enemy body contact vs the player
    pub contact_damage: f32,
    /// Player projectile vs an enemy
    pub player_projectile_damage: f32,
    /// Enemy projectile vs the player
    pub enemy_projectile_damage: f32,
    /// Live laser beam vs the player, per hit
    pub laser_damage: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            contact_damage: 10.0,
            player_projectile_damage: 25.0,
            enemy_projectile_damage: 10.0,
            laser_damage: 15.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"laser_damage": 30.0}"#).unwrap();
        assert_eq!(tuning.laser_damage, 30.0);
        assert_eq!(tuning.contact_damage, Tuning::default().contact_damage);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{nope").is_err());
    }

    #[test]
    fn test_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
