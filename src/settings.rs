//! Arena configuration
//!
//! One immutable struct handed to [`crate::sim::Arena::new`]. Every field has a
//! default, so a JSON file only needs the values it wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ArenaError, Result};
use crate::sim::Viewport;

/// How many projectile hits the collision pass resolves per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileHitPolicy {
    /// Every projectile tests its nearest enemy independently
    #[default]
    AllPairs,
    /// Stop after the first projectile hit of the frame
    FirstHitPerFrame,
}

impl ProjectileHitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectileHitPolicy::AllPairs => "all_pairs",
            ProjectileHitPolicy::FirstHitPerFrame => "first_hit_per_frame",
        }
    }
}

/// Player base stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub hitpoints: f32,
    pub base_damage: f32,
    /// Fraction of incoming damage absorbed (0..=0.9)
    pub armor: f32,
    /// Body radius (display units)
    pub radius: f32,
    /// Seconds between shots
    pub shoot_interval: f32,
    /// Seconds between dashes
    pub dash_interval: f32,
    /// Dash jump length (sim units)
    pub dash_distance: f32,
    /// Projectile radius (display units)
    pub projectile_radius: f32,
    /// Projectile speed (sim units per second)
    pub projectile_speed: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hitpoints: 100.0,
            base_damage: 1.0,
            armor: 0.0,
            radius: 11.0,
            shoot_interval: 0.1,
            dash_interval: 1.0,
            dash_distance: 0.25,
            projectile_radius: 5.0,
            projectile_speed: 5.0,
        }
    }
}

/// Enemy base stats (every spawned enemy starts with these)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyStats {
    pub hitpoints: i32,
    pub armor: f32,
    /// Body radius (display units)
    pub radius: f32,
    /// Pursuit speed (sim units per second)
    pub speed: f32,
    pub base_damage: f32,
    pub damage_multiplier: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            hitpoints: 5,
            armor: 0.0,
            radius: 5.0,
            speed: 0.5,
            base_damage: 10.0,
            damage_multiplier: 1.0,
        }
    }
}

/// Complete arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Render target size used for all collision math
    pub viewport: Viewport,
    /// Seed for the spawn RNG
    pub seed: u64,
    pub epsilon: f32,
    pub max_enemies: usize,
    /// Distance from the player at which enemies spawn (sim units)
    pub spawn_distance: f32,
    /// Projectiles beyond this distance from the player are dropped (sim units)
    pub projectile_max_travel: f32,
    pub invincibility_duration: f32,
    pub knockback_duration: f32,
    pub knockback_speed_multiplier: f32,
    pub hit_policy: ProjectileHitPolicy,
    pub player: PlayerStats,
    pub enemy: EnemyStats,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            seed: 0,
            epsilon: EPSILON,
            max_enemies: MAX_ENEMIES,
            spawn_distance: ENEMY_SPAWN_MIN_DIST,
            projectile_max_travel: PROJECTILE_MAX_TRAVEL,
            invincibility_duration: INVINCIBILITY_DURATION,
            knockback_duration: KNOCKBACK_DURATION,
            knockback_speed_multiplier: KNOCKBACK_SPEED_MULTIPLIER,
            hit_policy: ProjectileHitPolicy::default(),
            player: PlayerStats::default(),
            enemy: EnemyStats::default(),
        }
    }
}

impl ArenaConfig {
    /// Default config with a specific RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded arena config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would put NaN into positions or stall timers
    pub fn validate(&self) -> Result<()> {
        self.viewport.validate()?;

        let positive = [
            ("epsilon", self.epsilon),
            ("spawn_distance", self.spawn_distance),
            ("projectile_max_travel", self.projectile_max_travel),
            ("player.hitpoints", self.player.hitpoints),
            ("player.radius", self.player.radius),
            ("player.projectile_radius", self.player.projectile_radius),
            ("player.projectile_speed", self.player.projectile_speed),
            ("enemy.radius", self.enemy.radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ArenaError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("invincibility_duration", self.invincibility_duration),
            ("knockback_duration", self.knockback_duration),
            ("knockback_speed_multiplier", self.knockback_speed_multiplier),
            ("player.base_damage", self.player.base_damage),
            ("player.armor", self.player.armor),
            ("player.shoot_interval", self.player.shoot_interval),
            ("player.dash_interval", self.player.dash_interval),
            ("player.dash_distance", self.player.dash_distance),
            ("enemy.armor", self.enemy.armor),
            ("enemy.speed", self.enemy.speed),
            ("enemy.base_damage", self.enemy.base_damage),
            ("enemy.damage_multiplier", self.enemy.damage_multiplier),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ArenaError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.enemy.hitpoints <= 0 {
            return Err(ArenaError::InvalidConfig(format!(
                "enemy.hitpoints must be positive, got {}",
                self.enemy.hitpoints
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ArenaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_enemies, 5);
        assert_eq!(config.player.shoot_interval, 0.1);
        assert_eq!(config.hit_policy, ProjectileHitPolicy::AllPairs);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ArenaConfig::from_json_str(
            r#"{ "seed": 7, "max_enemies": 2, "enemy": { "speed": 0.8 }, "hit_policy": "first_hit_per_frame" }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_enemies, 2);
        assert_eq!(config.enemy.speed, 0.8);
        assert_eq!(config.enemy.hitpoints, 5);
        assert_eq!(config.player, PlayerStats::default());
        assert_eq!(config.hit_policy, ProjectileHitPolicy::FirstHitPerFrame);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ArenaConfig::with_seed(99);
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ArenaConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ArenaConfig::from_json_str(r#"{ "player": { "radius": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidConfig(_)));

        let err = ArenaConfig::from_json_str(r#"{ "enemy": { "hitpoints": 0 } }"#).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidConfig(_)));

        let err =
            ArenaConfig::from_json_str(r#"{ "viewport": { "width": 0.0, "height": 400.0 } }"#)
                .unwrap_err();
        assert!(matches!(err, ArenaError::InvalidArgument { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = ArenaConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ArenaError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ArenaConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ArenaError::Io(_)));
    }
}
