//! Arena Shooter - simulation core for a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player, enemies, projectiles, collisions)
//! - `camera`: Offset transform applied to world positions before rendering
//! - `settings`: Immutable arena configuration
//! - `error`: Error taxonomy for argument and configuration failures
//!
//! Windowing, input polling, audio and HUD drawing live outside this crate.
//! A presentation layer feeds [`sim::TickInput`] into [`sim::Arena::tick`] once
//! per frame and draws from [`sim::ArenaSnapshot`].

pub mod camera;
pub mod error;
pub mod settings;
pub mod sim;

pub use camera::Camera;
pub use error::{ArenaError, Result};
pub use settings::{ArenaConfig, EnemyStats, PlayerStats, ProjectileHitPolicy};

/// Default gameplay constants
pub mod consts {
    /// Threshold below which a vector or timer counts as zero
    pub const EPSILON: f32 = 1e-6;

    /// Default viewport (display units)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    /// Projectiles farther than this from their owner (sim units) are dropped
    pub const PROJECTILE_MAX_TRAVEL: f32 = 1.5;
    /// Distance from the player at which new enemies appear (sim units)
    pub const ENEMY_SPAWN_MIN_DIST: f32 = 1.5;
    /// Live enemy cap
    pub const MAX_ENEMIES: usize = 5;

    /// Invincibility window after taking a hit (seconds)
    pub const INVINCIBILITY_DURATION: f32 = 0.5;
    /// Knockback duration after taking a hit (seconds)
    pub const KNOCKBACK_DURATION: f32 = 0.2;
    /// Knockback displacement speed relative to normal movement
    pub const KNOCKBACK_SPEED_MULTIPLIER: f32 = 2.0;

    /// Upper bound on armor mitigation so armor never nullifies damage
    pub const MAX_ARMOR: f32 = 0.9;
}

/// Scale raw damage by armor (0 = full damage, capped at [`consts::MAX_ARMOR`])
#[inline]
pub fn mitigate(raw_damage: f32, armor: f32) -> f32 {
    raw_damage * (1.0 - armor.clamp(0.0, consts::MAX_ARMOR))
}
