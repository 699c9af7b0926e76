//! The player character
//!
//! Movement comes from a set of held directions, aim from the cursor. Taking a
//! hit starts two timed effects: an invincibility window, and a short knockback
//! that overrides movement input and shoves the player away from the attacker.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::coords::{Viewport, to_sim_space};
use super::enemy::Enemy;
use super::projectile::Projectile;
use super::status::{Cooldown, TimedEffect};
use crate::settings::{ArenaConfig, PlayerStats};

/// A movement direction key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Up,
        MoveDirection::Down,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Unit axis vector (sim space, y up)
    pub fn axis(self) -> Vec2 {
        match self {
            MoveDirection::Up => Vec2::Y,
            MoveDirection::Down => Vec2::NEG_Y,
            MoveDirection::Left => Vec2::NEG_X,
            MoveDirection::Right => Vec2::X,
        }
    }

    fn bit(self) -> u8 {
        match self {
            MoveDirection::Up => 1,
            MoveDirection::Down => 1 << 1,
            MoveDirection::Left => 1 << 2,
            MoveDirection::Right => 1 << 3,
        }
    }
}

/// Set of currently held movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveKeys(u8);

impl MoveKeys {
    pub const NONE: MoveKeys = MoveKeys(0);

    pub fn insert(&mut self, dir: MoveDirection) {
        self.0 |= dir.bit();
    }

    pub fn remove(&mut self, dir: MoveDirection) {
        self.0 &= !dir.bit();
    }

    pub fn contains(&self, dir: MoveDirection) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        MoveDirection::ALL.into_iter().filter(|d| self.contains(*d))
    }

    /// Normalized sum of the held axes; zero when nothing is held or keys cancel
    pub fn direction(&self, epsilon: f32) -> Vec2 {
        let sum: Vec2 = self.iter().map(MoveDirection::axis).sum();
        let len = sum.length();
        if len < epsilon { Vec2::ZERO } else { sum / len }
    }
}

impl FromIterator<MoveDirection> for MoveKeys {
    fn from_iter<I: IntoIterator<Item = MoveDirection>>(iter: I) -> Self {
        let mut keys = MoveKeys::NONE;
        for dir in iter {
            keys.insert(dir);
        }
        keys
    }
}

/// Rules copied out of [`ArenaConfig`] at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRules {
    epsilon: f32,
    projectile_max_travel: f32,
    invincibility_duration: f32,
    knockback_duration: f32,
    knockback_speed_multiplier: f32,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Unit aim direction
    pub weapon_dir: Vec2,
    /// Unit movement direction, or zero when idle
    pub vel: Vec2,
    pub hitpoints: f32,
    pub stats: PlayerStats,
    pub shoot_cooldown: Cooldown,
    pub dash_cooldown: Cooldown,
    pub invincibility: TimedEffect,
    pub knockback: TimedEffect,
    /// Unit push direction while knocked back
    pub knockback_vec: Vec2,
    /// Live projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    pub shots_fired: u32,
    pub shots_hit: u32,
    rules: PlayerRules,
    next_projectile_id: u32,
}

impl Player {
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            pos: Vec2::ZERO,
            weapon_dir: Vec2::X,
            vel: Vec2::ZERO,
            hitpoints: config.player.hitpoints,
            stats: config.player.clone(),
            shoot_cooldown: Cooldown::default(),
            dash_cooldown: Cooldown::default(),
            invincibility: TimedEffect::Inactive,
            knockback: TimedEffect::Inactive,
            knockback_vec: Vec2::ZERO,
            projectiles: Vec::new(),
            shots_fired: 0,
            shots_hit: 0,
            rules: PlayerRules {
                epsilon: config.epsilon,
                projectile_max_travel: config.projectile_max_travel,
                invincibility_duration: config.invincibility_duration,
                knockback_duration: config.knockback_duration,
                knockback_speed_multiplier: config.knockback_speed_multiplier,
            },
            next_projectile_id: 1,
        }
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_active()
    }

    #[inline]
    pub fn is_knocked_back(&self) -> bool {
        self.knockback.is_active()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hitpoints > 0.0
    }

    /// Damage dealt by each projectile hit
    #[inline]
    pub fn damage(&self) -> f32 {
        self.stats.base_damage
    }

    /// Remaining hitpoints as a fraction of the starting pool
    pub fn hitpoint_ratio(&self) -> f32 {
        (self.hitpoints / self.stats.hitpoints).clamp(0.0, 1.0)
    }

    /// Share of fired projectiles that landed
    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.shots_hit as f32 / self.shots_fired as f32
        }
    }

    /// Fire a projectile along the aim direction. No-op while cooling down.
    pub fn fire(&mut self) -> bool {
        if !self.shoot_cooldown.is_ready(self.rules.epsilon) {
            return false;
        }

        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        self.projectiles.push(Projectile::new(
            id,
            self.pos,
            self.weapon_dir,
            self.stats.projectile_radius,
            self.stats.projectile_speed,
        ));
        self.shoot_cooldown.reset(self.stats.shoot_interval);
        self.shots_fired += 1;
        true
    }

    /// Aim at a display-space cursor. Leaves the aim unchanged (and returns
    /// false) when the cursor sits on the player.
    pub fn set_aim_direction(&mut self, cursor_display: Vec2, viewport: &Viewport) -> bool {
        let to_cursor = to_sim_space(cursor_display, viewport) - self.pos;
        let len = to_cursor.length();
        if !(len >= self.rules.epsilon && len.is_finite()) {
            return false;
        }
        self.weapon_dir = to_cursor / len;
        true
    }

    /// Set velocity from held direction keys; ignored while knocked back
    pub fn set_movement_input(&mut self, keys: MoveKeys) {
        if self.is_knocked_back() {
            return;
        }
        self.vel = keys.direction(self.rules.epsilon);
    }

    /// Jump `dash_distance` along the current movement direction
    pub fn dash(&mut self) -> bool {
        if !self.dash_cooldown.is_ready(self.rules.epsilon)
            || self.is_knocked_back()
            || self.vel.length() < self.rules.epsilon
        {
            return false;
        }
        self.pos += self.vel * self.stats.dash_distance;
        self.dash_cooldown.reset(self.stats.dash_interval);
        true
    }

    /// Take contact damage from `enemy`. Returns the damage applied, or `None`
    /// while invincible.
    pub fn take_hit(&mut self, enemy: &Enemy) -> Option<f32> {
        if self.is_invincible() || !self.is_alive() {
            return None;
        }

        let dealt = crate::mitigate(enemy.damage(), self.stats.armor);
        self.hitpoints = (self.hitpoints - dealt).max(0.0);
        self.invincibility
            .trigger(self.rules.invincibility_duration, self.rules.epsilon);

        // Pushed away from the attacker; skipped if we are on top of it
        let away = self.pos - enemy.pos;
        let len = away.length();
        if len >= self.rules.epsilon {
            self.knockback_vec = away / len;
            self.knockback
                .trigger(self.rules.knockback_duration, self.rules.epsilon);
        }

        Some(dealt)
    }

    /// Remove a projectile that landed a hit
    pub fn register_hit(&mut self, projectile_id: u32) -> bool {
        match self.projectiles.iter().position(|p| p.id == projectile_id) {
            Some(idx) => {
                self.projectiles.remove(idx);
                self.shots_hit += 1;
                true
            }
            None => false,
        }
    }
}

impl Actor for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.stats.radius
    }

    fn advance(&mut self, dt: f32) {
        let step = if self.is_knocked_back() {
            self.knockback_vec * dt * self.rules.knockback_speed_multiplier
        } else {
            self.vel * dt
        };
        self.pos += step;

        let owner = self.pos;
        let max_travel = self.rules.projectile_max_travel;
        self.projectiles.retain(|p| !p.out_of_range(owner, max_travel));
        for projectile in &mut self.projectiles {
            projectile.advance(dt);
        }

        self.shoot_cooldown.tick(dt);
        self.dash_cooldown.tick(dt);
        self.invincibility.tick(dt, self.rules.epsilon);
        self.knockback.tick(dt, self.rules.epsilon);
    }
}
