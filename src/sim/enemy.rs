//! Enemies that chase the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::settings::EnemyStats;

/// A pursuing enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Unit pursuit direction (zero until the first `pursue`)
    pub vel: Vec2,
    /// Display-space radius
    pub radius: f32,
    pub hitpoints: i32,
    pub armor: f32,
    pub speed: f32,
    pub base_damage: f32,
    pub damage_multiplier: f32,
    /// Distance below which pursuit has no direction
    epsilon: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, stats: &EnemyStats, epsilon: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: stats.radius,
            hitpoints: stats.hitpoints,
            armor: stats.armor,
            speed: stats.speed,
            base_damage: stats.base_damage,
            damage_multiplier: stats.damage_multiplier,
            epsilon,
        }
    }

    /// Point velocity at the player. Keeps the last heading when already on top of them.
    pub fn pursue(&mut self, player_pos: Vec2) {
        let to_player = player_pos - self.pos;
        let dist = to_player.length();
        if dist < self.epsilon {
            return;
        }
        self.vel = to_player / dist;
    }

    /// Contact damage dealt to the player
    #[inline]
    pub fn damage(&self) -> f32 {
        self.base_damage * self.damage_multiplier
    }

    /// Apply incoming damage after armor; fractional damage rounds to nearest,
    /// but any positive hit removes at least one hitpoint
    pub fn take_damage(&mut self, raw_damage: f32) -> i32 {
        let dealt = crate::mitigate(raw_damage, self.armor);
        let points = if dealt > 0.0 { (dealt.round() as i32).max(1) } else { 0 };
        self.hitpoints -= points;
        points
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hitpoints <= 0
    }

    /// Per-frame update: pursue, then advance
    pub fn update(&mut self, dt: f32, player_pos: Vec2) {
        self.pursue(player_pos);
        self.advance(dt);
    }
}

impl Actor for Enemy {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self, dt: f32) {
        self.pos += self.vel * self.speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EPSILON;

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy::new(1, pos, &EnemyStats::default(), EPSILON)
    }

    #[test]
    fn test_pursue_points_at_player() {
        let mut enemy = enemy_at(Vec2::new(1.0, 1.0));
        enemy.pursue(Vec2::ZERO);
        let expected = Vec2::new(-1.0, -1.0).normalize();
        assert!((enemy.vel - expected).length() < 1e-6);
    }

    #[test]
    fn test_pursue_degenerate_keeps_heading() {
        let mut enemy = enemy_at(Vec2::new(0.5, 0.0));
        enemy.pursue(Vec2::ZERO);
        let heading = enemy.vel;

        enemy.pos = Vec2::ZERO;
        enemy.pursue(Vec2::ZERO);
        assert_eq!(enemy.vel, heading);
        assert!(enemy.vel.is_finite());
    }

    #[test]
    fn test_pursue_uses_own_epsilon() {
        let mut enemy = Enemy::new(1, Vec2::new(0.05, 0.0), &EnemyStats::default(), 0.1);
        enemy.pursue(Vec2::ZERO);
        assert_eq!(enemy.vel, Vec2::ZERO);

        enemy.pos = Vec2::new(0.2, 0.0);
        enemy.pursue(Vec2::ZERO);
        assert_eq!(enemy.vel, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_closes_distance_on_stationary_player() {
        // Spawned 1.5 along +x at speed 0.5: 3 seconds brings it to the player
        let mut enemy = enemy_at(Vec2::new(1.5, 0.0));
        for _ in 0..30 {
            enemy.update(0.1, Vec2::ZERO);
            assert!(enemy.pos.is_finite());
        }
        assert!(enemy.pos.length() < 1e-4, "enemy at {:?}", enemy.pos);
    }

    #[test]
    fn test_damage_and_death() {
        let mut enemy = enemy_at(Vec2::ZERO);
        assert_eq!(enemy.damage(), 10.0);
        enemy.damage_multiplier = 1.5;
        assert_eq!(enemy.damage(), 15.0);

        assert_eq!(enemy.take_damage(1.0), 1);
        assert_eq!(enemy.hitpoints, 4);
        assert!(!enemy.is_dead());
        enemy.take_damage(4.0);
        assert!(enemy.is_dead());
    }

    #[test]
    fn test_armor_never_fully_blocks() {
        let mut enemy = enemy_at(Vec2::ZERO);
        enemy.armor = 5.0; // clamped to 0.9
        assert_eq!(enemy.take_damage(1.0), 1);
        assert_eq!(enemy.take_damage(0.0), 0);
    }
}
