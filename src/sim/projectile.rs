//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;

/// A point moving in a straight line at constant speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
    /// Display-space radius
    pub radius: f32,
    /// Sim units per second
    pub speed: f32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, dir: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            id,
            pos,
            dir,
            radius,
            speed,
        }
    }

    /// True once the projectile is farther than `max_travel` from `owner_pos`
    #[inline]
    pub fn out_of_range(&self, owner_pos: Vec2, max_travel: f32) -> bool {
        super::coords::fast_distance(self.pos, owner_pos) > max_travel
    }
}

impl Actor for Projectile {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self, dt: f32) {
        self.pos += self.dir * self.speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_along_direction() {
        let mut p = Projectile::new(1, Vec2::ZERO, Vec2::Y, 5.0, 5.0);
        p.advance(0.1);
        assert!((p.pos - Vec2::new(0.0, 0.5)).length() < 1e-6);
        p.advance(0.1);
        assert!((p.pos - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_out_of_range() {
        let p = Projectile::new(1, Vec2::new(1.6, 0.0), Vec2::X, 5.0, 5.0);
        assert!(p.out_of_range(Vec2::ZERO, 1.5));
        assert!(!p.out_of_range(Vec2::new(0.5, 0.0), 1.5));
    }
}
