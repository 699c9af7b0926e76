//! Read-only views of arena state for the renderer
//!
//! The renderer never touches live entities. It gets copies of world positions
//! and display radii, and applies the camera through [`crate::Camera::to_display`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, GamePhase};

/// Position and size of one drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    /// World (simulation space) position
    pub pos: Vec2,
    /// Display-space radius
    pub radius: f32,
}

/// Player state needed to draw the player and HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub weapon_dir: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hitpoints: f32,
    /// 0..=1, for a health bar
    pub hitpoint_ratio: f32,
    pub invincible: bool,
    pub knocked_back: bool,
    pub shots_fired: u32,
    pub shots_hit: u32,
}

/// Everything a frame needs to be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub player: PlayerView,
    pub enemies: Vec<EntityView>,
    /// Oldest first
    pub projectiles: Vec<EntityView>,
}

impl ArenaSnapshot {
    pub fn capture(arena: &Arena) -> Self {
        let player = arena.player();
        Self {
            frame: arena.frame(),
            phase: arena.phase(),
            score: arena.score(),
            player: PlayerView {
                pos: player.pos,
                weapon_dir: player.weapon_dir,
                vel: player.vel,
                radius: player.stats.radius,
                hitpoints: player.hitpoints,
                hitpoint_ratio: player.hitpoint_ratio(),
                invincible: player.is_invincible(),
                knocked_back: player.is_knocked_back(),
                shots_fired: player.shots_fired,
                shots_hit: player.shots_hit,
            },
            enemies: arena
                .enemies()
                .iter()
                .map(|e| EntityView {
                    id: e.id,
                    pos: e.pos,
                    radius: e.radius,
                })
                .collect(),
            projectiles: player
                .projectiles
                .iter()
                .map(|p| EntityView {
                    id: p.id,
                    pos: p.pos,
                    radius: p.radius,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::ArenaConfig;
    use crate::sim::{Arena, TickInput};

    #[test]
    fn test_snapshot_mirrors_arena() {
        let mut arena = Arena::new(ArenaConfig::with_seed(3)).unwrap();
        arena.tick(
            1.0 / 60.0,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );

        let snap = arena.snapshot();
        assert_eq!(snap.frame, 1);
        assert_eq!(snap.enemies.len(), arena.enemies().len());
        assert_eq!(snap.projectiles.len(), 1);
        assert_eq!(snap.player.shots_fired, 1);
        assert_eq!(snap.player.hitpoint_ratio, 1.0);
        for (view, enemy) in snap.enemies.iter().zip(arena.enemies()) {
            assert_eq!(view.pos, enemy.pos);
            assert_eq!(view.radius, 5.0);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let arena = Arena::new(ArenaConfig::default()).unwrap();
        let json = serde_json::to_string(&arena.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
    }
}
