//! Per-frame orchestration
//!
//! Frame order is fixed: input, player update, spawning, collisions, pruning,
//! enemy movement. Collisions and pruning must see enemy positions from before
//! this frame's enemy movement.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::{actors_overlap, circles_overlap, nearest_where};
use super::enemy::Enemy;
use super::player::{MoveKeys, Player};
use super::snapshot::ArenaSnapshot;
use crate::error::Result;
use crate::settings::{ArenaConfig, ProjectileHitPolicy};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Paused,
    /// Player hitpoints reached zero; ticks are no-ops
    GameOver,
}

/// Input sampled by the presentation layer for one frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cursor in display space, if the pointer is over the viewport
    pub cursor: Option<Vec2>,
    /// Held movement directions
    pub movement: MoveKeys,
    /// Fire button held
    pub fire: bool,
    /// Dash pressed this frame
    pub dash: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Per-frame summary returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    /// Enemies removed this frame (score delta)
    pub dead_enemies: u32,
    pub player_hitpoints: f32,
    pub shots_hit: u32,
    pub shots_fired: u32,
    /// Running total of kills
    pub score: u64,
    pub phase: GamePhase,
}

/// Things that happened during a frame, for audio/effects hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    EnemySpawned { enemy_id: u32, pos: Vec2 },
    PlayerHit { enemy_id: u32, damage: f32 },
    EnemyHit { enemy_id: u32, projectile_id: u32, damage: i32 },
    EnemyKilled { enemy_id: u32, pos: Vec2 },
    PlayerDied { score: u64 },
}

/// Hit counts from one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub player_hits: u32,
    pub projectile_hits: u32,
}

/// Owns the player, enemies and spawn RNG
#[derive(Debug, Clone)]
pub struct Arena {
    config: ArenaConfig,
    player: Player,
    enemies: Vec<Enemy>,
    rng: Pcg32,
    phase: GamePhase,
    score: u64,
    frame: u64,
    events: Vec<ArenaEvent>,
    next_enemy_id: u32,
}

impl Arena {
    /// Validate `config` and set up an empty arena with the player at the origin
    pub fn new(config: ArenaConfig) -> Result<Self> {
        config.validate()?;
        log::info!(
            "Arena created: seed={}, max_enemies={}, hit_policy={}",
            config.seed,
            config.max_enemies,
            config.hit_policy.as_str()
        );
        Ok(Self {
            player: Player::new(&config),
            enemies: Vec::with_capacity(config.max_enemies),
            rng: Pcg32::seed_from_u64(config.seed),
            phase: GamePhase::Playing,
            score: 0,
            frame: 0,
            events: Vec::new(),
            next_enemy_id: 1,
            config,
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Frames simulated while playing
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot::capture(self)
    }

    /// Advance one frame
    pub fn tick(&mut self, dt: f32, input: &TickInput) -> FrameResult {
        if input.pause {
            match self.phase {
                GamePhase::Playing => {
                    self.phase = GamePhase::Paused;
                    log::info!("Paused at frame {}", self.frame);
                }
                GamePhase::Paused => {
                    self.phase = GamePhase::Playing;
                    log::info!("Resumed at frame {}", self.frame);
                }
                GamePhase::GameOver => {}
            }
        }

        if self.phase != GamePhase::Playing {
            return self.frame_result(0);
        }

        if !(dt.is_finite() && dt >= 0.0) {
            log::warn!("Ignoring frame with invalid dt {dt}");
            return self.frame_result(0);
        }

        self.frame += 1;

        // Input
        self.player.set_movement_input(input.movement);
        if input.dash {
            self.player.dash();
        }

        // Aim from where the player ends up this frame
        self.player.advance(dt);
        if let Some(cursor) = input.cursor {
            self.player.set_aim_direction(cursor, &self.config.viewport);
        }
        if input.fire {
            self.player.fire();
        }

        self.maintain_population();
        self.resolve_collisions();
        let dead = self.prune();
        self.score += u64::from(dead);
        self.update_enemies(dt);

        if !self.player.is_alive() {
            self.phase = GamePhase::GameOver;
            self.events.push(ArenaEvent::PlayerDied { score: self.score });
            log::info!(
                "Game over at frame {}: score={}, accuracy={:.0}%",
                self.frame,
                self.score,
                self.player.accuracy() * 100.0
            );
        }

        let result = self.frame_result(dead);
        log::trace!(
            "frame {}: enemies={} projectiles={} hp={:.1}",
            self.frame,
            self.enemies.len(),
            self.player.projectiles.len(),
            result.player_hitpoints
        );
        result
    }

    fn frame_result(&self, dead_enemies: u32) -> FrameResult {
        FrameResult {
            dead_enemies,
            player_hitpoints: self.player.hitpoints,
            shots_hit: self.player.shots_hit,
            shots_fired: self.player.shots_fired,
            score: self.score,
            phase: self.phase,
        }
    }

    /// Spawn enemies until the live count reaches `max_enemies`; returns how many spawned
    pub fn maintain_population(&mut self) -> usize {
        let mut spawned = 0;
        while self.enemies.len() < self.config.max_enemies {
            let pos = self.random_spawn_position();
            self.spawn_enemy_at(pos);
            spawned += 1;
        }
        spawned
    }

    /// Place an enemy at `pos` regardless of the population cap
    pub fn spawn_enemy_at(&mut self, pos: Vec2) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        self.enemies.push(Enemy::new(id, pos, &self.config.enemy, self.config.epsilon));
        self.events.push(ArenaEvent::EnemySpawned { enemy_id: id, pos });
        log::debug!("Spawned enemy {} at ({:.3}, {:.3})", id, pos.x, pos.y);
        id
    }

    /// A point `spawn_distance` from the player, toward a random point of the unit square
    fn random_spawn_position(&mut self) -> Vec2 {
        let eps = self.config.epsilon;
        let sample = Vec2::new(self.rng.random::<f32>(), self.rng.random::<f32>());
        let target = (sample - Vec2::splat(0.5)) * 2.0 + Vec2::splat(eps);

        let offset = target - self.player.pos;
        let len = offset.length();
        let dir = if len < eps { Vec2::X } else { offset / len };
        self.player.pos + dir * self.config.spawn_distance
    }

    /// Player-enemy contact, then projectile-enemy hits
    pub fn resolve_collisions(&mut self) -> CollisionReport {
        let viewport = self.config.viewport;
        let mut report = CollisionReport::default();

        for enemy in &self.enemies {
            if actors_overlap(&self.player, enemy, &viewport) {
                if let Some(damage) = self.player.take_hit(enemy) {
                    report.player_hits += 1;
                    self.events.push(ArenaEvent::PlayerHit {
                        enemy_id: enemy.id,
                        damage,
                    });
                    log::debug!("Player hit by enemy {} for {:.1}", enemy.id, damage);
                }
            }
        }

        // Each projectile only tests the enemy nearest to it
        let damage = self.player.damage();
        let mut i = 0;
        while i < self.player.projectiles.len() {
            let projectile = &self.player.projectiles[i];
            let p_display = projectile.display_position(&viewport);
            let Some((idx, _)) =
                nearest_where(p_display, &self.enemies, &viewport, |e| !e.is_dead())
            else {
                break;
            };

            let enemy = &mut self.enemies[idx];
            if !circles_overlap(
                p_display,
                projectile.radius,
                enemy.display_position(&viewport),
                enemy.radius,
            ) {
                i += 1;
                continue;
            }

            let projectile_id = projectile.id;
            let dealt = enemy.take_damage(damage);
            self.events.push(ArenaEvent::EnemyHit {
                enemy_id: enemy.id,
                projectile_id,
                damage: dealt,
            });
            log::debug!(
                "Projectile {} hit enemy {} ({} hp left)",
                projectile_id,
                enemy.id,
                enemy.hitpoints
            );
            self.player.register_hit(projectile_id);
            report.projectile_hits += 1;

            if self.config.hit_policy == ProjectileHitPolicy::FirstHitPerFrame {
                break;
            }
        }

        report
    }

    /// Remove enemies with no hitpoints left; returns how many were removed
    pub fn prune(&mut self) -> u32 {
        let before = self.enemies.len();
        for enemy in self.enemies.iter().filter(|e| e.is_dead()) {
            self.events.push(ArenaEvent::EnemyKilled {
                enemy_id: enemy.id,
                pos: enemy.pos,
            });
            log::debug!("Enemy {} killed", enemy.id);
        }
        self.enemies.retain(|e| !e.is_dead());
        (before - self.enemies.len()) as u32
    }

    /// Move every enemy toward the player. Enemies never read each other.
    pub fn update_enemies(&mut self, dt: f32) {
        let target = self.player.pos;
        for enemy in &mut self.enemies {
            enemy.update(dt, target);
        }
    }
}
