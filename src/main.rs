//! Arena Shooter headless runner
//!
//! Drives the simulation with a scripted pilot and logs what happens. Usage:
//!
//! ```text
//! arena-shooter [config.json] [seconds]
//! ```
//!
//! Set `RUST_LOG=debug` to see spawns and hits.

use std::process::ExitCode;

use arena_shooter::sim::{
    Arena, ArenaEvent, GamePhase, MoveDirection, MoveKeys, TickInput, fast_distance,
    to_display_space,
};
use arena_shooter::{ArenaConfig, Camera};

/// Fixed frame step (120 Hz)
const FRAME_DT: f32 = 1.0 / 120.0;
/// Default run length (seconds)
const DEFAULT_SECONDS: f32 = 30.0;
/// Camera kick when the player takes a hit
const HIT_SHAKE: f32 = 0.02;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match ArenaConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => ArenaConfig::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let mut arena = match Arena::new(config) {
        Ok(arena) => arena,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Arena Shooter (headless) running for {seconds}s");
    let frames = (seconds / FRAME_DT).ceil() as u64;
    let mut camera = Camera::default();
    let mut last = None;

    for frame in 0..frames {
        let input = pilot(&arena, frame);
        let result = arena.tick(FRAME_DT, &input);
        camera.follow(arena.player().pos, FRAME_DT);

        for event in arena.drain_events() {
            match event {
                ArenaEvent::PlayerHit { damage, .. } => {
                    camera.shake(HIT_SHAKE);
                    log::info!(
                        "Player hit for {damage:.1} ({:.1} hp left)",
                        result.player_hitpoints
                    );
                }
                ArenaEvent::EnemyKilled { enemy_id, .. } => {
                    log::debug!("Enemy {enemy_id} down, score {}", result.score);
                }
                _ => {}
            }
        }

        last = Some(result);
        if result.phase == GamePhase::GameOver {
            break;
        }
    }

    if let Some(result) = last {
        log::info!(
            "Finished after {} frames: score={}, hp={:.1}, shots {}/{} ({:.0}% accuracy)",
            arena.frame(),
            result.score,
            result.player_hitpoints,
            result.shots_hit,
            result.shots_fired,
            arena.player().accuracy() * 100.0
        );
        log::debug!("Camera settled at {:?}", camera.offset());
        match serde_json::to_string(&arena.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => log::warn!("Snapshot serialization failed: {err}"),
        }
    }

    ExitCode::SUCCESS
}

/// Scripted input: strafe in a slow square, aim at the closest enemy, hold fire
fn pilot(arena: &Arena, frame: u64) -> TickInput {
    let viewport = arena.config().viewport;
    let player_pos = arena.player().pos;

    let target = arena.enemies().iter().min_by(|a, b| {
        fast_distance(a.pos, player_pos)
            .partial_cmp(&fast_distance(b.pos, player_pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Aiming takes an un-shifted display position, as if the mouse sat on the enemy
    let cursor = target.map(|enemy| to_display_space(enemy.pos, &viewport));

    let leg = (frame / 240) % 4;
    let heading = match leg {
        0 => MoveDirection::Up,
        1 => MoveDirection::Right,
        2 => MoveDirection::Down,
        _ => MoveDirection::Left,
    };
    let movement: MoveKeys = std::iter::once(heading).collect();

    TickInput {
        cursor,
        movement,
        fire: target.is_some(),
        dash: frame % 360 == 0,
        pause: false,
    }
}
