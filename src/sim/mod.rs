//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one `Arena::tick` per rendered frame
//! - Seeded RNG only
//! - Movement math in simulation space, collision math in display space
//! - No rendering or platform dependencies

pub mod actor;
pub mod arena;
pub mod collision;
pub mod coords;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod status;

pub use actor::Actor;
pub use arena::{Arena, ArenaEvent, CollisionReport, FrameResult, GamePhase, TickInput};
pub use collision::{actors_overlap, circles_overlap, nearest, nearest_where};
pub use coords::{
    Viewport, fast_distance, to_display_space, to_sim_space, try_to_display_space,
    try_to_sim_space,
};
pub use enemy::Enemy;
pub use player::{MoveDirection, MoveKeys, Player};
pub use projectile::Projectile;
pub use snapshot::{ArenaSnapshot, EntityView, PlayerView};
pub use status::{Cooldown, TimedEffect};
