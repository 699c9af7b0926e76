//! Collision detection
//!
//! All overlap math runs in display space: positions are mapped through the
//! viewport first and compared against display-space radii. With a non-square
//! viewport a circle in display space is an ellipse in simulation space.

use glam::Vec2;

use super::actor::Actor;
use super::coords::{Viewport, fast_distance};

/// True if two circles touch or overlap
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    fast_distance(a_pos, b_pos) <= a_radius + b_radius
}

/// Overlap test between two actors after mapping both to display space
#[inline]
pub fn actors_overlap<A: Actor, B: Actor>(a: &A, b: &B, viewport: &Viewport) -> bool {
    circles_overlap(
        a.display_position(viewport),
        a.radius(),
        b.display_position(viewport),
        b.radius(),
    )
}

/// Index and display distance of the actor nearest to `display_pos`
pub fn nearest<T: Actor>(
    display_pos: Vec2,
    candidates: &[T],
    viewport: &Viewport,
) -> Option<(usize, f32)> {
    nearest_where(display_pos, candidates, viewport, |_| true)
}

/// [`nearest`] restricted to candidates passing `keep`
pub fn nearest_where<T: Actor>(
    display_pos: Vec2,
    candidates: &[T],
    viewport: &Viewport,
    keep: impl Fn(&T) -> bool,
) -> Option<(usize, f32)> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| keep(*c))
        .map(|(i, c)| (i, fast_distance(display_pos, c.display_position(viewport))))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}
