//! Capabilities shared by everything that moves through the arena

use glam::Vec2;

use super::coords::{Viewport, to_display_space};

/// A positioned body that advances with time
pub trait Actor {
    /// World (simulation space) position
    fn position(&self) -> Vec2;

    /// Collision radius in display units
    fn radius(&self) -> f32;

    /// Move forward by `dt` seconds
    fn advance(&mut self, dt: f32);

    /// Position mapped into display space
    #[inline]
    fn display_position(&self, viewport: &Viewport) -> Vec2 {
        to_display_space(self.position(), viewport)
    }
}
