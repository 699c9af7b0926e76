//! Camera offset and screen shake
//!
//! The camera is independent of the simulation: it reads positions, never
//! writes them. Renderers map each world position through [`Camera::to_display`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::coords::{Viewport, to_display_space};

/// Default catch-up rate toward the follow target (1/s)
pub const DEFAULT_FOLLOW_RATE: f32 = 6.0;
/// Shake intensity decay rate (1/s)
const SHAKE_DECAY: f32 = 6.0;
/// Shake below this is snapped to zero
const SHAKE_CUTOFF: f32 = 1e-3;

/// World-space translation applied before rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
    pub vel: Vec2,
    pub follow_rate: f32,
    /// Current shake amplitude (sim units)
    shake: f32,
    /// Accumulated time, drives the shake pattern
    time: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            follow_rate: DEFAULT_FOLLOW_RATE,
            shake: 0.0,
            time: 0.0,
        }
    }
}

impl Camera {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Total offset: position plus any active shake
    pub fn offset(&self) -> Vec2 {
        self.pos + self.shake_offset()
    }

    /// Translate a world position into camera-relative world space
    #[inline]
    pub fn apply(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.offset()
    }

    /// World position to display position, through the camera
    #[inline]
    pub fn to_display(&self, world_pos: Vec2, viewport: &Viewport) -> Vec2 {
        to_display_space(self.apply(world_pos), viewport)
    }

    /// Ease toward `target` and decay shake
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        let gap = target - self.pos;
        self.vel = gap * self.follow_rate;
        // Never overshoot on long frames
        self.pos += gap * (self.follow_rate * dt).min(1.0);

        self.time += dt;
        self.shake *= (-SHAKE_DECAY * dt).exp();
        if self.shake < SHAKE_CUTOFF {
            self.shake = 0.0;
        }
    }

    /// Kick the camera; stronger kicks override weaker ones
    pub fn shake(&mut self, intensity: f32) {
        self.shake = self.shake.max(intensity);
    }

    pub fn shake_amount(&self) -> f32 {
        self.shake
    }

    fn shake_offset(&self) -> Vec2 {
        if self.shake == 0.0 {
            return Vec2::ZERO;
        }
        let t = self.time;
        Vec2::new((t * 53.0).sin(), (t * 71.0).cos()) * self.shake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_translation() {
        let cam = Camera::new(Vec2::new(0.25, -0.5));
        assert_eq!(cam.apply(Vec2::new(1.0, 1.0)), Vec2::new(0.75, 1.5));
        assert_eq!(cam.apply(cam.pos), Vec2::ZERO);
    }

    #[test]
    fn test_to_display_centers_camera_target() {
        let cam = Camera::new(Vec2::new(0.4, 0.2));
        let vp = Viewport::default();
        let display = cam.to_display(Vec2::new(0.4, 0.2), &vp);
        assert!((display - Vec2::new(400.0, 200.0)).length() < 1e-3);
    }

    #[test]
    fn test_follow_converges() {
        let mut cam = Camera::default();
        let target = Vec2::new(1.0, -1.0);
        for _ in 0..240 {
            cam.follow(target, 1.0 / 60.0);
        }
        assert!((cam.pos - target).length() < 1e-3);
    }

    #[test]
    fn test_follow_long_frame_does_not_overshoot() {
        let mut cam = Camera::default();
        cam.follow(Vec2::new(1.0, 0.0), 10.0);
        assert_eq!(cam.pos, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_shake_decays_to_zero() {
        let mut cam = Camera::default();
        cam.shake(0.05);
        cam.follow(Vec2::ZERO, 1.0 / 60.0);
        assert!(cam.shake_amount() > 0.0);
        assert!(cam.offset().length() <= 0.05 * std::f32::consts::SQRT_2 + 1e-6);

        for _ in 0..120 {
            cam.follow(Vec2::ZERO, 1.0 / 60.0);
        }
        assert_eq!(cam.shake_amount(), 0.0);
        assert_eq!(cam.offset(), Vec2::ZERO);
    }
}
