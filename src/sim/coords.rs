//! Coordinate mapping between simulation and display space
//!
//! Simulation space is origin-centered with both axes spanning [-1, 1] across
//! the viewport, y pointing up. Display space is pixel coordinates with the
//! origin in the top-left corner and y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// Size of the render target in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::consts::VIEWPORT_WIDTH,
            height: crate::consts::VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Create a viewport, rejecting non-positive or non-finite extents
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Build a viewport from a `[width, height]` slice
    pub fn from_slice(size: &[f32]) -> Result<Self> {
        let [width, height] = as_pair("viewport", size)?;
        Self::new(width, height)
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ArenaError::InvalidArgument {
                what: "viewport",
                expected: "positive finite width and height".to_string(),
                found: format!("{}x{}", self.width, self.height),
            })
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Map a simulation-space point to display space
#[inline]
pub fn to_display_space(sim_pos: Vec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        (sim_pos.x + 1.0) * 0.5 * viewport.width,
        (-sim_pos.y + 1.0) * 0.5 * viewport.height,
    )
}

/// Map a display-space point back to simulation space (inverse of [`to_display_space`])
#[inline]
pub fn to_sim_space(display_pos: Vec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        -1.0 + display_pos.x * 2.0 / viewport.width,
        1.0 - display_pos.y * 2.0 / viewport.height,
    )
}

/// Slice form of [`to_display_space`] for callers holding untyped coordinates
pub fn try_to_display_space(sim_pos: &[f32], viewport: &[f32]) -> Result<Vec2> {
    let [x, y] = as_pair("sim_pos", sim_pos)?;
    let viewport = Viewport::from_slice(viewport)?;
    Ok(to_display_space(Vec2::new(x, y), &viewport))
}

/// Slice form of [`to_sim_space`]
pub fn try_to_sim_space(display_pos: &[f32], viewport: &[f32]) -> Result<Vec2> {
    let [x, y] = as_pair("display_pos", display_pos)?;
    let viewport = Viewport::from_slice(viewport)?;
    Ok(to_sim_space(Vec2::new(x, y), &viewport))
}

/// Euclidean distance between two points.
///
/// Called for every collision pair each frame; takes `Vec2` by value (it is
/// `Copy`, 8 bytes) and never allocates.
#[inline(always)]
pub fn fast_distance(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

fn as_pair(what: &'static str, v: &[f32]) -> Result<[f32; 2]> {
    <[f32; 2]>::try_from(v).map_err(|_| ArenaError::InvalidArgument {
        what,
        expected: "2 components".to_string(),
        found: v.len().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let vp = Viewport::default();
        let center = to_display_space(Vec2::ZERO, &vp);
        assert!((center - Vec2::new(400.0, 200.0)).length() < 1e-4);
    }

    #[test]
    fn test_corners() {
        let vp = Viewport::default();
        // Top-left of sim space is the display origin
        let tl = to_display_space(Vec2::new(-1.0, 1.0), &vp);
        assert!(tl.length() < 1e-4);
        let br = to_display_space(Vec2::new(1.0, -1.0), &vp);
        assert!((br - Vec2::new(800.0, 400.0)).length() < 1e-4);
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let err = try_to_display_space(&[0.0, 0.0, 0.0], &[800.0, 400.0]).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidArgument { what: "sim_pos", .. }));

        let err = try_to_sim_space(&[10.0, 10.0], &[800.0]).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidArgument { what: "viewport", .. }));
    }

    #[test]
    fn test_slice_form_matches_typed_form() {
        let vp = Viewport::default();
        let typed = to_display_space(Vec2::new(0.25, -0.5), &vp);
        let sliced = try_to_display_space(&[0.25, -0.5], &[800.0, 400.0]).unwrap();
        assert_eq!(typed, sliced);
    }

    #[test]
    fn test_degenerate_viewport_rejected() {
        assert!(Viewport::new(0.0, 400.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 400.0).is_err());
        assert!(Viewport::new(640.0, 480.0).is_ok());
    }

    #[test]
    fn test_fast_distance() {
        assert!((fast_distance(Vec2::new(3.0, 0.0), Vec2::new(0.0, 4.0)) - 5.0).abs() < 1e-6);
        assert_eq!(fast_distance(Vec2::ONE, Vec2::ONE), 0.0);
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            x in -1.0f32..1.0,
            y in -1.0f32..1.0,
            w in 1.0f32..4096.0,
            h in 1.0f32..4096.0,
        ) {
            let vp = Viewport::new(w, h).unwrap();
            let p = Vec2::new(x, y);
            let back = to_sim_space(to_display_space(p, &vp), &vp);
            prop_assert!((back - p).abs().max_element() < 1e-5);
        }

        #[test]
        fn prop_fast_distance_matches_glam(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert!((fast_distance(a, b) - a.distance(b)).abs() < 1e-4);
        }
    }
}
