//! Screen to ground-plane coordinate mapping.
//!
//! The camera looks straight down the Z axis at the ground plane and is never
//! panned, so the visible area is always symmetric about the world origin. Under
//! those conditions mapping a pointer onto the plane is a linear scale of its
//! normalized device coordinates by the viewport extents.

use bevy::prelude::*;

use crate::editor::error::SessionError;

/// Visible world-space extents of the orthographic camera
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrthographicViewport {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl OrthographicViewport {
    /// Extents for a window of the given logical size at the given zoom scale
    pub fn from_window_size(width: f32, height: f32, scale: f32) -> Self {
        let half_width = width / 2.0 * scale;
        let half_height = height / 2.0 * scale;
        Self {
            left: -half_width,
            right: half_width,
            top: half_height,
            bottom: -half_height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

impl Default for OrthographicViewport {
    fn default() -> Self {
        use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
        Self::from_window_size(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, 1.0)
    }
}

/// Map a window-space cursor position (origin top-left, y down) into
/// normalized device coordinates in `[-1, 1]` (y up).
///
/// Returns `None` for a zero-sized window (minimized).
pub fn normalize_pointer(screen: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }

    Some(Vec2::new(
        (screen.x / window_size.x) * 2.0 - 1.0,
        -(screen.y / window_size.y) * 2.0 + 1.0,
    ))
}

/// Project normalized pointer coordinates onto the ground plane
pub fn unproject(ndc: Vec2, viewport: &OrthographicViewport) -> Vec2 {
    Vec2::new(ndc.x * viewport.right, ndc.y * viewport.top)
}

/// The finite, square ground surface that vertices can be placed on
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub half_extent: f32,
}

impl GroundPlane {
    pub fn new(extent: f32) -> Self {
        Self {
            half_extent: extent / 2.0,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x.abs() <= self.half_extent && point.y.abs() <= self.half_extent
    }

    /// World point under the pointer, if the pointer is over the ground surface
    pub fn pick(&self, ndc: Vec2, viewport: &OrthographicViewport) -> Result<Vec2, SessionError> {
        let point = unproject(ndc, viewport);
        if self.contains(point) {
            Ok(point)
        } else {
            Err(SessionError::NoGroundIntersection)
        }
    }
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_GRID_EXTENT)
    }
}
