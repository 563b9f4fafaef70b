//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// A finalized polygon never has fewer vertices than this
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Side length of the square ground grid, in world units
pub const DEFAULT_GRID_EXTENT: f32 = 1000.0;

/// Number of grid cells along each side of the ground grid
pub const DEFAULT_GRID_DIVISIONS: u32 = 100;

/// Height of the top-down camera above the ground plane
pub const CAMERA_HEIGHT: f32 = 5.0;

/// Zoom limits for the orthographic projection scale
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;
