use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::{DEFAULT_GRID_DIVISIONS, DEFAULT_GRID_EXTENT};
use crate::theme;

use super::unproject::GroundPlane;

/// The ground grid: a square of `extent` world units centered on the origin,
/// split into `divisions` cells along each side
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GridSettings {
    pub visible: bool,
    pub snap_enabled: bool,
    pub extent: f32,
    pub divisions: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            snap_enabled: false,
            extent: DEFAULT_GRID_EXTENT,
            divisions: DEFAULT_GRID_DIVISIONS,
        }
    }
}

impl GridSettings {
    pub fn cell_size(&self) -> f32 {
        self.extent / self.divisions as f32
    }

    pub fn half_extent(&self) -> f32 {
        self.extent / 2.0
    }

    /// Coordinates of every grid line along one axis, edge to edge
    pub fn line_positions(&self) -> impl Iterator<Item = f32> + '_ {
        let half = self.half_extent();
        let cell = self.cell_size();
        (0..=self.divisions).map(move |i| -half + i as f32 * cell)
    }

    pub fn ground_plane(&self) -> GroundPlane {
        GroundPlane::new(self.extent)
    }
}

/// Snap position to the nearest grid intersection.
///
/// Grid lines start at the edge of the ground square, so with an odd number of
/// divisions the origin is not an intersection.
pub fn snap_to_grid(position: Vec2, grid: &GridSettings) -> Vec2 {
    if !grid.snap_enabled {
        return position;
    }

    let cell = grid.cell_size();
    let half = grid.half_extent();
    let snap = |v: f32| (((v + half) / cell).round() * cell - half).clamp(-half, half);
    Vec2::new(snap(position.x), snap(position.y))
}

/// Startup system: build grid settings and the pickable ground surface from config
pub fn init_grid_from_config(
    config: Res<AppConfig>,
    mut grid: ResMut<GridSettings>,
    mut ground: ResMut<GroundPlane>,
) {
    *grid = GridSettings {
        visible: config.data.grid_visible,
        snap_enabled: config.data.snap_to_grid,
        extent: config.data.grid_extent,
        divisions: config.data.grid_divisions,
    };
    *ground = grid.ground_plane();
    info!(
        "Ground grid {} units, {} divisions (snap {})",
        grid.extent,
        grid.divisions,
        if grid.snap_enabled { "on" } else { "off" }
    );
}

pub fn draw_grid(mut gizmos: Gizmos, grid: Res<GridSettings>) {
    if !grid.visible {
        return;
    }

    let half = grid.half_extent();
    let grid_color = theme::GRID_COLOR;

    for pos in grid.line_positions() {
        gizmos.line_2d(Vec2::new(pos, -half), Vec2::new(pos, half), grid_color);
        gizmos.line_2d(Vec2::new(-half, pos), Vec2::new(half, pos), grid_color);
    }
}
