use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::config::AppConfig;
use crate::constants::{CAMERA_HEIGHT, MAX_ZOOM, MIN_ZOOM};

use super::unproject::OrthographicViewport;

#[derive(Component)]
pub struct EditorCamera;

#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl CameraZoom {
    /// Apply one scroll step, keeping the scale within limits
    pub fn scroll(&mut self, amount: f32) {
        self.scale = (self.scale - amount).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Top-down orthographic camera centered on the world origin, looking down -Z
pub fn spawn_camera(mut commands: Commands, config: Res<AppConfig>) {
    commands.spawn((
        Camera2d,
        EditorCamera,
        CameraZoom {
            scale: config.data.initial_zoom,
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, CAMERA_HEIGHT)),
    ));
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<EditorCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };

        zoom.scroll(scroll_amount);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<EditorCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

/// Keep the viewport extents used for unprojection in step with the window
/// size and the camera zoom
pub fn sync_viewport(
    mut resize_events: MessageReader<WindowResized>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    zoom_query: Query<Ref<CameraZoom>, With<EditorCamera>>,
    mut viewport: ResMut<OrthographicViewport>,
) {
    let resized = resize_events.read().count() > 0;

    let Ok(zoom) = zoom_query.single() else {
        return;
    };

    if !resized && !zoom.is_changed() {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let updated = OrthographicViewport::from_window_size(window.width(), window.height(), zoom.scale);
    if *viewport != updated {
        debug!(
            "Viewport now {:.1} x {:.1} world units",
            updated.width(),
            updated.height()
        );
        *viewport = updated;
    }
}
