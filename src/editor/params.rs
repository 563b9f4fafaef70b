//! Common SystemParam bundles for editor input systems.
//!
//! ## Available Bundles
//!
//! - [`PointerParams`]: Window cursor plus viewport and ground surface, for
//!   cursor-to-ground conversion
//!
//! ## Helper Functions
//!
//! - [`is_cursor_over_ui`]: Check if cursor is over egui UI (for input gating)

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use super::error::SessionError;
use super::unproject::{normalize_pointer, GroundPlane, OrthographicViewport};

/// Bundled window and camera-model access for cursor-to-ground calculations
#[derive(SystemParam)]
pub struct PointerParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub viewport: Res<'w, OrthographicViewport>,
    pub ground: Res<'w, GroundPlane>,
}

impl PointerParams<'_, '_> {
    /// Normalized device coordinates of the cursor, if it is inside the window
    pub fn cursor_ndc(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        normalize_pointer(cursor_pos, window.size())
    }

    /// Ground-plane point under the cursor.
    ///
    /// `None` when there is no cursor at all (outside the window).
    pub fn cursor_ground_point(&self) -> Option<Result<Vec2, SessionError>> {
        let ndc = self.cursor_ndc()?;
        Some(self.ground.pick(ndc, &self.viewport))
    }

    /// True when the viewport changed since this system last ran
    pub fn viewport_changed(&self) -> bool {
        self.viewport.is_changed()
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if egui is consuming keyboard input (a text field has focus)
pub fn ui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}
