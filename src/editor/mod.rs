mod camera;
pub mod color;
mod conditions;
pub mod draft;
pub mod error;
mod grid;
mod input;
pub mod params;
pub mod polygon;
mod rendering;
pub mod session;
pub mod unproject;

pub use grid::GridSettings;
pub use session::{Session, SessionCommand};

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// Ordering of the per-frame editor work
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditorSet {
    /// Window input turned into session commands
    Input,
    /// Session commands applied
    Apply,
    /// Session read and drawn
    Render,
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Session>()
            .init_resource::<GridSettings>()
            .init_resource::<unproject::OrthographicViewport>()
            .init_resource::<unproject::GroundPlane>()
            .init_resource::<rendering::PolygonMeshes>()
            .add_message::<SessionCommand>()
            .configure_sets(
                Update,
                (EditorSet::Input, EditorSet::Apply, EditorSet::Render).chain(),
            )
            .add_systems(
                Startup,
                (camera::spawn_camera, grid::init_grid_from_config).after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (camera::camera_zoom, camera::apply_camera_zoom, camera::sync_viewport)
                    .chain()
                    .before(EditorSet::Input),
            )
            .add_systems(
                Update,
                (
                    input::handle_pointer_move,
                    (input::handle_click, input::handle_shortcuts)
                        .run_if(conditions::no_dialog_open),
                )
                    .chain()
                    .in_set(EditorSet::Input),
            )
            .add_systems(
                Update,
                session::apply_session_commands
                    .run_if(on_message::<SessionCommand>)
                    .in_set(EditorSet::Apply),
            )
            .add_systems(
                Update,
                (
                    rendering::sync_polygon_meshes.run_if(resource_changed::<Session>),
                    grid::draw_grid,
                    rendering::render_polygon_outlines,
                    rendering::render_draft_preview,
                )
                    .in_set(EditorSet::Render),
            );
    }
}
