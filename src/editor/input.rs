//! Input systems: translate window events into session commands.
//!
//! Everything here is glue. Pointer positions are mapped onto the ground plane
//! and forwarded as [`SessionCommand`]s; the session decides what they mean.

use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy_egui::EguiContexts;

use super::error::SessionError;
use super::grid::{snap_to_grid, GridSettings};
use super::params::{is_cursor_over_ui, ui_wants_keyboard, PointerParams};
use super::session::SessionCommand;

/// Send a `Move` whenever the cursor moves or the viewport under it changes.
///
/// The position is snapped the same way clicks are, so the preview tail ends
/// where the next vertex would land.
pub fn handle_pointer_move(
    mut cursor_events: MessageReader<CursorMoved>,
    pointer: PointerParams,
    grid: Res<GridSettings>,
    mut session_commands: MessageWriter<SessionCommand>,
) {
    let moved = cursor_events.read().count() > 0;
    if !moved && !pointer.viewport_changed() && !grid.is_changed() {
        return;
    }

    match pointer.cursor_ground_point() {
        Some(Ok(world_pos)) => {
            session_commands.write(SessionCommand::Move(snap_to_grid(world_pos, &grid)));
        }
        Some(Err(SessionError::NoGroundIntersection)) => {
            trace!("Pointer is off the ground plane");
        }
        Some(Err(_)) | None => {}
    }
}

/// Left click on the ground plane adds a vertex to the draft
pub fn handle_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    pointer: PointerParams,
    grid: Res<GridSettings>,
    mut contexts: EguiContexts,
    mut session_commands: MessageWriter<SessionCommand>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    // Clicks on toolbar buttons belong to the UI
    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(ground_point) = pointer.cursor_ground_point() else {
        return;
    };

    match ground_point {
        Ok(world_pos) => {
            session_commands.write(SessionCommand::Click(snap_to_grid(world_pos, &grid)));
        }
        Err(err) => debug!("Click ignored: {}", err),
    }
}

/// Keyboard command for a key press, if it maps to one
pub fn shortcut_command(key: KeyCode) -> Option<SessionCommand> {
    match key {
        KeyCode::Enter | KeyCode::NumpadEnter => Some(SessionCommand::Complete),
        KeyCode::KeyC => Some(SessionCommand::Copy),
        KeyCode::KeyR => Some(SessionCommand::Reset),
        _ => None,
    }
}

/// Enter completes, C copies, R resets
pub fn handle_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut session_commands: MessageWriter<SessionCommand>,
) {
    // Don't act on keys while typing in a text field
    if ui_wants_keyboard(&mut contexts) {
        return;
    }

    // Leave Ctrl/Cmd combinations to the OS and egui
    let modifier = keyboard.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ]);
    if modifier {
        return;
    }

    for key in keyboard.get_just_pressed() {
        if let Some(command) = shortcut_command(*key) {
            session_commands.write(command);
        }
    }
}
