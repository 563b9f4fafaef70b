mod dialogs;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block editor input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = config_reset.show;
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Toolbar first, dialogs on top
                    toolbar::toolbar_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .chain(),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
