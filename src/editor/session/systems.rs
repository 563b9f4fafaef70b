//! Bevy system that applies queued session commands.

use bevy::prelude::*;

use super::super::color::RandomColors;
use super::{CommandOutcome, SessionCommand};
use super::state::Session;

/// Apply every queued command to the session, in the order it was sent
pub fn apply_session_commands(
    mut commands: MessageReader<SessionCommand>,
    mut session: ResMut<Session>,
    mut colors: Local<RandomColors>,
) {
    for command in commands.read() {
        // Bypass change detection for no-ops so renderers don't rebuild
        let outcome = session.bypass_change_detection().dispatch(*command, &mut *colors);
        if outcome.is_ignored() {
            continue;
        }
        session.set_changed();

        match outcome {
            CommandOutcome::PolygonCompleted { index } => {
                info!(
                    "Completed polygon {} with {} vertices",
                    index,
                    session.polygons()[index].vertices().len()
                );
            }
            CommandOutcome::PolygonCopied { index } => {
                info!(
                    "Copied polygon to {:?} (now {} polygons)",
                    session.pointer_world_position(),
                    index + 1
                );
            }
            CommandOutcome::Reset => info!("Session reset"),
            _ => {}
        }
    }
}
