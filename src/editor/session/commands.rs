//! Commands accepted by the session controller and what they did.

use bevy::prelude::*;

use super::super::error::SessionError;

/// One user-level editing command, in world coordinates.
///
/// Input systems and toolbar buttons write these; they are applied in order by
/// [`apply_session_commands`](super::apply_session_commands).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    /// Pointer moved over the ground plane
    Move(Vec2),
    /// Ground plane clicked (never sent for clicks on UI controls)
    Click(Vec2),
    /// Close the draft into a polygon
    Complete,
    /// Duplicate the last polygon at the pointer
    Copy,
    /// Discard every polygon and the draft
    Reset,
}

impl SessionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::Move(_) => "move",
            SessionCommand::Click(_) => "click",
            SessionCommand::Complete => "complete",
            SessionCommand::Copy => "copy",
            SessionCommand::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    PointerMoved,
    VertexAdded { count: usize },
    PolygonCompleted { index: usize },
    PolygonCopied { index: usize },
    Reset,
    /// The command was a no-op; the session is unchanged
    Ignored(SessionError),
}

impl CommandOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, CommandOutcome::Ignored(_))
    }
}

/// Which toolbar buttons should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiVisibility {
    pub complete_visible: bool,
    pub copy_visible: bool,
}
