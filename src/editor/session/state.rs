//! The editing session: finalized polygons plus the current draft.

use bevy::prelude::*;

use super::super::color::ColorSource;
use super::super::draft::Draft;
use super::super::error::SessionError;
use super::super::polygon::Polygon;
use super::commands::{CommandOutcome, SessionCommand, UiVisibility};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame<'a> {
    pub polygons: &'a [Polygon],
    pub preview: Option<Vec<Vec2>>,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Session {
    polygons: Vec<Polygon>,
    draft: Draft,
    pointer_world_position: Vec2,
    /// Bumped whenever existing polygons are discarded, so renderers know to
    /// rebuild instead of append
    generation: u64,
}

impl Session {
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn pointer_world_position(&self) -> Vec2 {
        self.pointer_world_position
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn visibility(&self) -> UiVisibility {
        UiVisibility {
            complete_visible: self.draft.is_drawing(),
            copy_visible: !self.polygons.is_empty(),
        }
    }

    pub fn frame(&self) -> SceneFrame<'_> {
        SceneFrame {
            polygons: &self.polygons,
            preview: self.draft.preview_segment(self.pointer_world_position),
        }
    }

    pub fn dispatch(
        &mut self,
        command: SessionCommand,
        colors: &mut impl ColorSource,
    ) -> CommandOutcome {
        let outcome = match command {
            SessionCommand::Move(pos) => self.on_pointer_move(pos),
            SessionCommand::Click(pos) => self.on_click(pos),
            SessionCommand::Complete => self.on_complete(colors),
            SessionCommand::Copy => self.on_copy(),
            SessionCommand::Reset => self.on_reset(),
        };

        match outcome {
            CommandOutcome::PointerMoved => {}
            CommandOutcome::Ignored(err) => debug!("Ignored {} command: {}", command.name(), err),
            _ => debug!("Applied {} command: {:?}", command.name(), outcome),
        }
        outcome
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) -> CommandOutcome {
        self.pointer_world_position = pos;
        CommandOutcome::PointerMoved
    }

    /// Adds a vertex only. The pointer position belongs to `Move`.
    pub fn on_click(&mut self, pos: Vec2) -> CommandOutcome {
        self.draft.add_vertex(pos);
        CommandOutcome::VertexAdded {
            count: self.draft.vertex_count(),
        }
    }

    pub fn on_complete(&mut self, colors: &mut impl ColorSource) -> CommandOutcome {
        if !self.draft.can_finalize() {
            return CommandOutcome::Ignored(SessionError::TooFewVertices {
                count: self.draft.vertex_count(),
            });
        }

        match self.draft.finalize(colors.next_color()) {
            Ok(polygon) => {
                self.polygons.push(polygon);
                CommandOutcome::PolygonCompleted {
                    index: self.polygons.len() - 1,
                }
            }
            Err(err) => CommandOutcome::Ignored(err),
        }
    }

    pub fn on_copy(&mut self) -> CommandOutcome {
        let Some(last) = self.polygons.last() else {
            return CommandOutcome::Ignored(SessionError::EmptyPolygonSet);
        };

        let copy = last.duplicate().placed_at(self.pointer_world_position);
        self.polygons.push(copy);
        CommandOutcome::PolygonCopied {
            index: self.polygons.len() - 1,
        }
    }

    pub fn on_reset(&mut self) -> CommandOutcome {
        if !self.polygons.is_empty() {
            self.polygons.clear();
            self.generation += 1;
        }
        self.draft.reset();
        CommandOutcome::Reset
    }
}
