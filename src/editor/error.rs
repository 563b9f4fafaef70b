//! Error types for the polygon editing core.
//!
//! None of these are fatal. The session controller turns them into
//! [`CommandOutcome::Ignored`](super::session::CommandOutcome::Ignored) and the
//! editor carries on as if the command had never been issued.

use thiserror::Error;

use crate::constants::MIN_POLYGON_VERTICES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Finalize was requested before the draft had enough vertices
    #[error(
        "polygon needs at least {min} vertices, draft has {count}",
        min = MIN_POLYGON_VERTICES
    )]
    TooFewVertices { count: usize },

    /// Copy was requested but no polygon has been completed yet
    #[error("no polygon to copy")]
    EmptyPolygonSet,

    /// The pointer does not land on the ground surface
    #[error("pointer does not intersect the ground plane")]
    NoGroundIntersection,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    #[error("triangulation failed: {0}")]
    Earcut(String),

    /// Outline encloses no area (collinear or repeated vertices)
    #[error("polygon outline is degenerate")]
    Degenerate,
}
