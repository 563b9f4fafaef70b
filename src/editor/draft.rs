//! The in-progress polygon outline.

use bevy::prelude::*;

use crate::constants::MIN_POLYGON_VERTICES;

use super::color::PolygonColor;
use super::error::SessionError;
use super::polygon::Polygon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    Drawing,
}

/// Vertices clicked so far for the polygon being drawn
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    vertices: Vec<Vec2>,
}

impl Draft {
    pub fn state(&self) -> DraftState {
        if self.vertices.is_empty() {
            DraftState::Empty
        } else {
            DraftState::Drawing
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.state() == DraftState::Drawing
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn can_finalize(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    pub fn add_vertex(&mut self, point: Vec2) {
        self.vertices.push(point);
    }

    /// Committed vertices followed by the pointer, for the live preview line.
    /// `None` until the first vertex is placed.
    pub fn preview_segment(&self, pointer: Vec2) -> Option<Vec<Vec2>> {
        if !self.is_drawing() {
            return None;
        }

        let mut points = Vec::with_capacity(self.vertices.len() + 1);
        points.extend_from_slice(&self.vertices);
        points.push(pointer);
        Some(points)
    }

    /// Turn the draft into a polygon and start over.
    ///
    /// With too few vertices the draft is left untouched.
    pub fn finalize(&mut self, color: PolygonColor) -> Result<Polygon, SessionError> {
        if !self.can_finalize() {
            return Err(SessionError::TooFewVertices {
                count: self.vertices.len(),
            });
        }

        let polygon = Polygon::new(self.vertices.clone(), color)?;
        self.vertices.clear();
        Ok(polygon)
    }

    pub fn reset(&mut self) {
        self.vertices.clear();
    }
}
