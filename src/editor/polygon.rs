//! Finalized polygons.

use bevy::prelude::*;

use crate::constants::MIN_POLYGON_VERTICES;

use super::color::PolygonColor;
use super::error::{SessionError, TriangulationError};

/// A closed, filled polygon on the ground plane.
///
/// Vertices are in world coordinates and in boundary order. The vertex list is
/// private: once built, a polygon only changes by producing a new polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    color: PolygonColor,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>, color: PolygonColor) -> Result<Self, SessionError> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(SessionError::TooFewVertices {
                count: vertices.len(),
            });
        }
        Ok(Self { vertices, color })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn color(&self) -> PolygonColor {
        self.color
    }

    /// Copy with its own vertex storage and the same color
    pub fn duplicate(&self) -> Self {
        Self {
            vertices: self.vertices.to_vec(),
            color: self.color,
        }
    }

    /// Reference point used when placing a copy (the first vertex)
    pub fn anchor(&self) -> Vec2 {
        self.vertices[0]
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
            color: self.color,
        }
    }

    /// Copy moved so that its anchor sits at `target`
    pub fn placed_at(&self, target: Vec2) -> Self {
        self.translated(target - self.anchor())
    }

    /// Boundary edges, including the closing edge back to the first vertex
    pub fn outline(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed shoelace area; positive for counter-clockwise winding
    pub fn signed_area(&self) -> f32 {
        self.outline()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f32>()
            / 2.0
    }

    /// Triangle indices (into [`Self::vertices`]) covering the filled region
    pub fn triangulate(&self) -> Result<Vec<u32>, TriangulationError> {
        if self.signed_area().abs() <= f32::EPSILON {
            return Err(TriangulationError::Degenerate);
        }

        let coords: Vec<f64> = self
            .vertices
            .iter()
            .flat_map(|v| [v.x as f64, v.y as f64])
            .collect();

        let indices = earcutr::earcut(&coords, &[], 2)
            .map_err(|e| TriangulationError::Earcut(format!("{:?}", e)))?;
        if indices.is_empty() || indices.len() % 3 != 0 {
            return Err(TriangulationError::Degenerate);
        }

        Ok(indices.into_iter().map(|i| i as u32).collect())
    }
}
