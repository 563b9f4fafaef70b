//! Rendering systems. All of them only read the session.
//!
//! Polygon fills are real meshes, rebuilt only when the polygon set changes.
//! Outlines, draft vertices and the preview line are immediate-mode gizmos
//! drawn from [`Session::frame`] every frame.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::theme;

use super::error::TriangulationError;
use super::polygon::Polygon;
use super::session::Session;

/// Depth step between consecutive polygons so later ones draw on top
const POLYGON_Z_STEP: f32 = 0.001;

/// Radius of the markers drawn on committed draft vertices
const DRAFT_VERTEX_RADIUS: f32 = 3.0;

/// Fill mesh entity for one session polygon
#[derive(Component, Debug)]
pub struct PolygonFill;

/// Fill entities currently spawned, in polygon order
#[derive(Resource, Default)]
pub struct PolygonMeshes {
    generation: u64,
    entities: Vec<Entity>,
}

/// Triangle-list mesh covering the polygon's interior, in world coordinates
pub fn polygon_fill_mesh(polygon: &Polygon) -> Result<Mesh, TriangulationError> {
    let vertices = polygon.vertices();
    let mut indices = polygon.triangulate()?;

    // Keep every triangle counter-clockwise regardless of drawing direction
    for tri in indices.chunks_exact_mut(3) {
        let a = vertices[tri[0] as usize];
        let b = vertices[tri[1] as usize];
        let c = vertices[tri[2] as usize];
        if (b - a).perp_dot(c - a) < 0.0 {
            tri.swap(1, 2);
        }
    }

    let positions: Vec<[f32; 3]> = vertices.iter().map(|v| [v.x, v.y, 0.0]).collect();
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    Ok(mesh)
}

/// Spawn fill meshes for new polygons; despawn everything after a reset
pub fn sync_polygon_meshes(
    mut commands: Commands,
    session: Res<Session>,
    mut state: ResMut<PolygonMeshes>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let polygons = session.polygons();

    if state.generation != session.generation() || state.entities.len() > polygons.len() {
        for entity in state.entities.drain(..) {
            commands.entity(entity).despawn();
        }
        state.generation = session.generation();
    }

    for (index, polygon) in polygons.iter().enumerate().skip(state.entities.len()) {
        let z = index as f32 * POLYGON_Z_STEP;
        let mut entity = commands.spawn((
            Transform::from_xyz(0.0, 0.0, z),
            PolygonFill,
        ));

        match polygon_fill_mesh(polygon) {
            Ok(mesh) => {
                entity.insert((
                    Mesh2d(meshes.add(mesh)),
                    MeshMaterial2d(materials.add(ColorMaterial::from(Color::from(polygon.color())))),
                ));
            }
            Err(err) => warn!("Polygon {} drawn as outline only: {}", index, err),
        }

        state.entities.push(entity.id());
    }
}

pub fn render_polygon_outlines(mut gizmos: Gizmos, session: Res<Session>) {
    for polygon in session.frame().polygons {
        for (start, end) in polygon.outline() {
            gizmos.line_2d(start, end, theme::OUTLINE_COLOR);
        }
    }
}

pub fn render_draft_preview(mut gizmos: Gizmos, session: Res<Session>) {
    let Some(preview) = session.frame().preview else {
        return;
    };

    gizmos.linestrip_2d(preview, theme::PREVIEW_COLOR);

    for vertex in session.draft().vertices() {
        gizmos.circle_2d(*vertex, DRAFT_VERTEX_RADIUS, theme::DRAFT_VERTEX_COLOR);
    }
}
