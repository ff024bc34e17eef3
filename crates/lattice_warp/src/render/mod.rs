//! Rendering: one shared scene walk, two backends.
//!
//! [`walk`] turns a [`Scene`] into backend-agnostic [`RenderItem`]s in paint
//! order. The raster and vector backends both consume this walk and nothing
//! else, so gate decisions, stroke geometry and face selection can never
//! drift between screen and export.
pub mod raster;
pub mod vector;
pub mod view;

use glam::Vec2;

use crate::face::select_faces;
use crate::field::Well;
use crate::hash::{edge_gate_key, gate, pair_key, point_gate_key};
use crate::lattice::Lattice;
use crate::style::StyleConfig;
use crate::texture::{build_stroke, StrokePrimitive};

pub use crate::render::raster::{Pixmap, RasterRenderer};
pub use crate::render::vector::{SvgDocument, VectorEmitter};
pub use crate::render::view::{content_bounds, Bounds, ExportSize, ViewTransform};

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub lattice: &'a Lattice,
    pub style: &'a StyleConfig,
    /// Wells for the raster indicator overlay. The vector backend ignores
    /// them; indicators are a screen affordance, not part of the artwork.
    pub wells: &'a [Well],
    /// Well emphasized by the raster overlay, usually the one under the
    /// pointer.
    pub hovered_well: Option<&'a str>,
}

impl<'a> Scene<'a> {
    /// Creates a scene over a lattice and style.
    pub fn new(lattice: &'a Lattice, style: &'a StyleConfig) -> Self {
        Self {
            lattice,
            style,
            wells: &[],
            hovered_well: None,
        }
    }

    /// Attaches wells for the raster indicator overlay.
    pub fn with_wells(mut self, wells: &'a [Well]) -> Self {
        self.wells = wells;
        self
    }

    /// Marks one well as hovered.
    pub fn with_hovered_well(mut self, id: &'a str) -> Self {
        self.hovered_well = Some(id);
        self
    }
}

/// One drawable item. Geometry only; colors come from the scene style.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    /// Filled polygon from the fill layer.
    Poly { points: Vec<Vec2> },
    /// Stroke primitive from the line layer.
    Stroke(StrokePrimitive),
    /// Disc from the point layer.
    Dot { center: Vec2, diameter: f32 },
}

/// Walks the scene in layer order (fills, lines, points) and returns the
/// drawable items.
///
/// Edges are deduplicated by processing a pair only from the point with the
/// greater id; both backends therefore see each edge exactly once and with
/// the same orientation.
pub fn walk(scene: &Scene) -> Vec<RenderItem> {
    let mut items = Vec::new();
    let style = scene.style;
    let lattice = scene.lattice;

    if style.fills.enabled {
        for face in select_faces(lattice, style.fills.frequency) {
            let points: Vec<Vec2> = face
                .corners
                .iter()
                .filter_map(|id| lattice.get(id))
                .map(|p| p.current)
                .collect();
            if points.len() == face.corners.len() {
                items.push(RenderItem::Poly { points });
            }
        }
    }

    if style.lines.enabled {
        for point in lattice.points() {
            for neighbor_id in &point.neighbors {
                if neighbor_id.as_str() > point.id.as_str() {
                    continue;
                }
                let Some(neighbor) = lattice.get(neighbor_id) else {
                    continue;
                };
                let key = pair_key(&point.id, neighbor_id);
                if !gate(&edge_gate_key(&key), style.lines.frequency) {
                    continue;
                }
                for primitive in
                    build_stroke(point.current, neighbor.current, &style.lines, &key)
                {
                    items.push(RenderItem::Stroke(primitive));
                }
            }
        }
    }

    if style.points.enabled {
        for point in lattice.points() {
            if !gate(&point_gate_key(&point.id), style.points.frequency) {
                continue;
            }
            items.push(RenderItem::Dot {
                center: point.current,
                diameter: style.points.size,
            });
        }
    }

    items
}
