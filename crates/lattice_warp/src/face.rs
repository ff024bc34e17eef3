//! Face selection for the fill layer.
//!
//! Square lattices yield one quad per cell, triangular lattices two
//! triangles. Whether a face is drawn depends only on its key and the fill
//! frequency, so toggling unrelated style knobs never reshuffles the fills.
use tracing::warn;

use crate::hash::gate;
use crate::lattice::{point_id, Lattice, PointId, Topology};

/// A fillable lattice cell, referenced by corner point ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Stable key, also the hash-gate input.
    pub key: String,
    /// Corner ids in draw order, 3 for triangles and 4 for quads.
    pub corners: Vec<PointId>,
}

/// Selects the faces to fill at the given frequency.
///
/// Cells whose corners fall outside the lattice are skipped; a partially
/// regenerated lattice must never panic the fill layer.
pub fn select_faces(lattice: &Lattice, frequency: f32) -> Vec<Face> {
    let rows = lattice.rows();
    let columns = lattice.columns();
    if rows < 2 || columns < 2 {
        return Vec::new();
    }

    let mut faces = Vec::new();
    for row in 0..rows - 1 {
        for col in 0..columns - 1 {
            match lattice.topology() {
                Topology::Square => {
                    let key = format!("face-{row}-{col}");
                    if gate(&key, frequency) {
                        push_face(
                            lattice,
                            &mut faces,
                            key,
                            vec![
                                point_id(row, col),
                                point_id(row, col + 1),
                                point_id(row + 1, col + 1),
                                point_id(row + 1, col),
                            ],
                        );
                    }
                }
                Topology::Triangular => {
                    let (first, second) = triangle_corners(row, col);
                    let key_a = format!("face-{row}-{col}-a");
                    if gate(&key_a, frequency) {
                        push_face(lattice, &mut faces, key_a, first);
                    }
                    let key_b = format!("face-{row}-{col}-b");
                    if gate(&key_b, frequency) {
                        push_face(lattice, &mut faces, key_b, second);
                    }
                }
            }
        }
    }
    faces
}

/// Corner ids of the two triangles in cell `(row, col)`.
///
/// The split follows the row-parity adjacency of the triangular layout: both
/// triangles only use edges that exist in the lattice.
fn triangle_corners(row: u32, col: u32) -> (Vec<PointId>, Vec<PointId>) {
    if row % 2 == 0 {
        (
            vec![
                point_id(row, col),
                point_id(row, col + 1),
                point_id(row + 1, col),
            ],
            vec![
                point_id(row, col + 1),
                point_id(row + 1, col + 1),
                point_id(row + 1, col),
            ],
        )
    } else {
        (
            vec![
                point_id(row, col),
                point_id(row, col + 1),
                point_id(row + 1, col + 1),
            ],
            vec![
                point_id(row, col),
                point_id(row + 1, col + 1),
                point_id(row + 1, col),
            ],
        )
    }
}

fn push_face(lattice: &Lattice, faces: &mut Vec<Face>, key: String, corners: Vec<PointId>) {
    if corners.iter().any(|id| lattice.get(id).is_none()) {
        warn!(key, "skipping face with missing corner");
        return;
    }
    faces.push(Face { key, corners });
}
