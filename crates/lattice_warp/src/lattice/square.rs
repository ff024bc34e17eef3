//! Square lattice layout and 4-neighbor adjacency.
use glam::Vec2;

use crate::lattice::{point_id, LatticeConfig, LatticePoint};

/// Lays out `rows x columns` points at `(col * spacing, row * spacing)` with
/// left/right/up/down adjacency.
pub(crate) fn layout(config: &LatticeConfig) -> Vec<LatticePoint> {
    let rows = config.rows;
    let columns = config.columns;
    let spacing = config.spacing;

    let mut points = Vec::with_capacity(rows as usize * columns as usize);
    for row in 0..rows {
        for col in 0..columns {
            let seat = Vec2::new(col as f32 * spacing, row as f32 * spacing);
            points.push(LatticePoint {
                id: point_id(row, col),
                original: seat,
                current: seat,
                neighbors: neighbors(row, col, rows, columns),
            });
        }
    }
    points
}

fn neighbors(row: u32, col: u32, rows: u32, columns: u32) -> Vec<String> {
    let mut out = Vec::with_capacity(4);
    if col > 0 {
        out.push(point_id(row, col - 1));
    }
    if col + 1 < columns {
        out.push(point_id(row, col + 1));
    }
    if row > 0 {
        out.push(point_id(row - 1, col));
    }
    if row + 1 < rows {
        out.push(point_id(row + 1, col));
    }
    out
}
