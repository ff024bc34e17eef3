//! Triangular lattice layout and 6-neighbor adjacency.
//!
//! Odd rows shift half a spacing to the right and rows sit `spacing * sqrt(3)/2`
//! apart, so every interior point and its six neighbors form equilateral
//! triangles.
use glam::Vec2;

use crate::lattice::{point_id, LatticeConfig, LatticePoint};

pub(crate) fn layout(config: &LatticeConfig) -> Vec<LatticePoint> {
    let rows = config.rows;
    let columns = config.columns;
    let spacing = config.spacing;
    let row_pitch = spacing * 3.0_f32.sqrt() * 0.5;

    let mut points = Vec::with_capacity(rows as usize * columns as usize);
    for row in 0..rows {
        let row_offset = if row % 2 == 0 { 0.0 } else { spacing * 0.5 };
        for col in 0..columns {
            let seat = Vec2::new(col as f32 * spacing + row_offset, row as f32 * row_pitch);
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

/// In-row neighbors are left/right. Across rows the two nearest columns
/// depend on parity: even rows reach back to `col - 1` and `col`, odd rows
/// reach forward to `col` and `col + 1`.
fn neighbors(row: u32, col: u32, rows: u32, columns: u32) -> Vec<String> {
    let mut out = Vec::with_capacity(6);
    if col > 0 {
        out.push(point_id(row, col - 1));
    }
    if col + 1 < columns {
        out.push(point_id(row, col + 1));
    }
    let diagonals: [i64; 2] = if row % 2 == 0 {
        [col as i64 - 1, col as i64]
    } else {
        [col as i64, col as i64 + 1]
    };
    for adjacent_row in [row as i64 - 1, row as i64 + 1] {
        if adjacent_row < 0 || adjacent_row >= rows as i64 {
            continue;
        }
        for diagonal_col in diagonals {
            if diagonal_col < 0 || diagonal_col >= columns as i64 {
                continue;
            }
            out.push(point_id(adjacent_row as u32, diagonal_col as u32));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Lattice, Topology};

    fn lattice(rows: u32, columns: u32, spacing: f32) -> Lattice {
        let config = LatticeConfig::new(Topology::Triangular)
            .with_rows(rows)
            .with_columns(columns)
            .with_spacing(spacing);
        Lattice::generate(&config).unwrap()
    }

    #[test]
    fn odd_rows_shift_half_a_spacing() {
        let lattice = lattice(4, 4, 10.0);
        assert_eq!(lattice.get("0-0").unwrap().original.x, 0.0);
        assert_eq!(lattice.get("1-0").unwrap().original.x, 5.0);
        assert_eq!(lattice.get("2-0").unwrap().original.x, 0.0);
        assert_eq!(lattice.get("3-2").unwrap().original.x, 25.0);
    }

    #[test]
    fn row_pitch_is_spacing_times_half_sqrt3() {
        let lattice = lattice(3, 3, 10.0);
        let pitch = 10.0 * 3.0_f32.sqrt() * 0.5;
        assert!((lattice.get("1-1").unwrap().original.y - pitch).abs() < 1e-5);
        assert!((lattice.get("2-1").unwrap().original.y - 2.0 * pitch).abs() < 1e-5);
    }

    #[test]
    fn interior_points_have_six_neighbors() {
        let lattice = lattice(5, 5, 10.0);
        for id in ["1-1", "2-2", "3-2", "2-1"] {
            assert_eq!(lattice.get(id).unwrap().neighbors.len(), 6, "{id}");
        }
    }

    #[test]
    fn all_neighbors_sit_one_spacing_away() {
        let lattice = lattice(6, 6, 10.0);
        let p = lattice.get("2-2").unwrap();
        for neighbor_id in &p.neighbors {
            let n = lattice.get(neighbor_id).unwrap();
            let d = (n.original - p.original).length();
            assert!((d - 10.0).abs() < 1e-4, "{neighbor_id} at distance {d}");
        }
    }

    #[test]
    fn parity_picks_the_nearest_diagonal_columns() {
        let lattice = lattice(4, 4, 10.0);
        // Even row: reaches back to col-1 and col in adjacent rows.
        let even = lattice.get("2-2").unwrap();
        assert!(even.neighbors.contains(&"1-1".to_string()));
        assert!(even.neighbors.contains(&"1-2".to_string()));
        assert!(even.neighbors.contains(&"3-1".to_string()));
        assert!(even.neighbors.contains(&"3-2".to_string()));
        // Odd row: reaches forward to col and col+1.
        let odd = lattice.get("1-1").unwrap();
        assert!(odd.neighbors.contains(&"0-1".to_string()));
        assert!(odd.neighbors.contains(&"0-2".to_string()));
        assert!(odd.neighbors.contains(&"2-1".to_string()));
        assert!(odd.neighbors.contains(&"2-2".to_string()));
    }

    #[test]
    fn first_column_of_even_rows_loses_the_back_diagonal() {
        let lattice = lattice(3, 3, 10.0);
        let p = lattice.get("0-0").unwrap();
        // Right neighbor plus the single in-range diagonal below.
        assert_eq!(p.neighbors.len(), 2);
        assert!(p.neighbors.contains(&"0-1".to_string()));
        assert!(p.neighbors.contains(&"1-0".to_string()));
    }
}
