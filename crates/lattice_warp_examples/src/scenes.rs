//! Small scene-construction helpers shared by the example binaries.

use glam::Vec2;
use lattice_warp::prelude::*;

/// Builds a validated lattice from demo parameters.
pub fn build_lattice(
    topology: Topology,
    rows: u32,
    columns: u32,
    spacing: f32,
) -> anyhow::Result<Lattice> {
    let config = LatticeConfig::new(topology)
        .with_rows(rows)
        .with_columns(columns)
        .with_spacing(spacing);
    config.validate()?;
    Ok(Lattice::generate(&config)?)
}

/// Center of the lattice content, a natural spot for a demo well.
pub fn lattice_center(lattice: &Lattice) -> Vec2 {
    content_bounds(lattice)
        .map(|b| (b.min + b.max) * 0.5)
        .unwrap_or(Vec2::ZERO)
}
