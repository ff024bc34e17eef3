use lattice_warp::prelude::*;
use lattice_warp_examples::{build_lattice, init_tracing, lattice_center, output_path, save_png};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let lattice = build_lattice(Topology::Square, 18, 18, 30.0)?;
    let center = lattice_center(&lattice);
    let well = Well::new("swirl", center).with_strength(0.7).with_radius(260.0);
    let warped = displace(&lattice, &[well], 1.0);

    // Solid strokes bow into cubic ribbons once curvature is nonzero.
    let mut solid = StyleConfig::default();
    solid.lines.curvature = 0.7;
    solid.lines.width = 2.0;
    solid.points.enabled = false;

    // Segmented strokes break each edge into dashes with per-edge variation.
    let mut segmented = StyleConfig::default();
    segmented.lines.texture = TextureKind::Segmented;
    segmented.lines.angle_variation = 0.8;
    segmented.lines.length_variation = 0.6;
    segmented.lines.spacing_variation = 0.6;
    segmented.points.enabled = false;

    for (style, name) in [
        (&solid, "textures-solid-curved.png"),
        (&segmented, "textures-segmented.png"),
    ] {
        let scene = Scene::new(&warped, style);
        save_png(
            &RasterRenderer::render_export(&scene, 2.0)?,
            &output_path(name)?,
        )?;
    }
    Ok(())
}
