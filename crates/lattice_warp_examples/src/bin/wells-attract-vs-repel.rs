use lattice_warp::prelude::*;
use lattice_warp_examples::{build_lattice, init_tracing, lattice_center, output_path, save_png};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // One well in the middle of the grid; only the sign of its strength
    // changes. Attraction pulls points toward the center, repulsion pushes
    // them out toward the well's perimeter.
    for (strength, name) in [(0.9_f32, "wells-attract.png"), (-0.9, "wells-repel.png")] {
        let lattice = build_lattice(Topology::Square, 30, 30, 18.0)?;
        let center = lattice_center(&lattice);
        let well = Well::new("center", center)
            .with_strength(strength)
            .with_radius(220.0)
            .with_falloff(Falloff::Linear);
        let warped = displace(&lattice, &[well], 1.0);

        let style = StyleConfig::default();
        let scene = Scene::new(&warped, &style);
        save_png(
            &RasterRenderer::render_export(&scene, 2.0)?,
            &output_path(name)?,
        )?;
    }
    Ok(())
}
