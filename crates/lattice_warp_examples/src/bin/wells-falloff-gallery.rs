use lattice_warp::prelude::*;
use lattice_warp_examples::{build_lattice, init_tracing, lattice_center, output_path, save_png};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // Same lattice and well for every frame; only the falloff curve differs.
    // Distortion is turned up a little so the character of each profile is
    // visible in the jitter near the well's rim.
    for falloff in [
        Falloff::Linear,
        Falloff::Quadratic,
        Falloff::Exponential,
        Falloff::Smooth,
    ] {
        let lattice = build_lattice(Topology::Triangular, 26, 26, 20.0)?;
        let center = lattice_center(&lattice);
        let well = Well::new("gallery", center)
            .with_strength(0.85)
            .with_radius(240.0)
            .with_falloff(falloff)
            .with_distortion(0.25);
        let warped = displace(&lattice, &[well], 1.2);

        let mut style = StyleConfig::default();
        style.points.enabled = false;
        let scene = Scene::new(&warped, &style);

        let name = format!("wells-falloff-{falloff:?}.png").to_lowercase();
        save_png(
            &RasterRenderer::render_export(&scene, 2.0)?,
            &output_path(&name)?,
        )?;
    }
    Ok(())
}
