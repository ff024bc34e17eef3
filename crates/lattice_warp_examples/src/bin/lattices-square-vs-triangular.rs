use lattice_warp::prelude::*;
use lattice_warp_examples::{build_lattice, init_tracing, output_path, save_png};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // Same row/column counts and spacing for both runs; only the adjacency
    // rule differs. The triangular run shows the odd-row offset and the six
    // interior neighbors.
    for (topology, name) in [
        (Topology::Square, "lattices-square.png"),
        (Topology::Triangular, "lattices-triangular.png"),
    ] {
        let lattice = build_lattice(topology, 24, 24, 22.0)?;
        let style = StyleConfig::default();
        let scene = Scene::new(&lattice, &style);
        let pixmap = RasterRenderer::render_export(&scene, 2.0)?;
        save_png(&pixmap, &output_path(name)?)?;
    }
    Ok(())
}
