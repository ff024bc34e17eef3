use std::fs;

use lattice_warp::config::Position;
use lattice_warp::prelude::*;
use lattice_warp_examples::{init_tracing, output_path, save_png, save_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // Drive everything from a persisted document instead of ad-hoc builders,
    // then write the same scene through both export backends.
    let mut document = Document::default();
    document.metadata.name = "export demo".into();
    document.grid.rows = 20;
    document.grid.columns = 28;
    document.grid.spacing = 16.0;
    document.distortion.wells[0].enabled = true;
    document.distortion.wells[0].strength = -0.8;
    document.distortion.wells[0].position = Position::new(216.0, 152.0);
    document.validate()?;

    let lattice = Lattice::generate(&document.lattice_config())?;
    let wells = document.wells();
    let warped = displace(&lattice, &wells, document.distortion.global_strength);
    let style = document.style();
    let scene = Scene::new(&warped, &style);

    save_png(
        &RasterRenderer::render_export(&scene, 2.0)?,
        &output_path("export-raster-x2.png")?,
    )?;
    save_svg(
        &VectorEmitter::new().emit(&scene)?,
        &output_path("export-vector.svg")?,
    )?;

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(output_path("export-document.json")?, &json)?;
    let back: Document = serde_json::from_str(&json)?;
    anyhow::ensure!(back == document, "document did not round trip");
    Ok(())
}
