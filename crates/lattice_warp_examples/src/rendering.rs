//! Output helpers shared by the example binaries.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{ImageBuffer, Rgba};
use lattice_warp::render::{Pixmap, SvgDocument};
use tracing::info;

/// Initializes a tracing subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Path under the shared `output/` directory, creating it on first use.
pub fn output_path(file_name: &str) -> anyhow::Result<PathBuf> {
    let dir = Path::new("output");
    fs::create_dir_all(dir).context("creating output directory")?;
    Ok(dir.join(file_name))
}

/// Writes a pixmap as a PNG file.
pub fn save_png(pixmap: &Pixmap, path: &Path) -> anyhow::Result<()> {
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
            .context("pixmap buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote png");
    Ok(())
}

/// Writes an SVG document as a file.
pub fn save_svg(svg: &SvgDocument, path: &Path) -> anyhow::Result<()> {
    fs::write(path, svg.as_str()).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote svg");
    Ok(())
}
