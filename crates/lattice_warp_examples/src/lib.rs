#![forbid(unsafe_code)]

mod rendering;
mod scenes;

pub use rendering::{init_tracing, output_path, save_png, save_svg};
pub use scenes::{build_lattice, lattice_center};
