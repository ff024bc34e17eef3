#![forbid(unsafe_code)]
//! lattice_warp: deterministic lattice deformation with raster and vector rendering.
//!
//! Modules:
//! - hash: the stable string-keyed hash driving every stylistic decision
//! - lattice: square and triangular point lattices with neighbor adjacency
//! - field: wells that attract, repel, and jitter lattice points
//! - style, texture, face: stroke and fill construction over the lattice
//! - render: one shared scene walk feeding a raster and a vector backend
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod face;
pub mod field;
pub mod hash;
pub mod lattice;
pub mod render;
pub mod style;
pub mod texture;

#[cfg(feature = "serde")]
pub mod config;

/// Convenient re-exports for common types. Import with `use lattice_warp::prelude::*;`.
pub mod prelude {
    #[cfg(feature = "serde")]
    pub use crate::config::{Document, DOCUMENT_VERSION};
    pub use crate::error::{Error, Result};
    pub use crate::face::{select_faces, Face};
    pub use crate::field::{displace, Falloff, Well, WellId};
    pub use crate::hash::{hash01, pair_key};
    pub use crate::lattice::{Lattice, LatticeConfig, LatticePoint, PointId, Topology};
    pub use crate::render::{
        content_bounds, walk, Bounds, ExportSize, Pixmap, RasterRenderer, RenderItem, Scene,
        SvgDocument, VectorEmitter, ViewTransform,
    };
    pub use crate::style::{
        CanvasStyle, Color, FillStyle, LineStyle, PointStyle, StyleConfig,
    };
    pub use crate::texture::{build_stroke, StrokePrimitive, TextureKind};
}
