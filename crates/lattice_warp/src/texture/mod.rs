//! Stroke construction strategies for lattice edges.
//!
//! Strategies turn an edge (two displaced positions plus the line style) into
//! renderer-agnostic [`StrokePrimitive`]s. Both render backends consume the
//! exact same primitives, which is what keeps raster and vector output
//! geometrically identical.
pub mod segmented;
pub mod solid;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::style::LineStyle;

/// Geometry emitted by a stroke strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokePrimitive {
    /// Straight stroke of the given width.
    Segment { from: Vec2, to: Vec2, width: f32 },
    /// Closed outline traversed `from` -> cubic(`ctrl_out`) -> `to` ->
    /// cubic(`ctrl_in`) -> `from`, always filled rather than stroked so the
    /// apparent width survives scale-independent export.
    Ribbon {
        from: Vec2,
        to: Vec2,
        ctrl_out: [Vec2; 2],
        ctrl_in: [Vec2; 2],
    },
}

/// Stroke strategy of the line layer.
///
/// A closed set on purpose: renderers dispatch with `match`, and adding a
/// strategy is a compile-time change every backend has to answer to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureKind {
    /// One continuous stroke, optionally bowed by the curvature knob.
    #[default]
    Solid,
    /// Three to five jittered pieces with gaps; ignores curvature.
    Segmented,
}

impl TextureKind {
    /// Whether the strategy responds to the curvature knob.
    pub fn supports_curvature(self) -> bool {
        match self {
            TextureKind::Solid => true,
            TextureKind::Segmented => false,
        }
    }
}

/// Builds the primitives for one edge.
///
/// `key` is the canonical pair key of the edge; identical key and style always
/// produce identical geometry, no matter which backend asks.
pub fn build_stroke(from: Vec2, to: Vec2, style: &LineStyle, key: &str) -> Vec<StrokePrimitive> {
    match style.texture {
        TextureKind::Solid => solid::build(from, to, style),
        TextureKind::Segmented => segmented::build(from, to, style, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curvature_support_depends_on_the_strategy() {
        assert!(TextureKind::Solid.supports_curvature());
        assert!(!TextureKind::Segmented.supports_curvature());
    }

    #[test]
    fn build_stroke_dispatches_on_the_style_texture() {
        let from = Vec2::ZERO;
        let to = Vec2::new(40.0, 0.0);
        let mut style = LineStyle::default();

        style.texture = TextureKind::Solid;
        let solid = build_stroke(from, to, &style, "a:b");
        assert_eq!(solid.len(), 1);

        style.texture = TextureKind::Segmented;
        let segmented = build_stroke(from, to, &style, "a:b");
        assert!(segmented.len() >= 3);
    }

    #[test]
    fn identical_inputs_build_identical_strokes() {
        let from = Vec2::new(3.0, 4.0);
        let to = Vec2::new(43.0, -8.0);
        let mut style = LineStyle::default();
        style.texture = TextureKind::Segmented;
        assert_eq!(
            build_stroke(from, to, &style, "1-2:1-3"),
            build_stroke(from, to, &style, "1-2:1-3")
        );
    }
}
