//! Visual styling for the three render layers.
//!
//! A [`StyleConfig`] bundles per-layer settings for points, lines and fills
//! plus the canvas background. Frequencies gate how many elements of a layer
//! are drawn; they feed the deterministic hash gates, so the same value always
//! keeps the same elements.
pub mod color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::texture::TextureKind;

pub use crate::style::color::Color;

/// Point layer settings.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub enabled: bool,
    /// Disc diameter in world units.
    pub size: f32,
    pub color: Color,
    /// Fraction of points drawn, in `[0, 1]`.
    pub frequency: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 3.0,
            color: Color::rgb(0x22, 0x22, 0x22),
            frequency: 1.0,
        }
    }
}

/// Line layer settings.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub enabled: bool,
    /// Stroke width in world units.
    pub width: f32,
    pub color: Color,
    /// Fraction of edges drawn, in `[0, 1]`.
    pub frequency: f32,
    /// Stroke construction strategy.
    pub texture: TextureKind,
    /// Bow of solid strokes in `[-1, 1]`; ignored by strategies without
    /// curvature support.
    pub curvature: f32,
    /// Scale of per-segment angle wobble, in `[0, 1]`.
    pub angle_variation: f32,
    /// Scale of per-segment length wobble, in `[0, 1]`.
    pub length_variation: f32,
    /// Scale of per-gap width wobble, in `[0, 1]`.
    pub spacing_variation: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 1.5,
            color: Color::rgb(0x44, 0x44, 0x44),
            frequency: 1.0,
            texture: TextureKind::Solid,
            curvature: 0.0,
            angle_variation: 0.5,
            length_variation: 0.5,
            spacing_variation: 0.5,
        }
    }
}

/// Fill layer settings for lattice faces.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub enabled: bool,
    pub color: Color,
    /// Fraction of faces drawn, in `[0, 1]`.
    pub frequency: f32,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::rgba(0x88, 0x66, 0xcc, 0x66),
            frequency: 0.3,
        }
    }
}

/// Canvas settings.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasStyle {
    pub background: Color,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xf5, 0xf2, 0xec),
        }
    }
}

/// Complete styling for a scene. Layers draw back to front: fills, lines,
/// points.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleConfig {
    pub points: PointStyle,
    pub lines: LineStyle,
    pub fills: FillStyle,
    pub canvas: CanvasStyle,
}

impl StyleConfig {
    /// Sets the point layer.
    pub fn with_points(mut self, points: PointStyle) -> Self {
        self.points = points;
        self
    }

    /// Sets the line layer.
    pub fn with_lines(mut self, lines: LineStyle) -> Self {
        self.lines = lines;
        self
    }

    /// Sets the fill layer.
    pub fn with_fills(mut self, fills: FillStyle) -> Self {
        self.fills = fills;
        self
    }

    /// Sets the canvas settings.
    pub fn with_canvas(mut self, canvas: CanvasStyle) -> Self {
        self.canvas = canvas;
        self
    }

    /// Validates every layer, returning an error if any knob is out of range.
    pub fn validate(&self) -> Result<()> {
        check_unit("points.frequency", self.points.frequency)?;
        check_unit("lines.frequency", self.lines.frequency)?;
        check_unit("fills.frequency", self.fills.frequency)?;
        check_unit("lines.angle_variation", self.lines.angle_variation)?;
        check_unit("lines.length_variation", self.lines.length_variation)?;
        check_unit("lines.spacing_variation", self.lines.spacing_variation)?;
        if !self.points.size.is_finite() || self.points.size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "points.size must be finite and > 0, got {}",
                self.points.size
            )));
        }
        if !self.lines.width.is_finite() || self.lines.width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "lines.width must be finite and > 0, got {}",
                self.lines.width
            )));
        }
        if !(-1.0..=1.0).contains(&self.lines.curvature) {
            return Err(Error::InvalidConfig(format!(
                "lines.curvature must be in [-1, 1], got {}",
                self.lines.curvature
            )));
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidConfig(format!(
            "{field} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}
