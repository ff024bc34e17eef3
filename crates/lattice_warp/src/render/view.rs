//! View transform and export sizing.

use glam::Vec2;
use mint::Vector2;
use tracing::warn;

use crate::error::{Error, Result};
use crate::lattice::Lattice;

/// World-unit padding added on every side of the content bounds by both
/// export paths.
pub const EXPORT_PADDING: f32 = 20.0;

/// Largest raster export dimension per axis, in pixels.
pub const MAX_DIMENSION: u64 = 16_384;

/// Largest raster export pixel count.
pub const MAX_PIXELS: u64 = 268_435_456;

/// Pan plus uniform zoom mapping world coordinates to screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub pan: Vec2,
    pub zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    /// Creates a transform from a pan offset and zoom factor.
    pub fn new(pan: impl Into<Vector2<f32>>, zoom: f32) -> Self {
        Self {
            pan: Vec2::from(pan.into()),
            zoom,
        }
    }

    /// World to screen.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        point * self.zoom + self.pan
    }

    /// Screen back to world.
    pub fn invert(&self, point: Vec2) -> Vec2 {
        (point - self.pan) / self.zoom
    }
}

/// Axis-aligned box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Grows the box by `padding` on every side.
    pub fn padded(&self, padding: f32) -> Bounds {
        Bounds {
            min: self.min - Vec2::splat(padding),
            max: self.max + Vec2::splat(padding),
        }
    }
}

/// Bounding box of the displaced point positions, or `None` for an empty
/// lattice.
pub fn content_bounds(lattice: &Lattice) -> Option<Bounds> {
    let mut points = lattice.points().iter();
    let first = points.next()?.current;
    let mut bounds = Bounds {
        min: first,
        max: first,
    };
    for point in points {
        bounds.min = bounds.min.min(point.current);
        bounds.max = bounds.max.max(point.current);
    }
    Some(bounds)
}

/// Raster export dimensions derived from padded content bounds and a
/// magnification factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSize {
    pub width: u32,
    pub height: u32,
    /// World position of the output's top-left corner.
    pub origin: Vec2,
    pub factor: f32,
}

impl ExportSize {
    /// Computes output dimensions, rejecting factors whose output would
    /// exceed [`MAX_DIMENSION`] per axis or [`MAX_PIXELS`] in total.
    pub fn compute(bounds: Bounds, factor: f32) -> Result<ExportSize> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "export factor must be finite and positive, got {factor}"
            )));
        }
        let padded = bounds.padded(EXPORT_PADDING);
        let width = (padded.width() * factor).ceil().max(1.0) as u64;
        let height = (padded.height() * factor).ceil().max(1.0) as u64;
        if width > MAX_DIMENSION || height > MAX_DIMENSION || width * height > MAX_PIXELS {
            let max_factor = max_export_factor(bounds);
            warn!(width, height, max_factor, "rejecting oversized export");
            return Err(Error::ExportTooLarge {
                width,
                height,
                max_factor,
            });
        }
        Ok(ExportSize {
            width: width as u32,
            height: height as u32,
            origin: padded.min,
            factor,
        })
    }

    /// Transform placing the padded world bounds at the output origin.
    pub fn view(&self) -> ViewTransform {
        ViewTransform {
            pan: -self.origin * self.factor,
            zoom: self.factor,
        }
    }
}

/// Largest magnification factor whose export still honors both raster caps.
pub fn max_export_factor(bounds: Bounds) -> f32 {
    let padded = bounds.padded(EXPORT_PADDING);
    let per_axis = (MAX_DIMENSION as f32 / padded.width())
        .min(MAX_DIMENSION as f32 / padded.height());
    let by_pixels = (MAX_PIXELS as f32 / (padded.width() * padded.height())).sqrt();
    // Shave an ulp's worth so ceil() at the returned factor stays in bounds.
    per_axis.min(by_pixels) * 0.9999
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{LatticeConfig, Topology};

    fn bounds(width: f32, height: f32) -> Bounds {
        Bounds {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    #[test]
    fn apply_and_invert_round_trip() {
        let view = ViewTransform::new([12.0_f32, -8.0], 2.5);
        let p = Vec2::new(31.0, 17.0);
        let back = view.invert(view.apply(p));
        assert!((back - p).length() < 1e-4);
    }

    #[test]
    fn default_view_is_identity() {
        let view = ViewTransform::default();
        assert_eq!(view.apply(Vec2::new(5.0, 7.0)), Vec2::new(5.0, 7.0));
    }

    #[test]
    fn content_bounds_spans_the_lattice() {
        let config = LatticeConfig::new(Topology::Square)
            .with_rows(3)
            .with_columns(4)
            .with_spacing(10.0);
        let lattice = Lattice::generate(&config).unwrap();
        let bounds = content_bounds(&lattice).unwrap();
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn export_size_includes_padding() {
        let size = ExportSize::compute(bounds(100.0, 60.0), 2.0).unwrap();
        // (100 + 40) * 2 by (60 + 40) * 2.
        assert_eq!(size.width, 280);
        assert_eq!(size.height, 200);
        assert_eq!(size.origin, Vec2::new(-20.0, -20.0));
    }

    #[test]
    fn export_view_maps_padded_min_to_origin() {
        let size = ExportSize::compute(bounds(100.0, 60.0), 2.0).unwrap();
        let view = size.view();
        assert_eq!(view.apply(Vec2::new(-20.0, -20.0)), Vec2::ZERO);
        assert_eq!(view.apply(Vec2::new(100.0, 60.0)), Vec2::new(240.0, 160.0));
    }

    #[test]
    fn oversized_export_is_rejected_with_a_usable_factor() {
        let bounds = bounds(1000.0, 500.0);
        let err = ExportSize::compute(bounds, 100.0).unwrap_err();
        match err {
            Error::ExportTooLarge {
                width, max_factor, ..
            } => {
                assert_eq!(width, 104_000);
                assert!(max_factor > 1.0);
                // The suggested factor must itself be feasible.
                let size = ExportSize::compute(bounds, max_factor).unwrap();
                assert!(u64::from(size.width) <= MAX_DIMENSION);
                assert!(u64::from(size.height) <= MAX_DIMENSION);
            }
            other => panic!("expected ExportTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_factor_is_invalid() {
        assert!(ExportSize::compute(bounds(10.0, 10.0), 0.0).is_err());
        assert!(ExportSize::compute(bounds(10.0, 10.0), f32::NAN).is_err());
    }

    #[test]
    fn tiny_content_still_gets_one_pixel() {
        let point = Bounds {
            min: Vec2::new(5.0, 5.0),
            max: Vec2::new(5.0, 5.0),
        };
        let size = ExportSize::compute(point, 0.001).unwrap();
        assert!(size.width >= 1);
        assert!(size.height >= 1);
    }
}
