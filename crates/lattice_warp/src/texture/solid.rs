//! Solid stroke strategy.
//!
//! Near-zero curvature yields a plain segment. Otherwise the stroke becomes a
//! filled ribbon: perpendicular offsets at the 1/3 and 2/3 chord points bow
//! the outline by `curvature * width / 2`, and the two cubic edges sit half a
//! width to either side of that bow.
use glam::Vec2;

use crate::style::LineStyle;
use crate::texture::StrokePrimitive;

/// Curvature magnitudes below this draw as straight segments.
const STRAIGHT_EPSILON: f32 = 0.01;

pub(crate) fn build(from: Vec2, to: Vec2, style: &LineStyle) -> Vec<StrokePrimitive> {
    if style.curvature.abs() < STRAIGHT_EPSILON {
        return vec![StrokePrimitive::Segment {
            from,
            to,
            width: style.width,
        }];
    }

    let chord = to - from;
    let length = chord.length();
    if length <= f32::EPSILON {
        return Vec::new();
    }
    let perp = Vec2::new(-chord.y, chord.x) / length;
    let bulge = style.curvature * style.width * 0.5;
    let outward = perp * (bulge + style.width * 0.5);
    let inward = perp * (bulge - style.width * 0.5);
    let third = from + chord / 3.0;
    let two_thirds = from + chord * (2.0 / 3.0);

    vec![StrokePrimitive::Ribbon {
        from,
        to,
        ctrl_out: [third + outward, two_thirds + outward],
        ctrl_in: [two_thirds + inward, third + inward],
    }]
}
