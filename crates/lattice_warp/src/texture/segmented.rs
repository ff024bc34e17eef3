//! Segmented stroke strategy.
//!
//! Breaks an edge into 3 to 5 pieces along the chord, each with its own
//! hash-derived angle, length and trailing-gap wobble. An end buffer keeps
//! the wobbling terminal pieces clear of the endpoints, where neighboring
//! strokes meet.
use glam::Vec2;

use crate::hash::hash01;
use crate::style::LineStyle;
use crate::texture::StrokePrimitive;

/// Angular wobble bound at full variation, in degrees.
const MAX_ANGLE_DEGREES: f32 = 3.0;
/// Length wobble bound at full variation, as a fraction of the piece.
const MAX_LENGTH_EXTENSION: f32 = 0.12;
/// Gap wobble bound at full variation, as a fraction of the gap.
const MAX_GAP_EXTENSION: f32 = 0.40;
/// Terminal clearance floor in world units.
const MIN_END_BUFFER: f32 = 2.0;

pub(crate) fn build(
    from: Vec2,
    to: Vec2,
    style: &LineStyle,
    key: &str,
) -> Vec<StrokePrimitive> {
    let chord = to - from;
    let length = chord.length();
    if length <= f32::EPSILON {
        return Vec::new();
    }
    let dir = chord / length;

    let count = segment_count(key);
    let buffer = end_buffer(length, count as f32);
    let usable = length - 2.0 * buffer;
    if usable <= f32::EPSILON {
        return Vec::new();
    }

    // One nominal gap is a quarter of a piece's share of the span.
    let gap = usable / (count as f32 * 4.0);
    let piece = (usable - gap * (count as f32 - 1.0)) / count as f32;
    let limit = buffer + usable;

    let mut cursor = buffer;
    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let angle = wobble(key, index, "angle")
            * MAX_ANGLE_DEGREES.to_radians()
            * style.angle_variation;
        let length_scale = 1.0 + wobble(key, index, "length")
            * MAX_LENGTH_EXTENSION
            * style.length_variation;
        let gap_scale = 1.0 + wobble(key, index, "gap")
            * MAX_GAP_EXTENSION
            * style.spacing_variation;

        let mut piece_length = piece * length_scale;
        if cursor + piece_length > limit {
            piece_length = limit - cursor;
        }
        if piece_length <= f32::EPSILON {
            break;
        }

        let start = from + dir * cursor;
        let heading = Vec2::from_angle(angle).rotate(dir);
        out.push(StrokePrimitive::Segment {
            from: start,
            to: start + heading * piece_length,
            width: style.width,
        });
        cursor += piece_length + gap * gap_scale;
    }
    out
}

/// Piece count in 3..=5, hashed from the edge key.
fn segment_count(key: &str) -> usize {
    3 + (hash01(&format!("{key}-segcount")) * 3.0).floor() as usize
}

/// Signed wobble in `[-1, 1)` for one piece attribute.
fn wobble(key: &str, index: usize, attribute: &str) -> f32 {
    hash01(&format!("{key}-seg-{index}-{attribute}")) * 2.0 - 1.0
}

/// Clearance each endpoint keeps from the wobbling pieces: the worst-case
/// length extension plus angular sweep of one nominal piece, floored.
fn end_buffer(length: f32, count: f32) -> f32 {
    let piece = length / count;
    let worst =
        piece * MAX_LENGTH_EXTENSION * 0.5 + piece * MAX_ANGLE_DEGREES.to_radians().sin();
    worst.max(MIN_END_BUFFER)
}
