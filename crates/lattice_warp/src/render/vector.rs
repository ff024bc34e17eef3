//! SVG vector backend.
//!
//! Emits the shared scene walk as standalone SVG markup. Coordinates stay in
//! world units and the viewBox covers the padded content bounds, so the
//! framing matches the raster export without rasterizing anything. Well
//! indicators never appear here; they are a screen affordance.

use std::fmt;

use glam::Vec2;
use tracing::info;

use crate::error::{Error, Result};
use crate::render::view::{content_bounds, EXPORT_PADDING};
use crate::render::{walk, RenderItem, Scene};
use crate::style::Color;
use crate::texture::StrokePrimitive;

/// A complete SVG document with its world-unit dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f32,
    height: f32,
    content: String,
}

impl SvgDocument {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Full SVG markup.
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

fn fill_attrs(color: Color) -> String {
    if color.a == 255 {
        format!(r#"fill="{}""#, color.to_hex_rgb())
    } else {
        format!(
            r#"fill="{}" fill-opacity="{:.3}""#,
            color.to_hex_rgb(),
            color.opacity()
        )
    }
}

fn stroke_attrs(color: Color, width: f32) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{:.2}""#,
        color.to_hex_rgb(),
        width
    );
    if color.a < 255 {
        attrs.push_str(&format!(r#" stroke-opacity="{:.3}""#, color.opacity()));
    }
    attrs
}

fn pt(p: Vec2) -> String {
    format!("{:.2} {:.2}", p.x, p.y)
}

/// Vector backend. Emits a [`Scene`] as an [`SvgDocument`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorEmitter;

impl VectorEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Emits the scene as SVG markup framed on the padded content bounds.
    pub fn emit(&self, scene: &Scene) -> Result<SvgDocument> {
        let bounds = content_bounds(scene.lattice)
            .ok_or_else(|| Error::InvalidConfig("cannot export an empty lattice".into()))?;
        let padded = bounds.padded(EXPORT_PADDING);
        let width = padded.width();
        let height = padded.height();

        let mut elements = Vec::new();
        elements.push(format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}/>"#,
            padded.min.x,
            padded.min.y,
            width,
            height,
            fill_attrs(scene.style.canvas.background)
        ));

        for item in walk(scene) {
            match item {
                RenderItem::Poly { points } => {
                    let coords: Vec<String> = points
                        .iter()
                        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                        .collect();
                    elements.push(format!(
                        r#"<polygon points="{}" {}/>"#,
                        coords.join(" "),
                        fill_attrs(scene.style.fills.color)
                    ));
                }
                RenderItem::Stroke(StrokePrimitive::Segment { from, to, width }) => {
                    elements.push(format!(
                        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        stroke_attrs(scene.style.lines.color, width)
                    ));
                }
                RenderItem::Stroke(StrokePrimitive::Ribbon {
                    from,
                    to,
                    ctrl_out,
                    ctrl_in,
                }) => {
                    elements.push(format!(
                        r#"<path d="M {} C {}, {}, {} C {}, {}, {} Z" {}/>"#,
                        pt(from),
                        pt(ctrl_out[0]),
                        pt(ctrl_out[1]),
                        pt(to),
                        pt(ctrl_in[0]),
                        pt(ctrl_in[1]),
                        pt(from),
                        fill_attrs(scene.style.lines.color)
                    ));
                }
                RenderItem::Dot { center, diameter } => {
                    elements.push(format!(
                        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                        center.x,
                        center.y,
                        diameter * 0.5,
                        fill_attrs(scene.style.points.color)
                    ));
                }
            }
        }

        info!(
            elements = elements.len(),
            width,
            height,
            "emitted svg document"
        );
        let content = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.2} {:.2} {:.2} {:.2}\" width=\"{:.2}\" height=\"{:.2}\">\n{}\n</svg>",
            padded.min.x,
            padded.min.y,
            width,
            height,
            width,
            height,
            elements.join("\n")
        );
        Ok(SvgDocument {
            width,
            height,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Well;
    use crate::lattice::{Lattice, LatticeConfig, Topology};
    use crate::style::StyleConfig;
    use crate::texture::TextureKind;

    fn lattice(rows: u32, columns: u32) -> Lattice {
        let config = LatticeConfig::new(Topology::Square)
            .with_rows(rows)
            .with_columns(columns)
            .with_spacing(10.0);
        Lattice::generate(&config).unwrap()
    }

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn document_has_header_viewbox_and_background() {
        let lattice = lattice(3, 3);
        let style = StyleConfig::default();
        let svg = VectorEmitter::new()
            .emit(&Scene::new(&lattice, &style))
            .unwrap();
        let text = svg.as_str();
        assert!(text.starts_with("<?xml version=\"1.0\""));
        assert!(text.contains(r#"viewBox="-20.00 -20.00 60.00 60.00""#));
        assert!(text.contains(r#"<rect x="-20.00" y="-20.00""#));
        assert_eq!(svg.width(), 60.0);
        assert_eq!(svg.height(), 60.0);
    }

    #[test]
    fn solid_straight_edges_become_lines() {
        let lattice = lattice(3, 3);
        let style = StyleConfig::default();
        let svg = VectorEmitter::new()
            .emit(&Scene::new(&lattice, &style))
            .unwrap();
        // 12 grid edges and 9 point discs.
        assert_eq!(occurrences(svg.as_str(), "<line "), 12);
        assert_eq!(occurrences(svg.as_str(), "<circle "), 9);
    }

    #[test]
    fn curved_edges_become_filled_paths() {
        let lattice = lattice(3, 3);
        let mut style = StyleConfig::default();
        style.lines.curvature = 0.8;
        let svg = VectorEmitter::new()
            .emit(&Scene::new(&lattice, &style))
            .unwrap();
        assert_eq!(occurrences(svg.as_str(), "<path "), 12);
        assert_eq!(occurrences(svg.as_str(), "<line "), 0);
    }

    #[test]
    fn segmented_edges_emit_multiple_lines() {
        let lattice = lattice(3, 3);
        let mut style = StyleConfig::default();
        style.lines.texture = TextureKind::Segmented;
        let svg = VectorEmitter::new()
            .emit(&Scene::new(&lattice, &style))
            .unwrap();
        assert!(occurrences(svg.as_str(), "<line ") > 12);
    }

    #[test]
    fn enabled_fills_emit_polygons_with_opacity() {
        let lattice = lattice(3, 3);
        let mut style = StyleConfig::default();
        style.fills.enabled = true;
        style.fills.frequency = 1.0;
        let svg = VectorEmitter::new()
            .emit(&Scene::new(&lattice, &style))
            .unwrap();
        assert_eq!(occurrences(svg.as_str(), "<polygon "), 4);
        // The default fill color is translucent.
        assert!(svg.as_str().contains("fill-opacity="));
    }

    #[test]
    fn wells_never_appear_in_vector_output() {
        let lattice = lattice(3, 3);
        let style = StyleConfig::default();
        let wells = [Well::new("w-1", [10.0_f32, 10.0])];
        let plain = VectorEmitter::new()
            .emit(&Scene::new(&lattice, &style))
            .unwrap();
        let with_wells = VectorEmitter::new()
            .emit(
                &Scene::new(&lattice, &style)
                    .with_wells(&wells)
                    .with_hovered_well("w-1"),
            )
            .unwrap();
        assert_eq!(plain, with_wells);
    }

    #[test]
    fn output_is_deterministic() {
        let lattice = lattice(5, 4);
        let mut style = StyleConfig::default();
        style.lines.texture = TextureKind::Segmented;
        style.points.frequency = 0.7;
        let scene = Scene::new(&lattice, &style);
        let a = VectorEmitter::new().emit(&scene).unwrap();
        let b = VectorEmitter::new().emit(&scene).unwrap();
        assert_eq!(a, b);
    }
}
