//! CPU raster backend.
//!
//! Draws the shared scene walk into an RGBA8 [`Pixmap`] using scanline
//! even-odd polygon fills. Curved strokes are flattened with a fixed step
//! count, so output bytes are identical across runs for the same scene.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use tracing::info;

use crate::error::{Error, Result};
use crate::render::view::{content_bounds, ExportSize, ViewTransform};
use crate::render::{walk, RenderItem, Scene};
use crate::style::Color;
use crate::texture::StrokePrimitive;

/// Flattening steps per cubic segment of a ribbon outline.
const CUBIC_STEPS: u32 = 16;
/// Screen-space stroke width of a well indicator ring.
const INDICATOR_WIDTH: f32 = 1.5;
/// Screen-space stroke width of the hovered-well emphasis ring.
const EMPHASIS_WIDTH: f32 = 4.0;
/// Angular buckets on the emphasis ring; even buckets are drawn.
const EMPHASIS_STRIPES: f32 = 12.0;
const INDICATOR_COLOR: Color = Color::rgba(0x33, 0x33, 0x33, 0xAA);

/// Rounded integer lerp from `dst` toward `src` by `alpha`.
fn lerp_u8(dst: u8, src: u8, alpha: u8) -> u8 {
    let d = u32::from(dst);
    let s = u32::from(src);
    let a = u32::from(alpha);
    ((d * (255 - a) + s * a + 127) / 255) as u8
}

/// Owned RGBA8 image buffer, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Allocates a transparent-black pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the pixmap and returns the raw bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// RGBA of one pixel, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Source-over blend of one pixel; off-buffer coordinates are ignored.
    fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        if color.a == 0 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if color.a == 255 {
            self.data[idx] = color.r;
            self.data[idx + 1] = color.g;
            self.data[idx + 2] = color.b;
            self.data[idx + 3] = 255;
        } else {
            self.data[idx] = lerp_u8(self.data[idx], color.r, color.a);
            self.data[idx + 1] = lerp_u8(self.data[idx + 1], color.g, color.a);
            self.data[idx + 2] = lerp_u8(self.data[idx + 2], color.b, color.a);
            self.data[idx + 3] = lerp_u8(self.data[idx + 3], 255, color.a);
        }
    }

    /// Scanline even-odd fill. Pixels whose centers fall inside the polygon
    /// are blended; edges shared between spans are painted once.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        if !min_y.is_finite() || !max_y.is_finite() {
            return;
        }
        let y_start = (min_y.floor().max(0.0)) as i64;
        let y_end = (max_y.ceil() as i64).min(i64::from(self.height) - 1);

        let mut crossings: Vec<f32> = Vec::new();
        for y in y_start..=y_end {
            let yc = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                if (a.y <= yc) == (b.y <= yc) {
                    continue;
                }
                crossings.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
            }
            crossings.sort_by(|l, r| l.total_cmp(r));
            for pair in crossings.chunks_exact(2) {
                // Pixel centers in [pair[0], pair[1]).
                let x_start = ((pair[0] - 0.5).ceil() as i64).max(0);
                let x_end = ((pair[1] - 0.5).ceil() as i64).min(i64::from(self.width));
                for x in x_start..x_end {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let x_start = ((center.x - radius).floor() as i64).max(0);
        let x_end = ((center.x + radius).ceil() as i64).min(i64::from(self.width) - 1);
        let y_start = ((center.y - radius).floor() as i64).max(0);
        let y_end = ((center.y + radius).ceil() as i64).min(i64::from(self.height) - 1);
        for y in y_start..=y_end {
            for x in x_start..=x_end {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Fills the quad swept by a segment of the given width.
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let chord = to - from;
        let length = chord.length();
        if length <= f32::EPSILON || width <= 0.0 {
            return;
        }
        let half = Vec2::new(-chord.y, chord.x) / length * (width * 0.5);
        self.fill_polygon(&[from + half, to + half, to - half, from - half], color);
    }

    /// Fills the region between a ribbon's outgoing and returning cubics.
    fn fill_ribbon(
        &mut self,
        from: Vec2,
        to: Vec2,
        ctrl_out: [Vec2; 2],
        ctrl_in: [Vec2; 2],
        color: Color,
    ) {
        let mut outline = Vec::with_capacity(2 * CUBIC_STEPS as usize + 1);
        outline.push(from);
        flatten_cubic(from, ctrl_out[0], ctrl_out[1], to, &mut outline);
        flatten_cubic(to, ctrl_in[0], ctrl_in[1], from, &mut outline);
        // The return cubic ends where the outline started.
        outline.pop();
        self.fill_polygon(&outline, color);
    }

    /// Blends an annulus centered on `center`. With `stripes` set, only even
    /// angular buckets are drawn, producing alternating arcs.
    fn stroke_ring(
        &mut self,
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
        stripes: Option<f32>,
    ) {
        if radius <= 0.0 {
            return;
        }
        let outer = radius + width * 0.5;
        let inner = (radius - width * 0.5).max(0.0);
        let outer2 = outer * outer;
        let inner2 = inner * inner;
        let x_start = ((center.x - outer).floor() as i64).max(0);
        let x_end = ((center.x + outer).ceil() as i64).min(i64::from(self.width) - 1);
        let y_start = ((center.y - outer).floor() as i64).max(0);
        let y_end = ((center.y + outer).ceil() as i64).min(i64::from(self.height) - 1);
        for y in y_start..=y_end {
            for x in x_start..=x_end {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                let dist2 = d.length_squared();
                if dist2 < inner2 || dist2 > outer2 {
                    continue;
                }
                if let Some(stripes) = stripes {
                    let bucket = ((d.y.atan2(d.x) + PI) / (TAU / stripes)) as i64;
                    if bucket % 2 != 0 {
                        continue;
                    }
                }
                self.blend(x, y, color);
            }
        }
    }
}

fn flatten_cubic(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, out: &mut Vec<Vec2>) {
    for i in 1..=CUBIC_STEPS {
        let t = i as f32 / CUBIC_STEPS as f32;
        let u = 1.0 - t;
        out.push(
            p0 * (u * u * u)
                + c1 * (3.0 * u * u * t)
                + c2 * (3.0 * u * t * t)
                + p3 * (t * t * t),
        );
    }
}

/// Raster backend. Renders a [`Scene`] under a [`ViewTransform`].
#[derive(Debug, Clone, Copy)]
pub struct RasterRenderer {
    width: u32,
    height: u32,
    view: ViewTransform,
}

impl RasterRenderer {
    /// Creates a renderer targeting a `width` by `height` pixmap with an
    /// identity view.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            view: ViewTransform::default(),
        }
    }

    /// Replaces the view transform.
    pub fn with_view(mut self, view: ViewTransform) -> Self {
        self.view = view;
        self
    }

    /// Draws the scene: canvas background, shared walk, then the well
    /// indicator overlay.
    pub fn render(&self, scene: &Scene) -> Pixmap {
        let mut pixmap = Pixmap::new(self.width, self.height);
        pixmap.fill(scene.style.canvas.background);
        let items = walk(scene);
        for item in &items {
            self.draw_item(&mut pixmap, item, scene);
        }
        self.draw_indicators(&mut pixmap, scene);
        info!(
            width = self.width,
            height = self.height,
            items = items.len(),
            "rendered raster frame"
        );
        pixmap
    }

    /// Renders a standalone export of the scene content at `factor` pixels
    /// per world unit. Indicators are omitted; they are a screen affordance.
    pub fn render_export(scene: &Scene, factor: f32) -> Result<Pixmap> {
        let bounds = content_bounds(scene.lattice)
            .ok_or_else(|| Error::InvalidConfig("cannot export an empty lattice".into()))?;
        let size = ExportSize::compute(bounds, factor)?;
        info!(
            factor,
            width = size.width,
            height = size.height,
            "rendering raster export"
        );
        let renderer = RasterRenderer::new(size.width, size.height).with_view(size.view());
        let export_scene = Scene {
            wells: &[],
            hovered_well: None,
            ..*scene
        };
        Ok(renderer.render(&export_scene))
    }

    fn draw_item(&self, pixmap: &mut Pixmap, item: &RenderItem, scene: &Scene) {
        let zoom = self.view.zoom;
        match item {
            RenderItem::Poly { points } => {
                let screen: Vec<Vec2> = points.iter().map(|p| self.view.apply(*p)).collect();
                pixmap.fill_polygon(&screen, scene.style.fills.color);
            }
            RenderItem::Stroke(StrokePrimitive::Segment { from, to, width }) => {
                pixmap.stroke_segment(
                    self.view.apply(*from),
                    self.view.apply(*to),
                    width * zoom,
                    scene.style.lines.color,
                );
            }
            RenderItem::Stroke(StrokePrimitive::Ribbon {
                from,
                to,
                ctrl_out,
                ctrl_in,
            }) => {
                pixmap.fill_ribbon(
                    self.view.apply(*from),
                    self.view.apply(*to),
                    [self.view.apply(ctrl_out[0]), self.view.apply(ctrl_out[1])],
                    [self.view.apply(ctrl_in[0]), self.view.apply(ctrl_in[1])],
                    scene.style.lines.color,
                );
            }
            RenderItem::Dot { center, diameter } => {
                pixmap.fill_circle(
                    self.view.apply(*center),
                    diameter * 0.5 * zoom,
                    scene.style.points.color,
                );
            }
        }
    }

    fn draw_indicators(&self, pixmap: &mut Pixmap, scene: &Scene) {
        for well in scene.wells {
            let center = self.view.apply(well.position);
            let radius = well.radius * self.view.zoom;
            pixmap.stroke_ring(center, radius, INDICATOR_WIDTH, INDICATOR_COLOR, None);
            if scene.hovered_well == Some(well.id.as_str()) {
                pixmap.stroke_ring(
                    center,
                    radius,
                    EMPHASIS_WIDTH,
                    INDICATOR_COLOR,
                    Some(EMPHASIS_STRIPES),
                );
            }
        }
    }
}
