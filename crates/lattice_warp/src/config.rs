//! Persisted document format.
//!
//! A [`Document`] is the JSON shape editors built on this crate save and
//! load. The library interprets the grid, style, and distortion sections;
//! metadata timestamps and lock flags are carried verbatim, never parsed.
//! Keys are camelCase on the wire to stay compatible with documents written
//! by earlier tooling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::{Falloff, Well};
use crate::lattice::{LatticeConfig, Topology};
use crate::render::ViewTransform;
use crate::style::{CanvasStyle, FillStyle, LineStyle, PointStyle, StyleConfig};

/// Format version this crate reads and writes.
pub const DOCUMENT_VERSION: u32 = 1;

/// Most wells a document may carry.
pub const MAX_WELLS: usize = 100;

/// Authoring metadata. Timestamps are RFC 3339 text, stored as given.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub modified_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: "untitled".into(),
            description: None,
            created_at: String::new(),
            modified_at: String::new(),
            tags: None,
            author: None,
        }
    }
}

/// A 2D coordinate in document form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One well as persisted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellConfig {
    pub id: String,
    pub position: Position,
    pub strength: f32,
    pub radius: f32,
    pub falloff: Falloff,
    pub distortion: f32,
    pub enabled: bool,
}

impl WellConfig {
    /// Bridges to the runtime well type.
    pub fn to_well(&self) -> Well {
        Well::new(self.id.clone(), [self.position.x, self.position.y])
            .with_strength(self.strength)
            .with_radius(self.radius)
            .with_falloff(self.falloff)
            .with_distortion(self.distortion)
            .with_enabled(self.enabled)
    }
}

impl Default for WellConfig {
    fn default() -> Self {
        Self {
            id: "well-1".into(),
            position: Position::new(240.0, 240.0),
            strength: 0.5,
            radius: 150.0,
            falloff: Falloff::Smooth,
            distortion: 0.0,
            enabled: false,
        }
    }
}

/// Lattice shape plus the four style layers.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    #[serde(rename = "type")]
    pub topology: Topology,
    pub rows: u32,
    pub columns: u32,
    pub spacing: f32,
    pub points: PointStyle,
    pub lines: LineStyle,
    pub fill: FillStyle,
    pub canvas: CanvasStyle,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            topology: Topology::Square,
            rows: 25,
            columns: 25,
            spacing: 20.0,
            points: PointStyle::default(),
            lines: LineStyle::default(),
            fill: FillStyle::default(),
            canvas: CanvasStyle::default(),
        }
    }
}

/// Global strength plus the well list.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistortionSection {
    pub global_strength: f32,
    pub wells: Vec<WellConfig>,
}

impl Default for DistortionSection {
    fn default() -> Self {
        Self {
            global_strength: 1.0,
            wells: vec![WellConfig::default()],
        }
    }
}

/// Saved pan/zoom state.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
    #[serde(default)]
    pub include_in_export: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            include_in_export: false,
        }
    }
}

/// Named UI lock flags, carried as an open map for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locks(pub BTreeMap<String, bool>);

/// The complete persisted document.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: u32,
    pub metadata: Metadata,
    pub grid: GridSection,
    pub distortion: DistortionSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locks: Option<Locks>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            metadata: Metadata::default(),
            grid: GridSection::default(),
            distortion: DistortionSection::default(),
            viewport: None,
            locks: None,
        }
    }
}

impl Document {
    /// Checks every documented bound, reporting all offending fields in one
    /// message.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.version != DOCUMENT_VERSION {
            problems.push(format!(
                "version {} is not supported, expected {DOCUMENT_VERSION}",
                self.version
            ));
        }
        check_u32(&mut problems, "grid.rows", self.grid.rows, 5, 100);
        check_u32(&mut problems, "grid.columns", self.grid.columns, 5, 100);
        check_f32(&mut problems, "grid.spacing", self.grid.spacing, 5.0, 50.0);
        match self.style().validate() {
            Ok(()) => {}
            Err(Error::InvalidConfig(message)) => problems.push(message),
            Err(other) => problems.push(other.to_string()),
        }
        check_f32(
            &mut problems,
            "distortion.globalStrength",
            self.distortion.global_strength,
            0.0,
            2.0,
        );
        if self.distortion.wells.len() > MAX_WELLS {
            problems.push(format!(
                "distortion.wells holds {} wells, limit is {MAX_WELLS}",
                self.distortion.wells.len()
            ));
        }
        for well in &self.distortion.wells {
            if well.id.is_empty() {
                problems.push("well id must not be empty".into());
            }
            let id = well.id.as_str();
            check_f32(
                &mut problems,
                &format!("wells[{id}].strength"),
                well.strength,
                -1.0,
                1.0,
            );
            check_f32(
                &mut problems,
                &format!("wells[{id}].radius"),
                well.radius,
                50.0,
                500.0,
            );
            check_f32(
                &mut problems,
                &format!("wells[{id}].distortion"),
                well.distortion,
                0.0,
                1.0,
            );
        }
        if let Some(viewport) = &self.viewport {
            if !viewport.zoom.is_finite() || viewport.zoom <= 0.0 {
                problems.push(format!(
                    "viewport.zoom must be positive, got {}",
                    viewport.zoom
                ));
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(problems.join("; ")))
        }
    }

    /// Lattice parameters for [`crate::lattice::Lattice::generate`].
    pub fn lattice_config(&self) -> LatticeConfig {
        LatticeConfig::new(self.grid.topology)
            .with_rows(self.grid.rows)
            .with_columns(self.grid.columns)
            .with_spacing(self.grid.spacing)
    }

    /// Style layers as the runtime type.
    pub fn style(&self) -> StyleConfig {
        let mut style = StyleConfig::default();
        style.points = self.grid.points.clone();
        style.lines = self.grid.lines.clone();
        style.fills = self.grid.fill.clone();
        style.canvas = self.grid.canvas.clone();
        style
    }

    /// Runtime wells, enabled or not.
    pub fn wells(&self) -> Vec<Well> {
        self.distortion.wells.iter().map(WellConfig::to_well).collect()
    }

    /// Saved view as a transform, if the document carries one.
    pub fn view_transform(&self) -> Option<ViewTransform> {
        self.viewport
            .as_ref()
            .map(|v| ViewTransform::new([v.x, v.y], v.zoom))
    }
}

fn check_u32(problems: &mut Vec<String>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        problems.push(format!("{field} must be in [{min}, {max}], got {value}"));
    }
}

fn check_f32(problems: &mut Vec<String>, field: &str, value: f32, min: f32, max: f32) {
    if !value.is_finite() || value < min || value > max {
        problems.push(format!("{field} must be in [{min}, {max}], got {value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_valid() {
        let document = Document::default();
        assert!(document.validate().is_ok());
        assert_eq!(document.version, DOCUMENT_VERSION);
        assert_eq!(document.distortion.wells.len(), 1);
        assert!(!document.distortion.wells[0].enabled);
    }

    #[test]
    fn json_round_trip_preserves_the_document() {
        let mut document = Document::default();
        document.metadata.name = "study 12".into();
        document.metadata.created_at = "2024-03-01T10:00:00Z".into();
        document.grid.topology = Topology::Triangular;
        document.distortion.wells[0].enabled = true;
        document.viewport = Some(Viewport {
            x: 40.0,
            y: -12.5,
            zoom: 1.5,
            include_in_export: true,
        });
        let mut locks = BTreeMap::new();
        locks.insert("grid".to_string(), true);
        document.locks = Some(Locks(locks));

        let json = serde_json::to_string_pretty(&document).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(document, back);
    }

    #[test]
    fn json_keys_are_camel_case() {
        let mut document = Document::default();
        document.viewport = Some(Viewport::default());
        let json = serde_json::to_string(&document).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"modifiedAt\""));
        assert!(json.contains("\"globalStrength\""));
        assert!(json.contains("\"includeInExport\""));
        assert!(json.contains("\"type\":\"square\""));
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let json = r##"{
            "version": 1,
            "metadata": {
                "name": "bare",
                "createdAt": "2024-01-01T00:00:00Z",
                "modifiedAt": "2024-01-01T00:00:00Z"
            },
            "grid": {
                "type": "triangular",
                "rows": 10,
                "columns": 12,
                "spacing": 18.0,
                "points": {"enabled": true, "size": 3.0, "color": "#222222", "frequency": 1.0},
                "lines": {
                    "enabled": true, "width": 1.5, "color": "#444444",
                    "frequency": 1.0, "texture": "solid", "curvature": 0.0,
                    "angleVariation": 0.5, "lengthVariation": 0.5, "spacingVariation": 0.5
                },
                "fill": {"enabled": false, "color": "#8866cc66", "frequency": 0.3},
                "canvas": {"background": "#f5f2ec"}
            },
            "distortion": {"globalStrength": 1.0, "wells": []}
        }"##;
        let document: Document = serde_json::from_str(json).unwrap();
        assert!(document.validate().is_ok());
        assert_eq!(document.grid.topology, Topology::Triangular);
        assert!(document.viewport.is_none());
        assert!(document.locks.is_none());
        assert!(document.wells().is_empty());
    }

    #[test]
    fn unknown_grid_type_fails_to_parse() {
        let json = r##"{"type": "hex", "rows": 10, "columns": 10, "spacing": 20.0,
            "points": {"enabled": true, "size": 3.0, "color": "#222222", "frequency": 1.0},
            "lines": {"enabled": true, "width": 1.5, "color": "#444444", "frequency": 1.0,
                "texture": "solid", "curvature": 0.0, "angleVariation": 0.5,
                "lengthVariation": 0.5, "spacingVariation": 0.5},
            "fill": {"enabled": false, "color": "#8866cc66", "frequency": 0.3},
            "canvas": {"background": "#f5f2ec"}}"##;
        assert!(serde_json::from_str::<GridSection>(json).is_err());
    }

    #[test]
    fn validation_reports_every_offending_field() {
        let mut document = Document::default();
        document.grid.rows = 3;
        document.grid.spacing = 90.0;
        document.distortion.global_strength = 5.0;
        document.distortion.wells[0].strength = 2.0;
        document.distortion.wells[0].radius = 10.0;
        let err = document.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("grid.rows"));
        assert!(message.contains("grid.spacing"));
        assert!(message.contains("globalStrength"));
        assert!(message.contains("wells[well-1].strength"));
        assert!(message.contains("wells[well-1].radius"));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut document = Document::default();
        document.version = 2;
        let err = document.validate().unwrap_err();
        assert!(err.to_string().contains("version 2"));
    }

    #[test]
    fn well_count_limit_is_enforced() {
        let mut document = Document::default();
        document.distortion.wells = (0..101)
            .map(|i| {
                let mut well = WellConfig::default();
                well.id = format!("well-{i}");
                well
            })
            .collect();
        let err = document.validate().unwrap_err();
        assert!(err.to_string().contains("101"));
    }

    #[test]
    fn bridges_produce_runtime_types() {
        let mut document = Document::default();
        document.viewport = Some(Viewport {
            x: 10.0,
            y: 20.0,
            zoom: 2.0,
            include_in_export: false,
        });
        let lattice_config = document.lattice_config();
        assert!(lattice_config.validate().is_ok());
        let lattice = crate::lattice::Lattice::generate(&lattice_config).unwrap();
        assert_eq!(lattice.len(), 25 * 25);

        let wells = document.wells();
        assert_eq!(wells.len(), 1);
        assert_eq!(wells[0].id, "well-1");
        assert_eq!(wells[0].radius, 150.0);

        let view = document.view_transform().unwrap();
        assert_eq!(view.zoom, 2.0);
        assert_eq!(view.pan, glam::Vec2::new(10.0, 20.0));
    }
}
