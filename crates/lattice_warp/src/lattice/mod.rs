//! Regular point lattices and their adjacency.
//!
//! A [`Lattice`] is the substrate every other module works on: a grid of
//! [`LatticePoint`]s, each carrying its undisturbed seat (`original`), its
//! displaced position (`current`) and a symmetric neighbor list. Lattices are
//! rebuilt from scratch whenever a structural parameter changes; there is no
//! incremental update path.
pub mod square;
pub mod triangular;

use std::collections::HashMap;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Identifier of a lattice point, formatted as `"row-col"`.
pub type PointId = String;

/// Lattice layout kinds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Square,
    Triangular,
}

/// One lattice site.
#[derive(Debug, Clone)]
pub struct LatticePoint {
    /// Stable identifier, `"row-col"`.
    pub id: PointId,
    /// Undisturbed seat assigned at generation time.
    pub original: Vec2,
    /// Displaced position; equals `original` on a fresh lattice.
    pub current: Vec2,
    /// Ids of adjacent points. Symmetric: if `b` lists `a`, `a` lists `b`.
    pub neighbors: Vec<PointId>,
}

/// Parameters for lattice generation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeConfig {
    /// Layout kind.
    pub topology: Topology,
    /// Number of rows, at least 1.
    pub rows: u32,
    /// Number of columns, at least 1.
    pub columns: u32,
    /// Base distance between horizontal neighbors in world units.
    pub spacing: f32,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Square,
            rows: 25,
            columns: 25,
            spacing: 20.0,
        }
    }
}

impl LatticeConfig {
    /// Creates a new [`LatticeConfig`] with the specified topology.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Default::default()
        }
    }

    /// Sets the row count.
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the column count.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the horizontal spacing in world units.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 {
            return Err(Error::InvalidConfig("rows must be >= 1".into()));
        }
        if self.columns < 1 {
            return Err(Error::InvalidConfig("columns must be >= 1".into()));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "spacing must be finite and > 0, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}

/// Formats the canonical id of the point at `(row, col)`.
pub fn point_id(row: u32, col: u32) -> PointId {
    format!("{row}-{col}")
}

/// A generated lattice: points in row-major order plus an id index.
#[derive(Debug, Clone)]
pub struct Lattice {
    topology: Topology,
    rows: u32,
    columns: u32,
    spacing: f32,
    points: Vec<LatticePoint>,
    index: HashMap<PointId, usize>,
}

impl Lattice {
    /// Generates a fresh lattice from `config`. Every call is a full rebuild.
    pub fn generate(config: &LatticeConfig) -> Result<Lattice> {
        config.validate()?;
        let points = match config.topology {
            Topology::Square => square::layout(config),
            Topology::Triangular => triangular::layout(config),
        };
        let index = points
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        info!(
            topology = ?config.topology,
            rows = config.rows,
            columns = config.columns,
            points = points.len(),
            "generated lattice"
        );
        Ok(Lattice {
            topology: config.topology,
            rows: config.rows,
            columns: config.columns,
            spacing: config.spacing,
            points,
            index,
        })
    }

    /// Layout kind of this lattice.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Row count.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column count.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Horizontal spacing in world units.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// All points in row-major order.
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    /// Looks up a point by id.
    pub fn get(&self, id: &str) -> Option<&LatticePoint> {
        self.index.get(id).map(|&i| &self.points[i])
    }

    /// Number of points, always `rows * columns`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the lattice holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a copy of this lattice with every point's `current` position
    /// replaced by `f(point)`. Seats and adjacency are preserved.
    pub fn map_currents(&self, mut f: impl FnMut(&LatticePoint) -> Vec2) -> Lattice {
        let mut out = self.clone();
        for point in &mut out.points {
            let next = f(point);
            point.current = next;
        }
        out
    }
}
