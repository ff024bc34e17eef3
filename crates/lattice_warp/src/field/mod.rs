//! Deformation wells and the displacement pass.
//!
//! A [`Well`] is a circular field that attracts or repels lattice points.
//! [`displace`] recomputes every point's `current` position from its
//! `original` seat, so repeated passes never compound: the field is a pure
//! function of the configuration, not of previous output.
pub mod falloff;

use glam::Vec2;
use mint::Vector2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hash::{jitter_seed, unit_noise};
use crate::lattice::Lattice;

pub use crate::field::falloff::Falloff;

/// Identifier of a well.
pub type WellId = String;

/// Positional jitter in world units at full distortion and full influence.
pub const JITTER_SCALE: f32 = 10.0;

/// Distance below which a point counts as sitting on the well center.
const CENTER_EPSILON: f32 = 1e-6;

/// A circular deformation field.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Well {
    /// Unique identifier, referenced by the jitter stream.
    pub id: WellId,
    /// Center in world units.
    pub position: Vec2,
    /// Signed strength in `[-1, 1]`; positive attracts, negative repels.
    pub strength: f32,
    /// Influence radius in world units, > 0.
    pub radius: f32,
    /// Decay curve between center and radius.
    pub falloff: Falloff,
    /// Jitter amount in `[0, 1]`.
    pub distortion: f32,
    /// Disabled wells contribute nothing.
    pub enabled: bool,
}

impl Well {
    /// Creates a new attracting [`Well`] at the specified position.
    pub fn new(id: impl Into<WellId>, position: impl Into<Vector2<f32>>) -> Self {
        Self {
            id: id.into(),
            position: Vec2::from(position.into()),
            strength: 0.5,
            radius: 150.0,
            falloff: Falloff::default(),
            distortion: 0.0,
            enabled: true,
        }
    }

    /// Sets the signed strength.
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Sets the influence radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the falloff curve.
    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    /// Sets the jitter amount.
    pub fn with_distortion(mut self, distortion: f32) -> Self {
        self.distortion = distortion;
        self
    }

    /// Enables or disables the well.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Validates the well parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(-1.0..=1.0).contains(&self.strength) {
            return Err(Error::InvalidConfig(format!(
                "well '{}': strength must be in [-1, 1], got {}",
                self.id, self.strength
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "well '{}': radius must be finite and > 0, got {}",
                self.id, self.radius
            )));
        }
        if !(0.0..=1.0).contains(&self.distortion) {
            return Err(Error::InvalidConfig(format!(
                "well '{}': distortion must be in [0, 1], got {}",
                self.id, self.distortion
            )));
        }
        Ok(())
    }

    /// Offset this well contributes to a point seated at `original`.
    fn contribution(&self, point_id: &str, original: Vec2, global_strength: f32) -> Vec2 {
        let delta = original - self.position;
        let distance = delta.length();
        if distance >= self.radius {
            return Vec2::ZERO;
        }

        let influence = self.falloff.apply(distance / self.radius);
        let effective = (self.strength * influence * global_strength).abs();
        let mut offset = Vec2::ZERO;

        // A point on the exact center has no ray to move along; it still
        // receives jitter below.
        if distance > CENTER_EPSILON {
            if self.strength > 0.0 {
                // Attract: lerp toward the center, converging fully as the
                // influence approaches 1.
                offset += (self.position - original) * effective;
            } else if self.strength < 0.0 {
                // Repel: walk the ray through the original seat toward the
                // rim. Measuring from the center keeps full-strength linear
                // repulsion exactly on the radius circle.
                let ray = delta / distance;
                offset += ray * self.radius * effective;
            }
        }

        if self.distortion > 0.0 {
            let seed = jitter_seed(point_id, &self.id);
            let amplitude = self.distortion * influence * JITTER_SCALE;
            offset.x += (unit_noise(seed, 0) * 2.0 - 1.0) * amplitude;
            offset.y += (unit_noise(seed, 1) * 2.0 - 1.0) * amplitude;
        }

        offset
    }
}

/// Applies every enabled well to the lattice and returns the displaced copy.
///
/// Contributions are summed without clamping, so overlapping wells may push
/// points outside the nominal canvas. `global_strength` scales the
/// directional pull of every well; jitter is governed by the per-well
/// distortion alone.
pub fn displace(lattice: &Lattice, wells: &[Well], global_strength: f32) -> Lattice {
    debug!(
        wells = wells.len(),
        global_strength, "recomputing displaced positions"
    );
    lattice.map_currents(|point| {
        let mut offset = Vec2::ZERO;
        for well in wells {
            if !well.enabled || well.radius <= 0.0 {
                continue;
            }
            offset += well.contribution(&point.id, point.original, global_strength);
        }
        point.original + offset
    })
}
