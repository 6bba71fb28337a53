//! Ring band and arc geometry
//!
//! In polar coordinates, a ring band is defined by:
//! - radius: centerline distance from the arena center
//! - thickness: radial extent (inner = radius - thickness/2, outer = radius + thickness/2)
//!
//! An arc band adds angular placement (start, extent) within such a band.
//! This is read-side geometry for the rendering collaborator; hit testing
//! works on the target's raw angles, not on these normalized values.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::angle::normalize_angle;
use crate::consts::{ARENA_RADIUS, RING_BAND_WIDTH};
use crate::polar_to_cartesian;

/// The radial band one ring occupies (a full annulus)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingBand {
    /// Centerline radius from arena center
    pub radius: f32,
    /// Radial thickness (extends radius ± thickness/2)
    pub thickness: f32,
}

impl RingBand {
    /// Band geometry for ring `index`, counted outermost first
    pub fn for_index(index: usize) -> Self {
        Self {
            radius: ARENA_RADIUS - RING_BAND_WIDTH * (index as f32 + 0.5),
            thickness: RING_BAND_WIDTH,
        }
    }

    /// Inner radius of the band
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.thickness / 2.0
    }

    /// Outer radius of the band
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.thickness / 2.0
    }
}

/// A thickened arc within a ring band, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcBand {
    /// Centerline radius from arena center
    pub radius: f32,
    /// Radial thickness
    pub thickness: f32,
    /// Start angle (degrees, normalized to [0, 360) for drawing)
    pub start_deg: f32,
    /// Angular extent (degrees)
    pub extent_deg: f32,
}

impl ArcBand {
    pub fn new(radius: f32, thickness: f32, start_deg: f32, extent_deg: f32) -> Self {
        Self {
            radius,
            thickness,
            start_deg: normalize_angle(start_deg),
            extent_deg,
        }
    }

    /// Inner radius of the arc band
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.thickness / 2.0
    }

    /// Outer radius of the arc band
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.thickness / 2.0
    }

    /// Raw end angle; may exceed 360 for arcs placed near the top of the range
    #[inline]
    pub fn end_deg(&self) -> f32 {
        self.start_deg + self.extent_deg
    }

    /// Centerline endpoints of the arc (for rendering or debugging)
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (
            polar_to_cartesian(self.radius, self.start_deg),
            polar_to_cartesian(self.radius, self.end_deg()),
        )
    }

    /// Sample points along the arc centerline (for rendering or debugging)
    pub fn sample_centerline(&self, num_points: usize) -> Vec<Vec2> {
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                let deg = self.start_deg + t * self.extent_deg;
                polar_to_cartesian(self.radius, deg)
            })
            .collect()
    }
}
