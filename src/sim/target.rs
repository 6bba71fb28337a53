//! Target arc placement
//!
//! A target is the arc a key press is tested against. The owning ring
//! decides the extent; regeneration only rolls a fresh start angle.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One ring's target arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Arc start angle in degrees, integer-valued, kept raw for the
    /// interval test (a roll of 360 is never reduced to 0)
    pub start_deg: f32,
    /// Arc width in degrees
    pub extent_deg: f32,
}

impl Target {
    /// Place a fresh target at a uniform random start angle in 0..=360
    pub fn generate(rng: &mut impl Rng, extent_deg: f32) -> Self {
        Self {
            start_deg: rng.random_range(0..=360) as f32,
            extent_deg,
        }
    }
}
