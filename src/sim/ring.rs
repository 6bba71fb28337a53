//! Ring state and the hit/shrink/grow scoring policy
//!
//! Each ring owns one live target, a score, and the target extent that
//! carries across regenerations. Hits tighten the extent, misses relax it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::angle::in_interval;
use super::arc::{ArcBand, RingBand};
use super::target::Target;
use crate::consts::*;

/// Ring identity for external key/color binding; game logic never reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingColor {
    Green,
    LightBlue,
    Yellow,
    Red,
}

impl RingColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RingColor::Green => "green",
            RingColor::LightBlue => "lightblue",
            RingColor::Yellow => "yellow",
            RingColor::Red => "red",
        }
    }
}

/// Outcome of a key trigger, reported to the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Hit,
    Miss,
}

/// One concentric ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    /// Position in the session's ring array, 0 = outermost
    pub index: usize,
    pub color: RingColor,
    /// Radial band this ring occupies (for rendering)
    pub band: RingBand,
    /// The live target; replaced wholesale on every evaluation
    pub target: Target,
    /// Target width in degrees. Persists across regenerations, unlike the
    /// start angle. No lower floor: enough consecutive hits shrink it to
    /// zero or below, leaving the target unhittable until misses grow it
    /// back.
    pub target_extent: f32,
    pub score: u32,
}

impl Ring {
    pub fn new(index: usize, color: RingColor, band: RingBand, rng: &mut impl Rng) -> Self {
        Self {
            index,
            color,
            band,
            target: Target::generate(rng, TARGET_EXTENT_MAX),
            target_extent: TARGET_EXTENT_MAX,
            score: 0,
        }
    }

    /// Score a key trigger against the current cursor angle
    ///
    /// Tests the cursor against the live target, adapts difficulty, and
    /// rolls a replacement target at the adjusted extent. The session only
    /// routes triggers here while the cursor is running.
    pub fn evaluate(&mut self, cursor_deg: f32, rng: &mut impl Rng) -> KeyOutcome {
        let hit = in_interval(cursor_deg, self.target.start_deg, self.target_extent);
        if hit {
            self.target_extent -= HIT_SHRINK_DEG;
            self.score += HIT_REWARD;
        } else {
            self.target_extent += MISS_GROW_DEG;
            self.score = self.score.saturating_sub(MISS_PENALTY);
        }
        // Ceiling only; the extent may go to zero or below
        self.target_extent = self.target_extent.min(TARGET_EXTENT_MAX);
        self.target = Target::generate(rng, self.target_extent);
        if hit { KeyOutcome::Hit } else { KeyOutcome::Miss }
    }

    /// The live target as drawable arc geometry
    pub fn target_arc(&self) -> ArcBand {
        ArcBand::new(
            self.band.radius,
            self.band.thickness,
            self.target.start_deg,
            self.target.extent_deg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_ring(rng: &mut Pcg32) -> Ring {
        Ring::new(0, RingColor::Green, RingBand::for_index(0), rng)
    }

    #[test]
    fn test_new_ring_defaults() {
        let mut rng = Pcg32::seed_from_u64(1);
        let ring = test_ring(&mut rng);
        assert_eq!(ring.score, 0);
        assert_eq!(ring.target_extent, TARGET_EXTENT_MAX);
        assert_eq!(ring.target.extent_deg, TARGET_EXTENT_MAX);
    }

    #[test]
    fn test_hit_shrinks_target_and_scores() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ring = test_ring(&mut rng);
        ring.target = Target { start_deg: 45.0, extent_deg: 30.0 };

        let outcome = ring.evaluate(50.0, &mut rng);

        assert_eq!(outcome, KeyOutcome::Hit);
        assert_eq!(ring.score, 1);
        assert_eq!(ring.target_extent, 29.0);
        // Replacement target rolled at the tightened extent
        assert_eq!(ring.target.extent_deg, 29.0);
    }

    #[test]
    fn test_miss_grows_target_clamped_to_ceiling() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ring = test_ring(&mut rng);
        ring.target = Target { start_deg: 45.0, extent_deg: 30.0 };

        let outcome = ring.evaluate(100.0, &mut rng);

        assert_eq!(outcome, KeyOutcome::Miss);
        // 30 + 2 clamps back down to the ceiling
        assert_eq!(ring.target_extent, TARGET_EXTENT_MAX);
        assert_eq!(ring.score, 0);
    }

    #[test]
    fn test_miss_grows_target_below_ceiling() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ring = test_ring(&mut rng);
        ring.target_extent = 20.0;
        ring.target = Target { start_deg: 45.0, extent_deg: 20.0 };

        ring.evaluate(100.0, &mut rng);

        assert_eq!(ring.target_extent, 22.0);
    }

    #[test]
    fn test_score_saturates_at_zero() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ring = test_ring(&mut rng);
        ring.score = 1;
        ring.target = Target { start_deg: 45.0, extent_deg: 30.0 };

        ring.evaluate(100.0, &mut rng);

        assert_eq!(ring.score, 0);
    }

    #[test]
    fn test_score_and_extent_invariants_hold() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut ring = test_ring(&mut rng);
        for deg in 0..720 {
            ring.evaluate((deg % 360) as f32, &mut rng);
            assert!(ring.target_extent <= TARGET_EXTENT_MAX);
            assert_eq!(ring.target.extent_deg, ring.target_extent);
        }
    }

    #[test]
    fn test_no_extent_floor() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ring = test_ring(&mut rng);

        // Force hits by pressing exactly at the target start each time
        for _ in 0..30 {
            let start = ring.target.start_deg;
            assert_eq!(ring.evaluate(start, &mut rng), KeyOutcome::Hit);
        }
        assert_eq!(ring.target_extent, 0.0);

        // Extent 0 still matches a press exactly at the start angle
        let start = ring.target.start_deg;
        assert_eq!(ring.evaluate(start, &mut rng), KeyOutcome::Hit);
        assert_eq!(ring.target_extent, -1.0);

        // Negative extent matches nothing, even the start angle itself
        let start = ring.target.start_deg;
        assert_eq!(ring.evaluate(start, &mut rng), KeyOutcome::Miss);
        assert_eq!(ring.target_extent, 1.0);
    }

    #[test]
    fn test_target_arc_tracks_band_and_target() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ring = test_ring(&mut rng);
        ring.target = Target { start_deg: 45.0, extent_deg: 25.0 };

        let arc = ring.target_arc();
        assert_eq!(arc.radius, ring.band.radius);
        assert_eq!(arc.thickness, ring.band.thickness);
        assert_eq!(arc.start_deg, 45.0);
        assert_eq!(arc.extent_deg, 25.0);
    }
}
