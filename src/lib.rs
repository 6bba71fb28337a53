//! Roto Rings - a four-ring reflex timing game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (angles, targets, rings, cursor, session)
//! - `clock`: Single-threaded timer queue driving the 10 ms tick cadence
//!
//! Window creation, widget wiring, and pixel rendering live with an external
//! collaborator; this crate owns state, geometry invariants, and the
//! update/evaluation loop, and exposes read access for drawing.

pub mod clock;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Tick period for cursor advance and score refresh (milliseconds)
    pub const TICK_PERIOD_MS: u64 = 10;
    /// Cursor angular step per tick (degrees)
    pub const CURSOR_STEP_DEG: f32 = 2.0;

    /// Number of concentric rings
    pub const RING_COUNT: usize = 4;

    /// Target arc extent ceiling (degrees)
    pub const TARGET_EXTENT_MAX: f32 = 30.0;
    /// Extent shrink per hit (degrees)
    pub const HIT_SHRINK_DEG: f32 = 1.0;
    /// Extent growth per miss (degrees)
    pub const MISS_GROW_DEG: f32 = 2.0;
    /// Score reward per hit
    pub const HIT_REWARD: u32 = 1;
    /// Score penalty per miss (score saturates at zero)
    pub const MISS_PENALTY: u32 = 2;

    /// Arena dimensions - outermost ring edge
    pub const ARENA_RADIUS: f32 = 140.0;
    /// Radial band width of each ring
    pub const RING_BAND_WIDTH: f32 = 25.0;
    /// Cursor ray starts at this radius and runs out to the arena edge
    pub const CURSOR_HUB_RADIUS: f32 = 25.0;
}

/// Convert polar (r, angle in degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(r * rad.cos(), r * rad.sin())
}
