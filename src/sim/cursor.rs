//! The shared rotating cursor
//!
//! One cursor sweeps all four rings; its angle is the sole timing reference
//! a key trigger is tested against.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::angle::normalize_angle;
use crate::consts::CURSOR_STEP_DEG;
use crate::polar_to_cartesian;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cursor {
    /// Current angle in degrees, [0, 360)
    pub angle_deg: f32,
    /// Whether the cursor is advancing
    pub running: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            running: false,
        }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin advancing. Returns true only on the stopped -> running
    /// transition so the caller knows to arm the tick; already-running
    /// cursors are left alone.
    pub fn start(&mut self) -> bool {
        if self.running {
            false
        } else {
            self.running = true;
            true
        }
    }

    /// Advance one tick step. The scheduler only delivers ticks while
    /// running, so the angle never moves while paused.
    pub fn advance(&mut self) {
        self.angle_deg = normalize_angle(self.angle_deg + CURSOR_STEP_DEG);
    }

    /// Stop advancing if currently running. Never restarts; resuming takes
    /// a `start` call, which picks up from the current angle.
    pub fn toggle_pause(&mut self) {
        if self.running {
            self.running = false;
        }
    }

    /// Endpoints of the cursor ray between two radii (for rendering)
    pub fn ray(&self, inner: f32, outer: f32) -> (Vec2, Vec2) {
        (
            polar_to_cartesian(inner, self.angle_deg),
            polar_to_cartesian(outer, self.angle_deg),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ARENA_RADIUS, CURSOR_HUB_RADIUS};

    #[test]
    fn test_start_is_idempotent() {
        let mut cursor = Cursor::new();
        assert!(cursor.start());
        assert!(cursor.running);
        assert!(!cursor.start());
        assert!(cursor.running);
    }

    #[test]
    fn test_advance_steps_and_wraps() {
        let mut cursor = Cursor::new();
        cursor.start();
        cursor.advance();
        assert_eq!(cursor.angle_deg, CURSOR_STEP_DEG);

        // A full revolution lands back on zero exactly
        let mut cursor = Cursor::new();
        cursor.start();
        for _ in 0..180 {
            cursor.advance();
        }
        assert_eq!(cursor.angle_deg, 0.0);
    }

    #[test]
    fn test_toggle_pause_only_stops() {
        let mut cursor = Cursor::new();
        cursor.toggle_pause();
        assert!(!cursor.running);

        cursor.start();
        cursor.toggle_pause();
        assert!(!cursor.running);
        cursor.toggle_pause();
        assert!(!cursor.running);
    }

    #[test]
    fn test_resume_keeps_angle() {
        let mut cursor = Cursor::new();
        cursor.start();
        for _ in 0..10 {
            cursor.advance();
        }
        cursor.toggle_pause();
        let paused_at = cursor.angle_deg;
        assert!(cursor.start());
        assert_eq!(cursor.angle_deg, paused_at);
    }

    #[test]
    fn test_ray_endpoints() {
        let cursor = Cursor::new();
        let (hub, tip) = cursor.ray(CURSOR_HUB_RADIUS, ARENA_RADIUS);
        assert!((hub.length() - CURSOR_HUB_RADIUS).abs() < 0.001);
        assert!((tip.length() - ARENA_RADIUS).abs() < 0.001);
        // Angle zero points along +x
        assert!(hub.y.abs() < 0.001);
        assert!(tip.y.abs() < 0.001);
    }
}
