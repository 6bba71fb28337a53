//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod angle;
pub mod arc;
pub mod cursor;
pub mod ring;
pub mod session;
pub mod target;

pub use angle::{in_interval, normalize_angle};
pub use arc::{ArcBand, RingBand};
pub use cursor::Cursor;
pub use ring::{KeyOutcome, Ring, RingColor};
pub use session::{GameSession, KEY_BINDINGS, Scoreboard, TickToken};
pub use target::Target;
