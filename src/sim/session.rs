//! Session lifecycle, key routing, and the tick scheduling contract
//!
//! A session owns the cursor, the four rings, and the seeded RNG. Periodic
//! work is delivered as ticks tagged with an epoch token: `reset` bumps the
//! epoch, so callbacks queued against a discarded session are rejected on
//! delivery instead of silently mutating the replacement.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arc::RingBand;
use super::cursor::Cursor;
use super::ring::{KeyOutcome, Ring, RingColor};
use crate::consts::RING_COUNT;

/// Key bindings in ring order, outermost ring first
///
/// A fixed table: event wiring looks indices up here instead of capturing
/// loop variables in per-ring closures.
pub const KEY_BINDINGS: [(char, RingColor); RING_COUNT] = [
    ('a', RingColor::Green),
    ('s', RingColor::LightBlue),
    ('d', RingColor::Yellow),
    ('f', RingColor::Red),
];

/// Re-arm token for one scheduled tick
///
/// Minted by the session and handed back on every delivered tick. A token
/// from before a `reset` carries a stale epoch and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    epoch: u64,
}

/// Per-ring and total scores at one observation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub rings: [u32; RING_COUNT],
    pub total: u32,
}

/// The complete game: one cursor, four rings, one seeded RNG
#[derive(Debug, Clone)]
pub struct GameSession {
    pub cursor: Cursor,
    pub rings: [Ring; RING_COUNT],
    seed: u64,
    rng: Pcg32,
    epoch: u64,
}

impl GameSession {
    /// Build a fresh session: cursor at 0 degrees and stopped, each ring
    /// independently initialized with a full-width target
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rings = std::array::from_fn(|i| {
            let (_, color) = KEY_BINDINGS[i];
            Ring::new(i, color, RingBand::for_index(i), &mut rng)
        });
        log::info!("Session built with seed {seed}");
        Self {
            cursor: Cursor::new(),
            rings,
            seed,
            rng,
            epoch: 0,
        }
    }

    fn token(&self) -> TickToken {
        TickToken { epoch: self.epoch }
    }

    /// Start the cursor. On the stopped -> running transition returns the
    /// token the scheduler arms as the first cursor tick; `None` when
    /// already running.
    pub fn start(&mut self) -> Option<TickToken> {
        if self.cursor.start() {
            log::info!("Session started");
            Some(self.token())
        } else {
            None
        }
    }

    /// Token for arming the score-observation tick. Armed once when the
    /// display is wired up, and re-obtained after every `reset`.
    pub fn score_token(&self) -> TickToken {
        self.token()
    }

    /// Pause the cursor; a second pause is a no-op, resuming takes `start`
    pub fn pause(&mut self) {
        self.cursor.toggle_pause();
    }

    /// Discard all game state and rebuild from a fresh seed
    ///
    /// Every outstanding tick token becomes stale, so nothing queued
    /// against the old session can touch the new one.
    pub fn reset(&mut self, seed: u64) {
        let epoch = self.epoch + 1;
        *self = Self::new(seed);
        self.epoch = epoch;
        log::info!("Session reset (epoch {epoch})");
    }

    /// Deliver one cursor-advance tick
    ///
    /// Returns the re-arm token for the next tick, or `None` when the token
    /// is stale or the cursor is paused - rescheduling simply stops, and
    /// `start` mints a fresh token.
    pub fn cursor_tick(&mut self, token: TickToken) -> Option<TickToken> {
        if token.epoch != self.epoch || !self.cursor.running {
            return None;
        }
        self.cursor.advance();
        Some(self.token())
    }

    /// Deliver one score-observation tick: a read-only snapshot for the
    /// display layer. Unlike the cursor tick it keeps re-arming while
    /// paused; only a stale token stops it.
    pub fn score_tick(&self, token: TickToken) -> Option<(Scoreboard, TickToken)> {
        if token.epoch != self.epoch {
            return None;
        }
        Some((self.scoreboard(), self.token()))
    }

    /// Route a key press to its ring
    ///
    /// Unknown keys and presses while the cursor is stopped are silently
    /// ignored; `Some` carries the scored outcome.
    pub fn on_key(&mut self, key: char) -> Option<KeyOutcome> {
        if !self.cursor.running {
            return None;
        }
        let index = KEY_BINDINGS.iter().position(|&(k, _)| k == key)?;
        let outcome = self.rings[index].evaluate(self.cursor.angle_deg, &mut self.rng);
        log::debug!(
            "Key '{key}' on ring {index}: {outcome:?} at {:.0} degrees",
            self.cursor.angle_deg
        );
        Some(outcome)
    }

    /// Sum of the four ring scores, recomputed on demand
    pub fn total_score(&self) -> u32 {
        self.rings.iter().map(|r| r.score).sum()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        let rings: [u32; RING_COUNT] = std::array::from_fn(|i| self.rings[i].score);
        Scoreboard {
            rings,
            total: rings.iter().sum(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
