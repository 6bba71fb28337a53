//! Deterministic scheduling primitive
//!
//! A single-threaded timer queue with manual time advance: the simulation
//! consumes only "fire this event once after N milliseconds". Ticks re-arm
//! themselves through the tokens the session hands back, so stopping
//! rescheduling (pause) or staling the token (reset) ends a tick chain
//! without touching the queue.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::consts::TICK_PERIOD_MS;
use crate::sim::{GameSession, Scoreboard, TickToken};

/// A scheduled tick, tagged with the token minted when it was armed
#[derive(Debug, Clone, Copy)]
pub enum TimerEvent {
    CursorTick(TickToken),
    ScoreTick(TickToken),
}

/// One pending entry; ordered by fire time, then insertion order
#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: u64,
    seq: u64,
    event: TimerEvent,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        (self.due_ms, self.seq) == (other.due_ms, other.seq)
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-threaded timer queue. Time only moves via `pop_due`/`advance_to`,
/// so tests and the headless driver control it exactly.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    seq: u64,
    queue: BinaryHeap<Reverse<Pending>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Arm `event` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64, event: TimerEvent) {
        let entry = Pending {
            due_ms: self.now_ms + delay_ms,
            seq: self.seq,
            event,
        };
        self.seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Pop the next event due at or before `deadline_ms`, advancing the
    /// clock to its fire time
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerEvent> {
        let due = self.queue.peek().map(|Reverse(p)| p.due_ms)?;
        if due > deadline_ms {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now_ms = entry.due_ms;
        Some(entry.event)
    }

    /// Advance the clock past any quiet stretch up to `deadline_ms`
    pub fn advance_to(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}

/// Drive a session from the queue until `deadline_ms`
///
/// Delivers due events in order, re-arming each tick chain with the token
/// the session hands back. `on_score` sees every observation snapshot.
pub fn run_until(
    queue: &mut TimerQueue,
    session: &mut GameSession,
    deadline_ms: u64,
    mut on_score: impl FnMut(Scoreboard),
) {
    while let Some(event) = queue.pop_due(deadline_ms) {
        match event {
            TimerEvent::CursorTick(token) => {
                if let Some(next) = session.cursor_tick(token) {
                    queue.schedule(TICK_PERIOD_MS, TimerEvent::CursorTick(next));
                }
            }
            TimerEvent::ScoreTick(token) => {
                if let Some((board, next)) = session.score_tick(token) {
                    on_score(board);
                    queue.schedule(TICK_PERIOD_MS, TimerEvent::ScoreTick(next));
                }
            }
        }
    }
    queue.advance_to(deadline_ms);
}
