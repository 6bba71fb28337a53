//! Roto Rings entry point
//!
//! Headless driver: runs a scripted session against the timer queue and
//! logs the outcome. The interactive front end lives with the rendering
//! collaborator; this binary exercises the core loop end to end.

use roto_rings::clock::{TimerEvent, TimerQueue, run_until};
use roto_rings::consts::{ARENA_RADIUS, CURSOR_HUB_RADIUS, TICK_PERIOD_MS};
use roto_rings::sim::{GameSession, KEY_BINDINGS};

fn main() {
    env_logger::init();
    log::info!("Roto Rings (headless) starting...");

    let seed = 0xC0FFEE;
    let mut session = GameSession::new(seed);
    let mut queue = TimerQueue::new();

    queue.schedule(TICK_PERIOD_MS, TimerEvent::ScoreTick(session.score_token()));
    if let Some(token) = session.start() {
        queue.schedule(TICK_PERIOD_MS, TimerEvent::CursorTick(token));
    }

    // One scripted press per ring every quarter revolution
    let script = [
        (250, 'a'),
        (500, 's'),
        (750, 'd'),
        (1000, 'f'),
        (1250, 'a'),
        (1500, 's'),
        (1750, 'd'),
        (2000, 'f'),
    ];

    for (at_ms, key) in script {
        run_until(&mut queue, &mut session, at_ms, |_| {});
        let (hub, tip) = session.cursor.ray(CURSOR_HUB_RADIUS, ARENA_RADIUS);
        log::debug!("Cursor ray {:?} -> {:?}", hub, tip);
        if let Some(outcome) = session.on_key(key) {
            let index = KEY_BINDINGS.iter().position(|&(k, _)| k == key).unwrap_or(0);
            log::info!(
                "'{key}' ({}) at {} ms: {outcome:?}, total {}",
                session.rings[index].color.as_str(),
                queue.now_ms(),
                session.total_score()
            );
        }
    }

    run_until(&mut queue, &mut session, 2500, |_| {});
    session.pause();

    log::info!(
        "Session over after {} ms, cursor at {} degrees",
        queue.now_ms(),
        session.cursor.angle_deg
    );
    if let Ok(json) = serde_json::to_string(&session.scoreboard()) {
        println!("{json}");
    }
}
