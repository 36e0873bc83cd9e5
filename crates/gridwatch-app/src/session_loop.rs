//! Session loop thread — runs the motion tick at 1 Hz and publishes
//! snapshots.
//!
//! The session is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` and are applied in arrival order
//! between ticks; each command and each tick publishes a fresh snapshot to
//! the shared polling slot and to the optional subscriber channel.
//!
//! The timer is owned by this loop and dies with it: a `Shutdown` command
//! (or a disconnected command channel) abandons any in-flight pointer drag
//! and returns, so no stale timer keeps mutating an unobserved registry.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use gridwatch_core::commands::OperatorCommand;
use gridwatch_core::constants::TICK_RATE;
use gridwatch_core::seed::TargetSeed;
use gridwatch_core::state::RenderSnapshot;

use crate::session::{ConsoleSession, SessionConfig};

/// Duration of one motion tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the host to the session loop thread.
#[derive(Debug)]
pub enum SessionCommand {
    /// An operator command to apply to the session.
    Operator(OperatorCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Spawns the session loop in a new thread.
///
/// Returns the command sender for the host handle to use. The latest
/// snapshot is always available through `latest_snapshot`; `subscriber`
/// additionally receives every published snapshot in order.
pub fn spawn_session_loop(
    seeds: Vec<TargetSeed>,
    latest_snapshot: Arc<Mutex<Option<RenderSnapshot>>>,
    subscriber: Option<mpsc::Sender<RenderSnapshot>>,
) -> mpsc::Sender<SessionCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<SessionCommand>();

    std::thread::Builder::new()
        .name("gridwatch-session-loop".into())
        .spawn(move || {
            run_session_loop(&seeds, cmd_rx, &latest_snapshot, subscriber.as_ref());
        })
        .expect("Failed to spawn session loop thread");

    cmd_tx
}

/// The session loop. Runs until Shutdown command or channel disconnect.
fn run_session_loop(
    seeds: &[TargetSeed],
    cmd_rx: mpsc::Receiver<SessionCommand>,
    latest_snapshot: &Mutex<Option<RenderSnapshot>>,
    subscriber: Option<&mpsc::Sender<RenderSnapshot>>,
) {
    let mut session = ConsoleSession::new(SessionConfig::default());
    session.initialize(seeds);

    // Publish the initial state so the host has something to draw before
    // the first tick lands.
    publish(&session, latest_snapshot, subscriber);

    let mut next_tick_time = Instant::now() + TICK_DURATION;

    loop {
        // Wait for input until the next tick is due. Input and the timer
        // are independent sources; they interleave here in arrival order.
        let now = Instant::now();
        if now < next_tick_time {
            match cmd_rx.recv_timeout(next_tick_time - now) {
                Ok(SessionCommand::Operator(command)) => {
                    session.apply(command);
                    publish(&session, latest_snapshot, subscriber);
                    continue;
                }
                Ok(SessionCommand::Shutdown) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                    session.abandon_pointer();
                    return;
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }
        }

        // Tick boundary.
        session.tick();
        publish(&session, latest_snapshot, subscriber);

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if now > next_tick_time + TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = now + TICK_DURATION;
        }
    }
}

/// Store the latest snapshot and forward it to the subscriber, if any.
fn publish(
    session: &ConsoleSession,
    latest_snapshot: &Mutex<Option<RenderSnapshot>>,
    subscriber: Option<&mpsc::Sender<RenderSnapshot>>,
) {
    let snapshot = session.snapshot();

    if let Some(tx) = subscriber {
        // A departed subscriber is not fatal; polling still works.
        let _ = tx.send(snapshot.clone());
    }

    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}
