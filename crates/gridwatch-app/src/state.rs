//! Host-facing console handle shared between the shell and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use gridwatch_core::commands::OperatorCommand;
use gridwatch_core::seed::TargetSeed;
use gridwatch_core::state::RenderSnapshot;

use crate::session_loop::{self, SessionCommand};

/// Shared console state handed to the hosting shell.
///
/// The handle must be Send + Sync so a shell can store it in shared state:
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` covers state that doesn't exist before `start`
/// - `Arc<Mutex<...>>` shares the latest snapshot with the loop thread
pub struct ConsoleHandle {
    /// Channel sender to forward commands to the loop thread.
    /// `None` before `start` is called.
    command_tx: Mutex<Option<mpsc::Sender<SessionCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the loop thread after each tick or input event.
    latest_snapshot: Arc<Mutex<Option<RenderSnapshot>>>,
    /// Whether the loop is currently running.
    running: Mutex<bool>,
}

impl Default for ConsoleHandle {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl ConsoleHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the console. Spawns the loop thread if not already running.
    /// `subscriber` optionally receives every published snapshot.
    pub fn start(
        &self,
        seeds: Vec<TargetSeed>,
        subscriber: Option<mpsc::Sender<RenderSnapshot>>,
    ) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if *running {
            return Err("Console already running".into());
        }

        let cmd_tx =
            session_loop::spawn_session_loop(seeds, self.latest_snapshot.clone(), subscriber);

        let mut tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        *tx_lock = Some(cmd_tx);
        *running = true;

        Ok(())
    }

    /// Send an operator command to the running console.
    pub fn send(&self, command: OperatorCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(SessionCommand::Operator(command))
                .map_err(|e| format!("Failed to send command: {}", e)),
            None => Err("Console not started".into()),
        }
    }

    /// Get the latest snapshot synchronously (for polling / initial state).
    pub fn latest(&self) -> Result<Option<RenderSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Stop the loop thread. The thread abandons any in-flight drag and
    /// cancels its timer on the way out.
    pub fn shutdown(&self) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        let mut tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;

        if let Some(tx) = tx_lock.take() {
            // The thread may already be gone; that's a clean shutdown too.
            let _ = tx.send(SessionCommand::Shutdown);
        }
        *running = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwatch_core::seed::default_roster;

    #[test]
    fn test_handle_creation() {
        let handle = ConsoleHandle::new();
        assert!(handle.command_tx.lock().unwrap().is_none());
        assert!(handle.latest_snapshot.lock().unwrap().is_none());
        assert!(!*handle.running.lock().unwrap());
        assert!(handle.send(OperatorCommand::ResetView).is_err());
    }

    #[test]
    fn test_double_start_is_rejected() {
        let handle = ConsoleHandle::new();
        handle.start(default_roster(), None).unwrap();
        assert!(handle.start(default_roster(), None).is_err());
        handle.shutdown().unwrap();
    }

    #[test]
    fn test_start_send_shutdown() {
        let handle = ConsoleHandle::new();
        let (snap_tx, snap_rx) = mpsc::channel();
        handle.start(default_roster(), Some(snap_tx)).unwrap();

        // Initial snapshot is published immediately.
        let snapshot = snap_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        assert_eq!(snapshot.markers.len(), 5);

        // Tick snapshots may interleave with the command's, so poll until
        // the zoom change lands.
        handle.send(OperatorCommand::ZoomTo { zoom: 3.0 }).unwrap();
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        loop {
            let snapshot = snap_rx
                .recv_timeout(std::time::Duration::from_secs(5))
                .unwrap();
            if snapshot.viewport.zoom == 3.0 {
                break;
            }
            assert!(
                std::time::Instant::now() < deadline,
                "zoom never reached snapshot"
            );
        }

        handle.shutdown().unwrap();
        assert!(handle.send(OperatorCommand::ResetView).is_err());
    }
}
