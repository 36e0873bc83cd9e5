//! Headless console demo: runs the session loop against the default
//! roster, exercises a few operator commands, and prints snapshot JSON
//! lines until interrupted or the demo window elapses.

use std::sync::mpsc;
use std::time::Duration;

use gridwatch_app::state::ConsoleHandle;
use gridwatch_core::commands::OperatorCommand;
use gridwatch_core::enums::StatusFilter;
use gridwatch_core::seed::default_roster;

fn main() {
    let handle = ConsoleHandle::new();
    let (snap_tx, snap_rx) = mpsc::channel();

    handle
        .start(default_roster(), Some(snap_tx))
        .expect("error while starting GRIDWATCH");

    let scripted = [
        OperatorCommand::ZoomTo { zoom: 2.0 },
        OperatorCommand::SetStatusFilter {
            filter: StatusFilter::Active,
        },
        OperatorCommand::SelectTarget {
            id: "T-01".to_string(),
        },
    ];
    for command in scripted {
        handle.send(command).expect("console command");
    }

    // Drain snapshots for a few ticks, then shut the loop down.
    let mut printed = 0usize;
    while printed < 8 {
        match snap_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(snapshot) => {
                match serde_json::to_string(&snapshot) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("snapshot serialization failed: {e}"),
                }
                printed += 1;
            }
            Err(_) => break,
        }
    }

    handle.shutdown().expect("console shutdown");
}
