use std::io::BufRead;

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Reads stdin lines on a dedicated thread.
///
/// Blank lines are dropped. The channel closes at EOF or on a read error,
/// which the session treats as the end of input. A plain thread is used
/// because a blocking stdin read cannot be cancelled and would otherwise
/// hold up runtime shutdown.
pub fn start_stdin_listener() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(100);

    std::thread::spawn(move || {
        debug!("stdin listener started");
        let stdin = std::io::stdin();
        let reader = stdin.lock();

        for line in reader.lines() {
            match line {
                Ok(line) if !line.trim().is_empty() => {
                    if tx.blocking_send(line).is_err() {
                        debug!("command channel closed, exiting");
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "error reading stdin");
                    break;
                }
            }
        }
        debug!("stdin listener exiting");
    });

    rx
}
