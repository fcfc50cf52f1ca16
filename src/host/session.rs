use anyhow::Context;
use cs_app::AppDeps;
use cs_core::HistoryUpdate;
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, warn};

use super::handler::execute;
use super::protocol::{parse_command, EventMessage, HostCommand, Response};

/// Why a session returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

/// Serves commands from `input` and pushes history notifications to
/// `output` until a `quit` command or the end of input.
///
/// The watcher is not started here; the session only talks to the use
/// cases.
pub async fn serve<W>(
    deps: &AppDeps,
    mut input: mpsc::Receiver<String>,
    mut output: W,
) -> anyhow::Result<SessionEnd>
where
    W: AsyncWrite + Unpin,
{
    let usecases = deps.usecases();
    let mut updates = usecases.subscribe_history().execute();
    let mut updates_open = true;

    loop {
        tokio::select! {
            line = input.recv() => {
                let Some(line) = line else {
                    return Ok(SessionEnd::EndOfInput);
                };
                if line.trim().is_empty() {
                    continue;
                }

                let response = match parse_command(&line) {
                    Ok(parsed) if parsed.command == HostCommand::Quit => {
                        let bye = Response::success(Value::Null, parsed.request_id);
                        write_line(&mut output, &bye).await?;
                        return Ok(SessionEnd::Quit);
                    }
                    Ok(parsed) => match execute(&usecases, parsed.command).await {
                        Ok(result) => Response::success(result, parsed.request_id),
                        Err(error) => Response::failure(error, parsed.request_id),
                    },
                    Err(e) => {
                        debug!(error = %e, "rejected command line");
                        Response::failure(format!("invalid command: {e}"), None)
                    }
                };
                write_line(&mut output, &response).await?;
            }
            update = updates.recv(), if updates_open => {
                match update {
                    Ok(update) => {
                        write_line(&mut output, &EventMessage::history_update(&update)).await?;
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Every update carries the full history, so the
                        // current snapshot replaces whatever was missed.
                        warn!(skipped, "history notifications lagged");
                        let current =
                            HistoryUpdate::new(usecases.get_clipboard_history().execute());
                        write_line(&mut output, &EventMessage::history_update(&current)).await?;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        updates_open = false;
                    }
                }
            }
        }
    }
}

async fn write_line<W, T>(output: &mut W, message: &T) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let mut line = serde_json::to_vec(message).context("Failed to serialize message")?;
    line.push(b'\n');
    output
        .write_all(&line)
        .await
        .context("Failed to write to output")?;
    output.flush().await.context("Failed to flush output")?;
    Ok(())
}
