use cs_app::UseCases;
use serde_json::Value;
use tracing::{info_span, Instrument};

use super::protocol::HostCommand;

/// Runs one command against the use cases and returns its JSON result.
///
/// `Quit` has no effect here; ending the session is up to the caller.
pub async fn execute(usecases: &UseCases<'_>, command: HostCommand) -> Result<Value, String> {
    let span = info_span!("host.execute", command = command_name(&command));

    async move {
        match command {
            HostCommand::History => {
                let history = usecases.get_clipboard_history().execute();
                serde_json::to_value(&history).map_err(|e| e.to_string())
            }
            HostCommand::Clear => {
                usecases.clear_history().execute();
                Ok(Value::Null)
            }
            HostCommand::GetText => Ok(Value::String(
                usecases.get_clipboard_text().execute().await,
            )),
            HostCommand::GetImage => Ok(Value::String(
                usecases.get_clipboard_image().execute().await,
            )),
            HostCommand::SetText { text } => usecases
                .set_clipboard_text()
                .execute(&text)
                .await
                .map(|()| Value::Null)
                .map_err(|e| e.to_string()),
            HostCommand::Quit => Ok(Value::Null),
        }
    }
    .instrument(span)
    .await
}

fn command_name(command: &HostCommand) -> &'static str {
    match command {
        HostCommand::History => "history",
        HostCommand::Clear => "clear",
        HostCommand::GetText => "getText",
        HostCommand::GetImage => "getImage",
        HostCommand::SetText { .. } => "setText",
        HostCommand::Quit => "quit",
    }
}
