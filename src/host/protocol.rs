use cs_core::{HistorySnapshot, HistoryUpdate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Commands a UI process can send over stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostCommand {
    History,
    Clear,
    GetText,
    GetImage,
    SetText { text: String },
    Quit,
}

/// A command plus the optional correlation id echoed in its response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandLine {
    #[serde(flatten)]
    pub command: HostCommand,
    #[serde(default, rename = "requestId")]
    pub request_id: Option<String>,
}

pub fn parse_command(line: &str) -> Result<CommandLine, serde_json::Error> {
    serde_json::from_str(line)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl Response {
    pub fn success(result: Value, request_id: Option<String>) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
            request_id,
        }
    }

    pub fn failure(error: impl Into<String>, request_id: Option<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
            request_id,
        }
    }
}

/// A pushed notification, not tied to any command.
#[derive(Debug, Serialize)]
pub struct EventMessage<'a> {
    pub event: &'static str,
    pub payload: &'a HistorySnapshot,
}

impl<'a> EventMessage<'a> {
    pub fn history_update(update: &'a HistoryUpdate) -> Self {
        Self {
            event: update.event_name(),
            payload: &update.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cs_core::ClipboardItem;
    use serde_json::json;

    #[test]
    fn test_unit_commands_parse() {
        let cases = [
            (r#"{"type":"history"}"#, HostCommand::History),
            (r#"{"type":"clear"}"#, HostCommand::Clear),
            (r#"{"type":"getText"}"#, HostCommand::GetText),
            (r#"{"type":"getImage"}"#, HostCommand::GetImage),
            (r#"{"type":"quit"}"#, HostCommand::Quit),
        ];
        for (json, expected) in cases {
            let line = parse_command(json).unwrap();
            assert_eq!(line.command, expected, "{json}");
            assert_eq!(line.request_id, None);
        }
    }

    #[test]
    fn test_set_text_carries_text_and_request_id() {
        let line = parse_command(r#"{"type":"setText","text":"hi","requestId":"r-1"}"#).unwrap();

        assert_eq!(
            line.command,
            HostCommand::SetText {
                text: "hi".to_string()
            }
        );
        assert_eq!(line.request_id.as_deref(), Some("r-1"));
    }

    #[test]
    fn test_bad_commands_are_rejected() {
        assert!(parse_command(r#"{"type":"paste"}"#).is_err());
        assert!(parse_command(r#"{"type":"setText"}"#).is_err());
        assert!(parse_command("history").is_err());
    }

    #[test]
    fn test_response_shapes() {
        let ok = serde_json::to_value(Response::success(json!("abc"), None)).unwrap();
        assert_eq!(ok, json!({"ok": true, "result": "abc"}));

        let unit = serde_json::to_value(Response::success(Value::Null, None)).unwrap();
        assert_eq!(unit, json!({"ok": true, "result": null}));

        let err =
            serde_json::to_value(Response::failure("nope", Some("7".to_string()))).unwrap();
        assert_eq!(err, json!({"ok": false, "error": "nope", "requestId": "7"}));
    }

    #[test]
    fn test_event_message_shape() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let history = HistorySnapshot::from_items(vec![ClipboardItem::text("x", ts).unwrap()]);
        let update = HistoryUpdate::new(history);

        let value = serde_json::to_value(EventMessage::history_update(&update)).unwrap();

        assert_eq!(value["event"], "clipboard-update");
        assert_eq!(value["payload"][0]["type"], "text");
        assert_eq!(value["payload"][0]["content"], "x");
    }
}
