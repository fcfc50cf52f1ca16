//! Stdio host for a UI process.
//!
//! # Protocol
//!
//! One JSON object per line in both directions. Commands on stdin:
//!
//! ```json
//! {"type": "history"}
//! {"type": "clear"}
//! {"type": "getText"}
//! {"type": "getImage"}
//! {"type": "setText", "text": "hello", "requestId": "42"}
//! {"type": "quit"}
//! ```
//!
//! Lines on stdout are either command responses
//! (`{"ok":true,"result":...}` / `{"ok":false,"error":"..."}`) or history
//! notifications (`{"event":"clipboard-update","payload":[...]}`).

mod handler;
mod protocol;
mod session;
mod stdin;

pub use handler::execute;
pub use protocol::{parse_command, CommandLine, EventMessage, HostCommand, Response};
pub use session::{serve, SessionEnd};
pub use stdin::start_stdin_listener;
