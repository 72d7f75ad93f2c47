//! Response formatting for hook output.

use serde::Serialize;

use crate::decision::Decision;

/// Longest command prefix echoed back in the display message.
const DISPLAY_PREFIX_CHARS: usize = 100;

/// JSON payload emitted on stdout when a command is blocked.
///
/// Allow is communicated by silence: no payload, success exit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResponse {
    /// Always "block".
    pub decision: &'static str,
    /// The matched rule's warning text.
    pub reason: String,
    /// Display message echoing a truncated copy of the command.
    pub system_message: String,
}

/// Format a decision as the hook's stdout payload, if any.
pub fn format_response(decision: &Decision, command: &str) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block(info) => {
            let response = BlockResponse {
                decision: "block",
                reason: info.reason.clone(),
                system_message: format!("Blocked command: {}...", display_prefix(command)),
            };
            // Serialization failure degrades to allow, like every other
            // failure in this process.
            serde_json::to_string(&response).ok()
        }
    }
}

/// First 100 characters of the command; the ellipsis is always appended.
fn display_prefix(command: &str) -> String {
    command.chars().take(DISPLAY_PREFIX_CHARS).collect()
}
