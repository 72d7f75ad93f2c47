//! Input parsing for Claude Code hook invocations.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The raw input from Claude Code's PreToolUse hook.
///
/// Every field is optional: the guard tolerates any top-level object shape
/// and degrades a missing or wrong-shaped command to an empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// The tool being invoked (e.g., "Bash").
    #[serde(default)]
    pub tool_name: Option<String>,

    /// The tool's input parameters as raw JSON.
    #[serde(default)]
    pub tool_input: serde_json::Value,

    /// Current working directory (optional).
    #[serde(default)]
    pub cwd: Option<String>,

    /// Session ID for audit logging (optional).
    #[serde(default)]
    pub session_id: Option<String>,
}

impl HookInput {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The proposed command from `tool_input.command`.
    ///
    /// Returns an empty string when the field is absent or not a string.
    pub fn command(&self) -> &str {
        self.tool_input
            .get("command")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}
