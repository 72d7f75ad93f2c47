//! Audit logging for guard decisions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::decision::Decision;
use crate::input::HookInput;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Session ID if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Tool that was invoked.
    pub tool: String,
    /// Whether the command was blocked.
    pub blocked: bool,
    /// Rule that triggered the block (if blocked).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Reason for blocking (if blocked).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The inspected command, truncated.
    pub command: String,
}

impl AuditEntry {
    /// Create a new audit entry from hook input and decision.
    pub fn new(input: &HookInput, decision: &Decision) -> Self {
        let (blocked, rule, reason) = match decision {
            Decision::Allow => (false, None, None),
            Decision::Block(info) => (true, Some(info.rule.clone()), Some(info.reason.clone())),
        };

        Self {
            timestamp: Utc::now(),
            session_id: input.session_id.clone(),
            tool: input
                .tool_name
                .clone()
                .unwrap_or_else(|| "<unknown>".to_string()),
            blocked,
            rule,
            reason,
            command: truncate_string(input.command(), 200),
        }
    }
}

fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars - 3).collect();
        out.push_str("...");
        out
    }
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log a decision for an input.
    pub fn log_decision(&mut self, input: &HookInput, decision: &Decision) -> std::io::Result<()> {
        let entry = AuditEntry::new(input, decision);
        self.log(&entry)
    }
}
