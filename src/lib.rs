//! Command Guard - Claude Code destructive-command hook.
//!
//! A Rust-based PreToolUse hook for Claude Code that inspects proposed
//! shell commands and blocks destructive ones (recursive force-deletes,
//! force pushes, database drops) before they execute.

pub mod audit;
pub mod config;
pub mod decision;
pub mod input;
pub mod output;
pub mod rules;

pub use config::{CompiledConfig, Config};
pub use decision::Decision;
pub use input::HookInput;
pub use output::format_response;
pub use rules::evaluate_command;
