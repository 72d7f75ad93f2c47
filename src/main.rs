//! Command Guard - destructive-command hook entry point.

use command_guard::audit::AuditLogger;
use command_guard::config::{CompiledConfig, Config};
use command_guard::input::HookInput;
use command_guard::output::format_response;
use command_guard::rules::evaluate_command;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Read JSON from stdin
    let mut input_str = String::new();
    if io::stdin().read_to_string(&mut input_str).is_err() {
        return ExitCode::SUCCESS; // Fail-open on read error
    }

    // Parse input
    let hook_input = match HookInput::parse(&input_str) {
        Ok(v) => v,
        Err(_) => return ExitCode::SUCCESS, // Fail-open on parse error
    };

    // Load config; a missing or broken config never disables the built-in table
    let cwd = hook_input.cwd.as_deref().map(Path::new);
    let config = Config::load(cwd)
        .and_then(Config::compile)
        .unwrap_or_else(|_| CompiledConfig::empty());

    let decision = evaluate_command(hook_input.command(), &config);

    // Audit logging (if enabled)
    if config.raw.audit.enabled {
        if let Some(path) = &config.raw.audit.path {
            if let Ok(mut logger) = AuditLogger::open(Path::new(path)) {
                let _ = logger.log_decision(&hook_input, &decision);
            }
        }
    }

    // A block is communicated via the stdout payload, not the exit status
    if let Some(payload) = format_response(&decision, hook_input.command()) {
        println!("{}", payload);
    }

    ExitCode::SUCCESS
}
