//! Built-in and custom rules for command evaluation.

mod builtin;
mod custom;

pub use builtin::{BUILTIN_RULES, BuiltinRule, check_builtin_rules};
pub use custom::check_custom_rules;

use crate::config::CompiledConfig;
use crate::decision::Decision;

/// Evaluate a command and return a decision.
///
/// Custom rules from the config run first (block short-circuits), then the
/// built-in table is scanned in order. Matching is a case-insensitive regex
/// search over the whole command string; there is no shell tokenization or
/// quoting awareness. The guard is a best-effort heuristic filter, not a
/// sandbox.
pub fn evaluate_command(command: &str, config: &CompiledConfig) -> Decision {
    let custom = check_custom_rules(command, config);
    if custom.is_blocked() {
        return custom;
    }

    check_builtin_rules(command)
}
