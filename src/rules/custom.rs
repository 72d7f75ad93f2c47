//! Custom user-defined rules.

use crate::config::CompiledConfig;
use crate::decision::Decision;

/// Check config-supplied rules against a command.
///
/// Runs before the built-in table so a config-level block takes precedence.
/// An `allow` action stops custom-rule scanning only; the built-in table
/// still applies afterwards.
pub fn check_custom_rules(command: &str, config: &CompiledConfig) -> Decision {
    for (rule, re) in &config.custom_patterns {
        if re.is_match(command) {
            match rule.action.as_str() {
                "allow" => return Decision::allow(),
                "block" => {
                    let reason = rule
                        .reason
                        .clone()
                        .unwrap_or_else(|| format!("blocked by custom rule '{}'", rule.name));
                    return Decision::block(&rule.name, reason);
                }
                _ => continue,
            }
        }
    }

    Decision::allow()
}
