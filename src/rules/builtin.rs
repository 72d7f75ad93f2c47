//! The built-in destructive-pattern table.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::decision::Decision;

/// A built-in detection rule.
pub struct BuiltinRule {
    /// Stable rule name for audit entries (e.g., "fs.rm_root").
    pub name: &'static str,
    /// Regex searched anywhere in the command string.
    pub pattern: &'static str,
    /// Warning reported when the rule matches.
    pub reason: &'static str,
}

/// The ordered rule table. First match wins.
pub const BUILTIN_RULES: &[BuiltinRule] = &[
    // Destructive file operations
    BuiltinRule {
        name: "fs.rm_root",
        pattern: r"\brm\s+-rf\s+/+(?:[\s;&|*]|$)",
        reason: "Dangerous: rm -rf on root path - please use specific paths",
    },
    BuiltinRule {
        name: "fs.rm_home",
        pattern: r"\brm\s+-rf\s+~",
        reason: "Dangerous: rm -rf on home directory - please be specific",
    },
    BuiltinRule {
        name: "fs.rm_wildcard",
        pattern: r"\brm\s+-rf\s+\*",
        reason: "Dangerous: rm -rf with wildcard - please be specific",
    },
    // Force push operations
    BuiltinRule {
        name: "git.push_force",
        pattern: r"git\s+push\s+.*--force\b",
        reason: "Dangerous: Force push detected - use --force-with-lease if needed",
    },
    BuiltinRule {
        name: "git.push_force_short",
        pattern: r"git\s+push\s+.*-f\b",
        reason: "Dangerous: Force push detected - use --force-with-lease if needed",
    },
    // Database destruction
    BuiltinRule {
        name: "sql.drop_database",
        pattern: r"DROP\s+DATABASE",
        reason: "Dangerous: DROP DATABASE detected - use database CLI for such operations",
    },
    BuiltinRule {
        name: "sql.drop_table",
        pattern: r"DROP\s+TABLE",
        reason: "Dangerous: DROP TABLE detected - please verify this is intentional",
    },
    // DELETE with no filtering clause
    BuiltinRule {
        name: "sql.delete_no_where",
        pattern: r"DELETE\s+FROM\s+\w+\s*;",
        reason: "Dangerous: DELETE without WHERE clause - this would delete all rows",
    },
    // Package removal
    BuiltinRule {
        name: "pkg.npm_global",
        pattern: r"npm\s+uninstall\s+-g",
        reason: "Warning: Global npm package removal - please verify",
    },
    BuiltinRule {
        name: "pkg.brew",
        pattern: r"brew\s+uninstall",
        reason: "Warning: Homebrew package removal - please verify",
    },
    // Permission changes on root-rooted paths
    BuiltinRule {
        name: "perm.chmod_root",
        pattern: r"chmod\s+.*\s+/",
        reason: "Dangerous: Changing permissions on root - please be specific",
    },
    BuiltinRule {
        name: "perm.chown_root",
        pattern: r"chown\s+.*\s+/",
        reason: "Dangerous: Changing ownership on root - please be specific",
    },
];

/// Rules with their compiled regexes, built once on first use.
///
/// A pattern that fails to compile is skipped rather than panicking;
/// `test_all_patterns_compile` keeps the table honest.
static COMPILED: Lazy<Vec<(&'static BuiltinRule, Regex)>> = Lazy::new(|| {
    BUILTIN_RULES
        .iter()
        .filter_map(|rule| {
            RegexBuilder::new(rule.pattern)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|re| (rule, re))
        })
        .collect()
});

/// Check a command against the built-in table, in order.
pub fn check_builtin_rules(command: &str) -> Decision {
    for (rule, re) in COMPILED.iter() {
        if re.is_match(command) {
            return Decision::block(rule.name, rule.reason);
        }
    }
    Decision::allow()
}
