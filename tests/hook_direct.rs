//! End-to-end tests of the hook protocol with the built-in table only.
//!
//! Every invocation must exit 0; a block is visible only as a JSON payload
//! on stdout.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with config resolution pointed at a missing file, so only the
/// built-in rule table applies.
fn guard_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("command-guard");
    cmd.env("COMMAND_GUARD_CONFIG", dir.path().join("missing.toml"));
    cmd
}

fn bash_input(command: &str) -> String {
    serde_json::json!({"tool_name": "Bash", "tool_input": {"command": command}}).to_string()
}

mod should_allow {
    use super::*;

    #[test]
    fn safe_ls() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(bash_input("ls -la"))
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn rm_rf_path_under_root() {
        // The root-deletion rule requires / as the deletion root.
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(bash_input("rm -rf /tmp/foo"))
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn delete_with_where_clause() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(bash_input("DELETE FROM users WHERE id=1;"))
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn empty_command() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(bash_input(""))
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn missing_command_field() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(r#"{"tool_name":"Bash","tool_input":{}}"#)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn missing_tool_input() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(r#"{"tool_name":"Bash"}"#)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn wrong_shape_command() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(r#"{"tool_input":{"command":42}}"#)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn malformed_json_fails_open() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin("not valid json")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn truncated_json_fails_open() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(r#"{"tool_input":{"command":"rm -rf /"#)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn empty_stdin_fails_open() {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

mod should_block {
    use super::*;

    fn assert_blocked(command: &str, reason_fragment: &str) {
        let dir = TempDir::new().unwrap();
        guard_cmd(&dir)
            .write_stdin(bash_input(command))
            .assert()
            .success()
            .stdout(
                predicate::str::contains(r#""decision":"block""#)
                    .and(predicate::str::contains(reason_fragment)),
            );
    }

    #[test]
    fn rm_rf_root() {
        assert_blocked("rm -rf /", "rm -rf on root path");
    }

    #[test]
    fn rm_rf_home() {
        assert_blocked("rm -rf ~", "rm -rf on home directory");
    }

    #[test]
    fn rm_rf_wildcard() {
        assert_blocked("rm -rf *", "rm -rf with wildcard");
    }

    #[test]
    fn force_push_long_flag() {
        assert_blocked("git push origin main --force", "Force push detected");
    }

    #[test]
    fn force_push_short_flag() {
        assert_blocked("git push -f origin main", "Force push detected");
    }

    #[test]
    fn drop_database() {
        assert_blocked("mysql -e 'DROP DATABASE prod'", "DROP DATABASE detected");
    }

    #[test]
    fn drop_table() {
        assert_blocked("psql -c 'DROP TABLE users'", "DROP TABLE detected");
    }

    #[test]
    fn delete_without_where() {
        assert_blocked("DELETE FROM users;", "DELETE without WHERE clause");
    }

    #[test]
    fn npm_global_uninstall() {
        assert_blocked("npm uninstall -g typescript", "Global npm package removal");
    }

    #[test]
    fn brew_uninstall() {
        assert_blocked("brew uninstall postgresql", "Homebrew package removal");
    }

    #[test]
    fn chmod_on_root_path() {
        assert_blocked("chmod -R 777 /etc", "Changing permissions on root");
    }

    #[test]
    fn chown_on_root_path() {
        assert_blocked("chown -R nobody /var", "Changing ownership on root");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_blocked("RM -RF /", "rm -rf on root path");
    }

    #[test]
    fn block_payload_shape() {
        let dir = TempDir::new().unwrap();
        let assert = guard_cmd(&dir)
            .write_stdin(bash_input("rm -rf /"))
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

        assert_eq!(parsed["decision"], "block");
        assert_eq!(
            parsed["reason"],
            "Dangerous: rm -rf on root path - please use specific paths"
        );
        assert_eq!(parsed["systemMessage"], "Blocked command: rm -rf /...");
    }

    #[test]
    fn long_command_is_truncated_in_system_message() {
        let dir = TempDir::new().unwrap();
        let command = format!("rm -rf ~ {}", "a".repeat(300));
        let assert = guard_cmd(&dir)
            .write_stdin(bash_input(&command))
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

        let expected_prefix: String = command.chars().take(100).collect();
        assert_eq!(
            parsed["systemMessage"],
            format!("Blocked command: {}...", expected_prefix)
        );
    }
}
