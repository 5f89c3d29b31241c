//! Integration tests for the productplan-mcp binary

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the binary with a clean credential environment
fn productplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("productplan-mcp").expect("Failed to find productplan-mcp binary");
    cmd.env_remove("PRODUCTPLAN_API_TOKEN")
        .env_remove("PRODUCTPLAN_API_BASE");
    cmd
}

#[test]
fn test_missing_token_exits_with_error() {
    productplan_cmd()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: PRODUCTPLAN_API_TOKEN environment variable is required",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_token_exits_with_error() {
    productplan_cmd()
        .env("PRODUCTPLAN_API_TOKEN", "")
        .arg("serve")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PRODUCTPLAN_API_TOKEN"));
}

#[test]
fn test_tools_lists_catalog_without_token() {
    productplan_cmd()
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("list_roadmaps"))
        .stdout(predicate::str::contains("update_bar"))
        .stdout(predicate::str::contains("check_status"));
}

#[test]
fn test_serve_answers_over_stdio() {
    productplan_cmd()
        .env("PRODUCTPLAN_API_TOKEN", "token")
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id":1"#))
        .stdout(predicate::str::contains(r#""result":{}"#));
}

#[test]
fn test_call_unknown_tool_fails() {
    productplan_cmd()
        .env("PRODUCTPLAN_API_TOKEN", "token")
        .args(["call", "delete_everything"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Unknown tool: delete_everything"));
}

#[test]
fn test_call_rejects_malformed_args() {
    productplan_cmd()
        .env("PRODUCTPLAN_API_TOKEN", "token")
        .args(["call", "get_roadmap", "--args", "{not json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--args is not valid JSON"));
}
