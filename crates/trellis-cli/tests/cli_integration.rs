use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// Nothing listens here; commands that would need the server must either
// fail fast or never reach the network.
const OFFLINE_SERVER: &str = "http://127.0.0.1:1/api";

fn trellis(credentials: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.env("TRELLIS_SERVER", OFFLINE_SERVER);
    cmd.env("TRELLIS_CREDENTIALS", credentials);
    cmd.env_remove("TRELLIS_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &str) -> Value {
    serde_json::from_str(output).expect("Failed to parse JSON output")
}

mod auth_tests {
    use super::*;

    #[test]
    fn test_status_logged_out() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        let output = trellis(&credentials)
            .args(["auth", "status"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["authenticated"], false);
    }

    #[test]
    fn test_status_with_stored_credentials() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");
        fs::write(&credentials, r#"{"token":"t1","refreshToken":"r1"}"#).unwrap();

        let output = trellis(&credentials)
            .args(["auth", "status"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["authenticated"], true);
    }

    #[test]
    fn test_logout_without_a_session_stays_local() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        let output = trellis(&credentials)
            .args(["auth", "logout"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["loggedOut"], true);
    }

    #[test]
    fn test_logout_drops_stored_credentials_even_offline() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");
        fs::write(&credentials, r#"{"token":"t1","refreshToken":"r1"}"#).unwrap();

        trellis(&credentials)
            .args(["auth", "logout"])
            .assert()
            .success();

        assert!(!credentials.exists());
    }

    #[test]
    fn test_corrupt_credentials_file_is_reported() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");
        fs::write(&credentials, "not json").unwrap();

        let output = trellis(&credentials)
            .args(["auth", "status"])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["success"], false);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("Serialization error"));
    }
}

mod session_gate_tests {
    use super::*;

    #[test]
    fn test_board_list_requires_a_session() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        let output = trellis(&credentials)
            .args(["board", "list"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("Session expired"));
    }

    #[test]
    fn test_card_list_requires_a_session() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        trellis(&credentials)
            .args([
                "card",
                "list",
                "--board-id",
                "8b9e6a31-60d6-4e84-9e3e-1c1f6b3f2a90",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Session expired"));
    }
}

mod cli_surface_tests {
    use super::*;

    #[test]
    fn test_help_lists_command_groups() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        trellis(&credentials)
            .arg("--help")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("auth")
                    .and(predicate::str::contains("board"))
                    .and(predicate::str::contains("card"))
                    .and(predicate::str::contains("invite")),
            );
    }

    #[test]
    fn test_completions_are_generated() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        trellis(&credentials)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("trellis"));
    }

    #[test]
    fn test_card_move_requires_its_arguments() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        trellis(&credentials)
            .args(["card", "move"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--id"));
    }

    #[test]
    fn test_card_move_rejects_position_zero() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        let output = trellis(&credentials)
            .args([
                "card",
                "move",
                "--id",
                "8b9e6a31-60d6-4e84-9e3e-1c1f6b3f2a90",
                "--list-id",
                "f3e2a90b-1c1f-4e84-9e3e-60d68b9e6a31",
                "--position",
                "0",
            ])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("1-based"));
    }

    #[test]
    fn test_list_reorder_rejects_position_zero() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        trellis(&credentials)
            .args([
                "list",
                "reorder",
                "--id",
                "8b9e6a31-60d6-4e84-9e3e-1c1f6b3f2a90",
                "--position",
                "0",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("1-based"));
    }

    #[test]
    fn test_invalid_uuid_is_rejected_by_parsing() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");

        trellis(&credentials)
            .args(["board", "get", "--id", "not-a-uuid"])
            .assert()
            .failure();
    }
}

mod logging_tests {
    use super::*;

    #[test]
    fn test_debug_log_env_var_captures_connection_details() {
        let dir = tempdir().unwrap();
        let credentials = dir.path().join("credentials.json");
        let log_path = dir.path().join("debug.log");

        let mut cmd = Command::cargo_bin("trellis").unwrap();
        cmd.env("TRELLIS_SERVER", OFFLINE_SERVER);
        cmd.env("TRELLIS_CREDENTIALS", &credentials);
        cmd.env("TRELLIS_DEBUG_LOG", &log_path);
        cmd.args(["auth", "status"]).assert().success();

        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("DEBUG"));
        assert!(log.contains("Connecting"));
    }
}
