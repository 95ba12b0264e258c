use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    process::{Command, Output}
};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tennis-glicko"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute tennis-glicko")
}

fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tennis-glicko-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("Failed to write test input");
    path
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("Expected JSON on stdout")
}

#[test]
fn test_update_prints_rating_update() {
    let output = run_cli(&[
        "update",
        "--user-score",
        "3.5",
        "--opp-score",
        "3.8",
        "--female",
        "--win",
        "--season-sets",
        "5",
        "--set-score",
        "6-4",
        "--match-type",
        "singles"
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    assert_eq!(json["updated_score"].as_f64(), Some(4.29));
    assert_eq!(json["original_score"].as_f64(), Some(3.5));
    assert_eq!(json["match_details"]["match_type"], "singles");
}

#[test]
fn test_update_rejects_malformed_set_score() {
    let output = run_cli(&[
        "update",
        "--user-score",
        "3.5",
        "--opp-score",
        "3.8",
        "--set-score",
        "64"
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid set score '64'"), "{stderr}");
}

#[test]
fn test_replay_file() {
    let input = write_input(
        "replay.json",
        r#"{
            "initial_score": 3.5,
            "matches": [
                { "user_score": 0.0, "opp_score": 3.8, "user_is_female": true, "user_win": true,
                  "user_season_sets": 5, "set_score": "6-4", "match_type": "singles" },
                { "user_score": 0.0, "opp_score": 3.6, "user_is_female": true, "user_win": false,
                  "user_season_sets": 6, "set_score": "3-6", "match_type": "singles" },
                { "user_score": 0.0, "opp_score": 3.4, "user_is_female": true, "user_win": true,
                  "user_season_sets": 7, "set_score": "10-8", "match_type": "双打" }
            ]
        }"#
    );

    let output = run_cli(&["replay", input.to_str().unwrap()]);
    fs::remove_file(&input).ok();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    let updates = json["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 3);
    assert_eq!(updates[0]["updated_score"].as_f64(), Some(4.29));
    assert_eq!(updates[1]["original_score"].as_f64(), Some(4.29));
    assert_eq!(json["final_score"].as_f64(), updates[2]["updated_score"].as_f64());
}

#[test]
fn test_batch_file_reports_per_player_errors() {
    let input = write_input(
        "batch.json",
        r#"[
            { "player": "alice", "initial_score": 3.5, "matches": [
                { "user_score": 0.0, "opp_score": 3.8, "user_is_female": true, "user_win": true,
                  "user_season_sets": 5, "set_score": "6-4", "match_type": "singles" } ] },
            { "player": "bob", "initial_score": 3.0, "matches": [
                { "user_score": 0.0, "opp_score": 3.0, "user_is_female": false, "user_win": true,
                  "user_season_sets": 1, "set_score": "6/4", "match_type": "singles" } ] }
        ]"#
    );

    let output = run_cli(&["batch", input.to_str().unwrap()]);
    fs::remove_file(&input).ok();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    let entries = json.as_array().unwrap();
    assert_eq!(entries[0]["player"], "alice");
    assert_eq!(entries[0]["summary"]["final_score"].as_f64(), Some(4.29));
    assert_eq!(entries[1]["player"], "bob");
    assert!(entries[1]["error"].as_str().unwrap().contains("Match 0"));
}

#[test]
fn test_missing_file() {
    let output = run_cli(&["replay", "/nonexistent/tennis-glicko/season.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn test_info() {
    let output = run_cli(&["info"]);

    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["supported_match_types"], serde_json::json!(["singles", "doubles"]));
    assert_eq!(json["score_range"], serde_json::json!([2.0, 5.0]));
    assert_eq!(json["config"]["opponent_deviation"].as_f64(), Some(80.0));
}
