use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paperclips(dir: &TempDir, date: &str) -> Command {
    let mut cmd = Command::cargo_bin("paperclips").unwrap();
    cmd.env("PAPERCLIPS_HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("PAPERCLIPS_DATE")
        .args(["--date", date]);
    cmd
}

fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn status_on_first_run_shows_defaults() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "2024-01-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("📎 0/5"))
        .stdout(predicate::str::contains("Tasks Remaining: 5"));

    assert!(dir.path().join("settings.json").exists());
    assert!(dir.path().join("history.json").exists());
}

#[test]
fn done_and_undo_update_counts() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "2024-01-01").arg("done").assert().success();
    paperclips(&dir, "2024-01-01").arg("done").assert().success();
    paperclips(&dir, "2024-01-01")
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("📎 1/5"));

    let out = paperclips(&dir, "2024-01-01")
        .args(["status", "-o", "json"])
        .output()
        .unwrap();
    let value = json(&out.stdout);
    assert_eq!(value["done"], 1);
    assert_eq!(value["undone"], 4);
    assert_eq!(value["date"], "2024-01-01");
}

#[test]
fn undo_with_nothing_done_is_a_notice() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "2024-01-01")
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed tasks to undo."));
}

#[test]
fn goal_validation() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "2024-01-01")
        .args(["goal", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily goal updated: 5 → 3"));

    for bad in ["0", "-1", "4000000000"] {
        paperclips(&dir, "2024-01-01")
            .args(["goal", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains("daily goal must be between 1 and 1000"));
    }

    paperclips(&dir, "2024-01-01")
        .arg("goal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily goal: 3"));
}

#[test]
fn completing_past_goal_reports_no_tasks_remaining() {
    let dir = TempDir::new().unwrap();
    paperclips(&dir, "2024-01-01").args(["goal", "1"]).assert().success();

    paperclips(&dir, "2024-01-01")
        .arg("done")
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations!"));

    let out = paperclips(&dir, "2024-01-01")
        .args(["done", "-o", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value = json(&out.stdout);
    assert_eq!(value["outcome"], "no_tasks_remaining");
    assert_eq!(value["status"]["done"], 1);
}

#[test]
fn rollover_records_previous_day_and_feeds_stats() {
    let dir = TempDir::new().unwrap();

    for day in ["2024-01-01", "2024-01-02"] {
        for _ in 0..5 {
            paperclips(&dir, day).arg("done").assert().success();
        }
    }

    paperclips(&dir, "2024-01-03")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("📎 0/5"))
        .stderr(predicate::str::contains("New day. 2024-01-02 finished at 5/5"));

    let out = paperclips(&dir, "2024-01-03")
        .args(["stats", "-o", "json"])
        .output()
        .unwrap();
    let value = json(&out.stdout);
    assert_eq!(value["statistics"]["weekly_rate"], 100);
    assert_eq!(value["statistics"]["best_streak"], 2);
    // Today has no record yet, so the streak ending today is empty
    assert_eq!(value["statistics"]["current_streak"], 0);

    let out = paperclips(&dir, "2024-01-03")
        .args(["history", "-o", "json"])
        .output()
        .unwrap();
    let value = json(&out.stdout);
    assert_eq!(value["count"], 2);
    assert_eq!(value["items"][0]["date"], "2024-01-02");
}

#[test]
fn calendar_streak_mode_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "stats:\n  streak_mode: calendar\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("history.json"),
        r#"{
            "last_reset": "2024-01-06",
            "done_count": 0,
            "daily_records": {
                "2024-01-01": {"completed": 5, "goal": 5},
                "2024-01-02": {"completed": 5, "goal": 5},
                "2024-01-05": {"completed": 5, "goal": 5}
            }
        }"#,
    )
    .unwrap();

    let out = paperclips(&dir, "2024-01-06")
        .args(["stats", "-o", "json"])
        .output()
        .unwrap();
    let value = json(&out.stdout);
    assert_eq!(value["statistics"]["streak_mode"], "calendar");
    assert_eq!(value["statistics"]["best_streak"], 2);
}

#[test]
fn corrupt_history_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("history.json"), "{{{").unwrap();

    paperclips(&dir, "2024-01-01")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("📎 0/5"))
        .stderr(predicate::str::contains("warning"));
}

#[test]
fn malformed_config_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.yaml"), "stats: [not, a, map]").unwrap();

    paperclips(&dir, "2024-01-01")
        .arg("done")
        .assert()
        .success()
        .stdout(predicate::str::contains("📎 1/5"))
        .stderr(predicate::str::contains("warning"))
        .stderr(predicate::str::contains("config.yaml"));
}

#[test]
fn huge_goal_is_rejected_and_board_still_renders() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "2024-01-01")
        .args(["goal", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("daily goal must be between 1 and 1000"));

    let out = paperclips(&dir, "2024-01-01")
        .args(["board", "-o", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(json(&out.stdout)["count"], 5);
}

#[test]
fn history_days_out_of_range_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "2024-01-03")
        .args(["history", "--days", "4000000000"])
        .assert()
        .code(2);
}

#[test]
fn extended_year_date_is_rejected() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("paperclips")
        .unwrap()
        .env("PAPERCLIPS_HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("PAPERCLIPS_DATE")
        .args(["--date=-262143-01-01", "stats"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn invalid_date_is_an_error() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "the other day")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn prompt_segment() {
    let dir = TempDir::new().unwrap();
    paperclips(&dir, "2024-01-01").arg("done").assert().success();

    paperclips(&dir, "2024-01-01")
        .args(["prompt", "--custom", "{done}/{goal}"])
        .assert()
        .success()
        .stdout("1/5\n");
}

#[test]
fn completions_do_not_need_data() {
    let dir = TempDir::new().unwrap();

    paperclips(&dir, "2024-01-01")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paperclips"));

    assert!(!dir.path().join("history.json").exists());
}
