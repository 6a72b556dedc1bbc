use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(config_home: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("phonefield")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("PHONEFIELD_CONFIG")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(config_home: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("phonefield")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("PHONEFIELD_CONFIG")
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn format_uses_free_text_mask_by_default() {
    let temp = TempDir::new().expect("temp dir");
    let out = run_cmd(temp.path(), &["format", "(555) 123-4567"]);
    assert_eq!(out.trim(), "+1 (555) 123-4567");

    let snapshot = run_cmd_json(temp.path(), &["format", "555-12"]);
    assert_eq!(snapshot["display"], "+1 55512");
    assert_eq!(snapshot["logical"], "55512");
    assert_eq!(snapshot["hidden"]["name"], "phone");
    assert_eq!(snapshot["mask"], "free-text");
}

#[test]
fn format_honours_template_override() {
    let temp = TempDir::new().expect("temp dir");
    let out = run_cmd(temp.path(), &["--mask", "template", "format", "555"]);
    assert_eq!(out.trim_end(), "+1 (555) ___-____");
}

#[test]
fn config_file_selects_mask() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path().join("phonefield");
    fs::create_dir_all(&dir).expect("config dir");
    fs::write(
        dir.join("config.toml"),
        "[phone]\nmask = \"template\"\nplaceholder_char = \"#\"\n",
    )
    .expect("write config");

    let out = run_cmd(temp.path(), &["format", "5"]);
    assert_eq!(out.trim_end(), "+1 (5##) ###-####");
}

#[test]
fn type_reports_each_keystroke() {
    let temp = TempDir::new().expect("temp dir");
    let report = run_cmd_json(temp.path(), &["type", "a5b5c5"]);
    let steps = report["steps"].as_array().expect("steps");
    assert_eq!(steps.len(), 6);
    for step in steps {
        let logical = step["logical"].as_str().expect("logical");
        assert!(logical.chars().all(|ch| ch.is_ascii_digit() || ch == '+'));
    }
    assert_eq!(report["changes"], 6);
    assert_eq!(report["field"]["display"], "+1 555");
    assert_eq!(report["field"]["logical"], "555");
}

#[test]
fn type_into_disabled_field_changes_nothing() {
    let temp = TempDir::new().expect("temp dir");
    let report = run_cmd_json(
        temp.path(),
        &["type", "999", "--initial", "5551234567", "--disabled"],
    );
    assert_eq!(report["changes"], 0);
    assert_eq!(report["field"]["display"], "+1 (555) 123-4567");
    assert!(report["steps"]
        .as_array()
        .expect("steps")
        .iter()
        .all(|step| step["applied"] == false));
}

#[test]
fn validate_rejects_bad_input_with_exit_code() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("phonefield")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["validate", "--phone", "555", "--birth-date", "7/4/1990"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("phone: Phone number is invalid"));
    assert!(stdout.contains("birth_date: ok (07/04/1990)"));
}

#[test]
fn one_click_submits_and_picks_dialog() {
    let temp = TempDir::new().expect("temp dir");
    let report = run_cmd_json(
        temp.path(),
        &[
            "one-click",
            "--phone",
            "5551234567",
            "--birth-date",
            "7/4/1990",
            "--verification-options",
            "only_link",
        ],
    );
    assert_eq!(report["submission"]["action"], "one-click");
    assert_eq!(report["submission"]["phone"], "5551234567");
    assert_eq!(report["submission"]["birth_date"], "07/04/1990");
    assert_eq!(report["submission"]["verification_options"], "only_link");
    assert_eq!(report["dialog"]["kind"], "sms");
    assert_eq!(report["form_key"], 1);
}

#[test]
fn one_click_reports_incomplete_form() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("phonefield")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["one-click", "--phone", "555", "--birth-date", "2/30/2020"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("one-click form incomplete"));
}

#[test]
fn type_country_code_then_number() {
    let temp = TempDir::new().expect("temp dir");
    for mask in ["free-text", "template"] {
        let report = run_cmd_json(temp.path(), &["--mask", mask, "type", "15551234567"]);
        assert_eq!(report["field"]["display"], "+1 (555) 123-4567", "{mask}");
        assert_eq!(report["field"]["logical"], "5551234567", "{mask}");
    }
}

#[test]
fn one_click_with_country_code_submits_same_number() {
    let temp = TempDir::new().expect("temp dir");
    let report = run_cmd_json(
        temp.path(),
        &[
            "one-click",
            "--phone",
            "15551234567",
            "--birth-date",
            "7/4/1990",
            "--verification-options",
            "both_link_and_code",
        ],
    );
    assert_eq!(report["submission"]["phone"], "5551234567");
    assert_eq!(
        report["submission"]["verification_options"],
        "both_link_and_code"
    );
    assert_eq!(report["dialog"]["kind"], "prompt");
    assert_eq!(report["dialog"]["phone"], "+15551234567");
}

#[test]
fn config_env_var_points_at_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[phone]\nmask = \"template\"\n").expect("write config");

    let output = cargo_bin_cmd!("phonefield")
        .env("XDG_CONFIG_HOME", temp.path())
        .env("PHONEFIELD_CONFIG", &path)
        .args(["format", "555"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim_end(), "+1 (555) ___-____");
}

#[test]
fn completions_write_to_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("phonefield.bash");
    run_cmd(
        temp.path(),
        &["completions", "bash", "--output", path.to_str().expect("path")],
    );
    let script = fs::read_to_string(&path).expect("read script");
    assert!(script.contains("phonefield"));
    assert!(script.contains("one-click"));
}
