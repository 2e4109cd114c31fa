use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const EXPECTED_SCENARIO: &str = "\
INSERT INTO [Province]( [CountryId], [Code], [Description] ) VALUES (3, '01', 'Ontario');
INSERT INTO [Province]( [CountryId], [Code], [Description] ) VALUES (3, '02', 'British Columbia');
";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_region-sql"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run region-sql")
}

#[test]
fn zero_arguments_use_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("regions.txt"), "01 Ontario\n02 British Columbia\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(dir.path().join("inserts.sql")).unwrap(),
        EXPECTED_SCENARIO
    );
    assert!(output.stdout.is_empty(), "{}", String::from_utf8_lossy(&output.stdout));
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn text_summary_is_printed_on_request() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("regions.txt"), "01 Ontario\n02 British Columbia\n").unwrap();

    let output = run_in(dir.path(), &["--summary", "text"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 2 INSERT statement(s) to 'inserts.sql'."), "{stdout}");
}

#[test]
fn dropped_tokens_warn_at_default_level() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("regions.txt"), "NL Newfoundland and Labrador\n01 Ontario\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ignoring tokens beyond a two-word description"),
        "{stderr}"
    );
    assert!(
        fs::read_to_string(dir.path().join("inserts.sql"))
            .unwrap()
            .contains("'NL', 'Newfoundland and'")
    );
}

#[test]
fn missing_input_exits_nonzero_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot read input 'regions.txt'"), "{stderr}");
    assert!(!dir.path().join("inserts.sql").exists());
}

#[test]
fn explicit_paths_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("provinces.txt"), "ON Ontario\n").unwrap();

    let output = run_in(
        dir.path(),
        &["--input", "provinces.txt", "--output", "province.sql"],
    );

    assert!(output.status.success());
    assert!(!dir.path().join("inserts.sql").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("province.sql")).unwrap(),
        "INSERT INTO [Province]( [CountryId], [Code], [Description] ) VALUES (3, 'ON', 'Ontario');\n"
    );
}

#[test]
fn config_file_supplies_paths_and_flags_win() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("listing.txt"), "01 Ontario\n02 British Columbia\n").unwrap();
    fs::write(
        dir.path().join("region-sql.yml"),
        "input: listing.txt\noutput: from-config.sql\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["--config", "region-sql.yml"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("from-config.sql")).unwrap(),
        EXPECTED_SCENARIO
    );

    let output = run_in(
        dir.path(),
        &["--config", "region-sql.yml", "--output", "from-flag.sql"],
    );
    assert!(output.status.success());
    assert!(dir.path().join("from-flag.sql").exists());
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.yml"), "input: [oops\n").unwrap();

    let output = run_in(dir.path(), &["--config", "bad.yml"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config 'bad.yml'"), "{stderr}");
}

#[test]
fn json_summary_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("regions.txt"), "01 Ontario\n\nYT\n").unwrap();

    let output = run_in(dir.path(), &["--summary", "json"]);

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["statements"], 2);
    assert_eq!(summary["skipped_blank_lines"], 1);
    assert_eq!(summary["output"], "inserts.sql");
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("regions.txt"), "01 Ontario\n").unwrap();

    let output = run_in(dir.path(), &["--verbose"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("wrote insert script"), "{stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("DEBUG"));
}
