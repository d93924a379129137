use std::process::Command;

use pretty_assertions::assert_eq;

fn opdoc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_opdoc"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

#[test]
fn test_default_input() {
    let output = opdoc().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(r#"{"ADC": "Add with Carry"#));
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn test_compact_style() {
    let path = std::env::temp_dir().join(format!("opdoc-cli-{}.txt", std::process::id()));
    std::fs::write(&path, "LDA\nA\nLDA\nB\n").unwrap();

    let output = opdoc().arg(&path).args(["--style", "compact"]).output().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "{\"LDA\":\"B\"}\n");
}

#[test]
fn test_missing_input() {
    let output = opdoc().arg("instructions/missing.txt").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("instructions/missing.txt"));
}
