use std::fs;
use std::path::PathBuf;
use std::process::Command;

use rc_reference::reference::{FigureStyle, OutputConfig, ReferenceGenerator, SweepConfig};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rc-reference-cli-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn binary_writes_both_files_and_exits_zero() {
    let exe = env!("CARGO_BIN_EXE_rc-reference");
    let dir = scratch_dir("ok");

    let output = Command::new(exe)
        .current_dir(&dir)
        .env("RUST_LOG", "info")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {exe}: {e}"));

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("run failed: status={} stderr={}", output.status, stderr);
    }
    for name in ["RC.svg", "RC.png"] {
        let len = fs::metadata(dir.join(name)).map(|m| m.len()).unwrap_or(0);
        assert!(len > 0, "{name} missing or empty");
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn binary_exits_nonzero_when_output_cannot_be_written() {
    let exe = env!("CARGO_BIN_EXE_rc-reference");
    let dir = scratch_dir("blocked");
    // A directory squatting on the vector file name makes the write fail.
    fs::create_dir(dir.join("RC.svg")).unwrap();

    let output = Command::new(exe)
        .current_dir(&dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {exe}: {e}"));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to build the RC low pass filter reference"), "{stderr}");
    assert!(stderr.contains("RC.svg"), "{stderr}");
    assert!(!dir.join("RC.png").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn corrupted_sweep_reports_the_failed_check() {
    let dir = scratch_dir("corrupt");
    let sweep = SweepConfig {
        start_exponent: -8.0,
        ..SweepConfig::default()
    };
    let generator =
        ReferenceGenerator::new(sweep, FigureStyle::default(), OutputConfig::in_directory(&dir));

    let err = rc_reference::run(&generator).unwrap_err();
    let report = format!("{err:?}");

    assert!(report.contains("failed to build the RC low pass filter reference"), "{report}");
    assert!(report.contains("The nanosecond time constant is incorrect"), "{report}");
    assert!(!dir.join("RC.svg").exists());
    assert!(!dir.join("RC.png").exists());
    fs::remove_dir_all(&dir).unwrap();
}
