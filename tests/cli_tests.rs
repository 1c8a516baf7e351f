use serde_json::Value;
use std::fs;
use std::process::Command;

#[test]
fn classify_file_cli() {
    let exe = env!("CARGO_BIN_EXE_rowlife");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patterns.txt");
    fs::write(&input, "#\n##\n###.#\n##....#.###\n#x.\n").unwrap();

    let output = Command::new(exe)
        .arg(&input)
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(&lines[..4], ["vanishing", "blinking", "gliding", "other"]);
    assert!(lines[4].starts_with("error: invalid character"));
}

#[test]
fn json_and_csv_output() {
    let exe = env!("CARGO_BIN_EXE_rowlife");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patterns.txt");
    let json = dir.path().join("out.json");
    let csv = dir.path().join("out.csv");
    fs::write(&input, "##\n###.#\n").unwrap();

    let status = Command::new(exe)
        .arg(&input)
        .arg("--json")
        .arg(&json)
        .arg("--csv")
        .arg(&csv)
        .arg("--summary")
        .status()
        .expect("run failed");
    assert!(status.success());

    let records: Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(records[0]["outcome"], "blinking");
    assert_eq!(records[0]["period"], 2);
    assert_eq!(records[1]["outcome"], "gliding");
    assert_eq!(records[1]["shift"], -1);
    assert!(records[1]["error"].is_null());

    let text = fs::read_to_string(&csv).unwrap();
    let mut rows = text.lines();
    assert_eq!(
        rows.next().unwrap(),
        "line,input,outcome,generation,period,shift,error"
    );
    assert_eq!(rows.next().unwrap(), "1,##,blinking,2,2,,");
}

#[test]
fn summary_prints_tallies() {
    let exe = env!("CARGO_BIN_EXE_rowlife");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patterns.txt");
    fs::write(&input, "#\n#.#\n##\n").unwrap();

    let output = Command::new(exe)
        .args([input.to_str().unwrap(), "--summary"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#lines: 3"));
    assert!(stdout.contains("#vanishing: 2"));
    assert!(stdout.contains("#blinking: 1"));
    assert!(stdout.contains("#errors: 0"));
    assert!(!stdout.lines().any(|l| l == "vanishing"));
}

#[test]
fn missing_input_error() {
    let exe = env!("CARGO_BIN_EXE_rowlife");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");
    let output = Command::new(exe).arg(&input).output().expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Check that the file exists"));
}

#[test]
fn identical_symbols_rejected() {
    let exe = env!("CARGO_BIN_EXE_rowlife");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patterns.txt");
    fs::write(&input, "#\n").unwrap();
    let output = Command::new(exe)
        .args([input.to_str().unwrap(), "--filled", "x", "--blank", "x"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
}

#[test]
fn evolve_dump_prints_generations() {
    let exe = env!("CARGO_BIN_EXE_evolve_dump");
    let output = Command::new(exe)
        .args(["##", "--generations", "2"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["   0 .##", "   1 #..#", "   2 .##"]);
}
