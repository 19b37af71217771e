use serde_json::Value;
use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_delaymaster<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_delaymaster");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("delaymaster command should execute")
}

fn run_delaymaster_with_stdin(args: &[&str], stdin: &str) -> Output {
    run_delaymaster_with_stdin_bytes(args, stdin.as_bytes())
}

fn run_delaymaster_with_stdin_bytes(args: &[&str], stdin: &[u8]) -> Output {
    let bin = env!("CARGO_BIN_EXE_delaymaster");
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("delaymaster command should spawn");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin)
        .expect("stdin should be written");
    child
        .wait_with_output()
        .expect("delaymaster command should finish")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn check_prints_one_verdict_per_input() {
    let output = run_delaymaster([
        "check", "wolf", "wwoollff", "wwollff", "wolfwolf", "", "wolfx", "owlf",
    ]);
    assert_success(&output);
    assert_eq!(
        stdout_lines(&output),
        vec!["VALID", "VALID", "INVALID", "VALID", "INVALID", "INVALID", "INVALID"]
    );
}

#[test]
fn check_regex_engine_matches_streaming() {
    let inputs = ["wolf", "wwollff", "wolfwwoollff", "wolfwo", "fwol"];
    let streaming = run_delaymaster(
        ["check", "--engine", "streaming"]
            .into_iter()
            .chain(inputs),
    );
    let regex = run_delaymaster(["check", "--engine", "regex"].into_iter().chain(inputs));
    assert_success(&streaming);
    assert_success(&regex);
    assert_eq!(stdout_lines(&streaming), stdout_lines(&regex));
}

#[test]
fn check_json_emits_rows() {
    let output = run_delaymaster(["check", "--json", "wolf", "wolfx"]);
    assert_success(&output);
    let json = parse_json_stdout(&output);
    assert_eq!(
        json,
        serde_json::json!([
            {"input": "wolf", "verdict": "VALID"},
            {"input": "wolfx", "verdict": "INVALID"},
        ])
    );
}

#[test]
fn check_reads_candidates_from_stdin() {
    let output = run_delaymaster_with_stdin(&["check", "--stdin"], "wolf\r\nwwollff\n\nwolfwolf\n");
    assert_success(&output);
    assert_eq!(
        stdout_lines(&output),
        vec!["VALID", "INVALID", "INVALID", "VALID"]
    );
}

#[test]
fn check_strict_exit_fails_on_invalid_input() {
    let output = run_delaymaster(["check", "--strict-exit", "wolf", "owlf"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output), vec!["VALID", "INVALID"]);

    let output = run_delaymaster(["check", "--strict-exit", "wolf", "wolfwolf"]);
    assert_success(&output);
}

#[test]
fn check_without_inputs_is_a_usage_error() {
    let output = run_delaymaster(["check"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no input given"));
    assert!(stderr.contains("use --stdin"));
}

#[test]
fn check_with_empty_stdin_is_a_usage_error() {
    let output = run_delaymaster_with_stdin(&["check", "--stdin"], "");
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stdin had no lines"));
    assert!(!stderr.contains("use --stdin"));
}

#[test]
fn check_reports_unreadable_stdin() {
    let output = run_delaymaster_with_stdin_bytes(&["check", "--stdin"], b"wolf\n\xff\xfe\n");
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr).starts_with("error: failed to read stdin"),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn explain_reports_rejection_reason() {
    let output = run_delaymaster(["explain", "wolfwol"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Verdict: INVALID"));
    assert!(stdout.contains("Reason: block starting at offset 4 ends at offset 7"));
}

#[test]
fn explain_json_includes_blocks_and_rejection() {
    let output = run_delaymaster(["explain", "--json", "--engine", "regex", "wolfwwollff"]);
    assert_success(&output);
    let json = parse_json_stdout(&output);
    assert_eq!(json["verdict"], "INVALID");
    assert_eq!(json["engine"], "regex");
    assert_eq!(json["blocks"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["rejection"]["kind"], "unbalanced");
    assert_eq!(json["rejection"]["block"]["start"], 4);
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let output = run_delaymaster(["-vv", "check", "wolfx"]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["INVALID"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("input rejected"));
}
