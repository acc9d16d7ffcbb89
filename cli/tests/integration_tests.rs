use std::process::{Command, Output};

const NOTICE: &str = "LSW: Command not yet implemented\nRun 'lsw --help' for usage\n";

fn lsw(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lsw"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lsw")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

// ---------------------------------------------------------------------------
// Help
// ---------------------------------------------------------------------------

#[test]
fn no_arguments_prints_help() {
    let output = lsw(&[]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("\n🏴‍☠️ LSW - Linux Subsystem for Windows\n"));
    assert!(text.contains("COMMAND HIERARCHY:"));
    assert!(text.ends_with("Making Windows software universal\n\n"));
}

#[test]
fn every_help_alias_prints_identical_help() {
    let expected = stdout(&lsw(&[]));
    for alias in ["--help", "--h", "-?", "?"] {
        let output = lsw(&[alias]);
        assert_eq!(output.status.code(), Some(0), "{alias}");
        assert_eq!(stdout(&output), expected, "{alias}");
    }
}

#[test]
fn help_alias_ignores_following_arguments() {
    let expected = stdout(&lsw(&[]));
    let output = lsw(&["--help", "--run", "app.exe"]);
    assert_eq!(stdout(&output), expected);
}

// ---------------------------------------------------------------------------
// Not-implemented notice
// ---------------------------------------------------------------------------

#[test]
fn documented_commands_print_notice() {
    let invocations: [&[&str]; 10] = [
        &["--run", "myapp.exe"],
        &["--run", "-debug", "myapp.exe"],
        &["run", "-verbose", "myapp.exe"],
        &["--install", "app.msi"],
        &["install", "-quiet", "app.msi"],
        &["--winget", "search", "chrome"],
        &["winget", "install", "-silent", "Microsoft.Office"],
        &["winget", "upgrade", "--all"],
        &["--enable"],
        &["--version"],
    ];
    for args in invocations {
        let output = lsw(args);
        assert_eq!(output.status.code(), Some(0), "{args:?}");
        assert_eq!(stdout(&output), NOTICE, "{args:?}");
    }
}

#[test]
fn per_command_help_prints_notice() {
    for command in ["--run", "--winget", "--install"] {
        let output = lsw(&[command, "--help"]);
        assert_eq!(output.status.code(), Some(0), "{command}");
        assert_eq!(stdout(&output), NOTICE, "{command}");
    }
}

#[test]
fn unknown_command_prints_notice() {
    for args in [["foobar"], ["help"], ["-h"], ["--HELP"]] {
        let args = &args[..];
        let output = lsw(args);
        assert_eq!(output.status.code(), Some(0), "{args:?}");
        assert_eq!(stdout(&output), NOTICE, "{args:?}");
    }
}

#[test]
fn double_dash_is_passed_through_as_a_command() {
    for args in [&["--"][..], &["--", "--help"][..], &["--", "--run", "app.exe"][..]] {
        let output = lsw(args);
        assert_eq!(output.status.code(), Some(0), "{args:?}");
        assert_eq!(stdout(&output), NOTICE, "{args:?}");
    }
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_prints_notice() {
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_lsw"))
        .arg(std::ffi::OsStr::from_bytes(b"run\xff"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lsw");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), NOTICE);
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn debug_logging_stays_off_stdout() {
    let output = lsw(&["--run", "-debug", "myapp.exe"]);
    assert_eq!(stdout(&output), NOTICE);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("classified arguments"), "stderr: {stderr}");
}

#[test]
fn trace_logging_includes_classifier_events() {
    let output = lsw(&["--run", "-trace", "x.exe"]);
    assert_eq!(stdout(&output), NOTICE);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("command token"), "stderr: {stderr}");
    assert!(stderr.contains("positional argument"), "stderr: {stderr}");
}

#[test]
fn piped_logs_have_no_color_codes() {
    let output = lsw(&["--run", "-debug", "myapp.exe"]);
    assert!(!output.stderr.is_empty());
    assert!(!output.stderr.contains(&0x1b), "stderr has ANSI escapes");
}

#[test]
fn default_run_is_silent_on_stderr() {
    let output = lsw(&["--run", "myapp.exe"]);
    assert!(output.stderr.is_empty());
}
