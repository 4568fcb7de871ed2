//! Helpers for observing the failure scenarios from outside the
//! process that runs them. The scenarios kill (or degrade) the process
//! they execute in, so everything here works by spawning the
//! `footgun-demo` binary as a child and asserting on what the OS
//! reported about it.

use std::process::Output;

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum Scenario {
    /// Degenerate float math, returns normally with sentinel values
    Math,
    /// Write through a null pointer, expected SIGSEGV
    NullWrite,
    /// Voluntary exit from inside a callee
    MidExit,
    /// Hardware integer division by zero, expected SIGFPE
    DivideTrap,
}

use std::fmt;
impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Math => "math",
            Self::NullWrite => "null-write",
            Self::MidExit => "mid-exit",
            Self::DivideTrap => "divide-trap",
        })
    }
}

/// Spawns the demo binary with the given arguments and waits for it to
/// die, echoing its output so test logs show what the child printed.
pub fn run_harness(args: &[String]) -> Output {
    use std::env;

    // The binary lands next to the test executable's parent dir.
    // Adapted from
    // https://github.com/rust-lang/cargo/blob/485670b3983b52289a2f353d589c57fae2f60f82/tests/testsuite/support/mod.rs#L507
    let mut cmd_path = env::current_exe().expect("failed to get exe path");
    cmd_path.pop();
    if cmd_path.ends_with("deps") {
        cmd_path.pop();
    }

    cmd_path.push("footgun-demo");
    if !env::consts::EXE_SUFFIX.is_empty() {
        cmd_path.set_extension(env::consts::EXE_SUFFIX);
    }

    let mut cmd = std::process::Command::new(&cmd_path);
    cmd.stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped());
    cmd.args(args);

    let child = cmd.spawn().expect("failed to run footgun-demo");
    let output = child.wait_with_output().expect("failed to wait for output");

    println!("{}", String::from_utf8_lossy(&output.stdout));
    eprintln!("{}", String::from_utf8_lossy(&output.stderr));

    output
}

/// Runs a single scenario in a child process.
pub fn run_scenario(scenario: Scenario, status: Option<i32>) -> Output {
    capture_output();

    let mut args = vec!["--scenario".to_owned(), scenario.to_string()];
    if let Some(code) = status {
        args.push("--status".to_owned());
        args.push(code.to_string());
    }

    run_harness(&args)
}

/// Runs the full no-argument demonstration sequence in a child process.
pub fn run_sequence() -> Output {
    capture_output();
    run_harness(&[])
}

/// Asserts the child was torn down by the OS rather than exiting.
///
/// On unix that means no exit code and precisely the expected signal;
/// elsewhere we can only check that no code was produced.
pub fn assert_killed_by(output: &Output, signal: i32) {
    assert!(
        output.status.code().is_none(),
        "expected abnormal termination, got exit code {:?}",
        output.status.code()
    );

    cfg_if::cfg_if! {
        if #[cfg(unix)] {
            use std::os::unix::process::ExitStatusExt;
            assert_eq!(output.status.signal(), Some(signal));
        } else {
            let _ = signal;
        }
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("child stdout was not utf-8")
}

/// Asserts `earlier` printed before `later`, and that both printed.
pub fn assert_printed_in_order(output: &Output, earlier: &str, later: &str) {
    let stdout = stdout_of(output);
    let first = stdout.find(earlier).unwrap_or_else(|| {
        panic!("child never printed {earlier:?}");
    });
    let second = stdout.find(later).unwrap_or_else(|| {
        panic!("child never printed {later:?}");
    });
    assert!(first < second, "{earlier:?} printed after {later:?}");
}

pub fn assert_never_printed(output: &Output, marker: &str) {
    assert!(
        !stdout_of(output).contains(marker),
        "child printed {marker:?}, which should be unreachable"
    );
}

/// Spawns `count` children running the same scenario in parallel; every
/// one of them must die the same way.
pub fn run_repeated(scenario: Scenario, count: u32, signal: i32) {
    use rayon::prelude::*;

    (0..count).into_par_iter().for_each(|_| {
        let output = run_scenario(scenario, None);
        assert_killed_by(&output, signal);
    });
}

#[inline]
pub fn capture_output() {
    static SUB: std::sync::Once = std::sync::Once::new();

    SUB.call_once(|| {
        tracing_subscriber::fmt().with_test_writer().init();
    });
}
