use footgun_demo::*;

/// The no-argument run: math returns with its sentinels, the null write
/// kills the process, the mid-call exit is never reached.
#[test]
fn sequence_stops_at_the_null_write() {
    let output = run_sequence();

    assert_killed_by(&output, libc::SIGSEGV);

    assert_printed_in_order(
        &output,
        "degenerate_math: about to divide by zero",
        "harness: degenerate_math() returned normally",
    );
    assert_printed_in_order(
        &output,
        "harness: degenerate_math() returned normally",
        "write_through_null: about to write through a null pointer",
    );

    let stdout = stdout_of(&output);
    assert!(stdout.contains("sqrt(-1.0) = NaN"));

    assert_never_printed(&output, "write_through_null() returned normally");
    assert_never_printed(&output, "exit_mid_call");
}
