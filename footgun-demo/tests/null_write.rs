use footgun_demo::*;

#[test]
fn null_write_is_fatal() {
    let output = run_scenario(Scenario::NullWrite, None);

    assert_killed_by(&output, libc::SIGSEGV);
    assert_printed_in_order(
        &output,
        "harness: calling write_through_null()",
        "write_through_null: about to write through a null pointer",
    );
    assert_never_printed(&output, "survived writing through a null pointer");
}

#[test]
fn null_write_is_fatal_every_time() {
    run_repeated(Scenario::NullWrite, 8, libc::SIGSEGV);
}
