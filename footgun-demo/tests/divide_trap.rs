use footgun_demo::*;

#[test]
fn hardware_divide_by_zero_is_uncatchable() {
    let output = run_scenario(Scenario::DivideTrap, None);

    assert_killed_by(&output, libc::SIGFPE);
    assert_printed_in_order(
        &output,
        "harness: calling raise_integer_div_by_zero()",
        "raise_integer_div_by_zero: about to divide one by zero",
    );
    assert_never_printed(&output, "1 / 0 =");
}
