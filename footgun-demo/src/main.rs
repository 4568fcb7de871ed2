use clap::Parser;
use footgun_demo::Scenario;

#[derive(Parser)]
struct Command {
    /// The failure scenario to run; with no scenario the whole
    /// demonstration sequence runs
    #[clap(long, value_enum)]
    scenario: Option<Scenario>,
    /// Status code handed to the mid-call exit
    #[clap(long, default_value_t = -666, allow_negative_numbers = true)]
    status: i32,
    /// Lists the available scenarios
    #[clap(long)]
    list: bool,
}

fn print_sentinels(sentinels: &footgun::MathSentinels) {
    println!("1.0 / 0.0 = {}", sentinels.one_over_zero);
    println!("sqrt(-1.0) = {}", sentinels.sqrt_of_negative);
    println!("ln(0.0) = {}", sentinels.log_of_zero);
    println!("ln(-1.0) = {}", sentinels.log_of_negative);
    println!("asin(2.0) = {}", sentinels.asin_of_two);
    println!("NaN as i64 = {}", sentinels.truncated());
}

fn run_one(scenario: Scenario, status: i32) -> anyhow::Result<()> {
    match scenario {
        Scenario::Math => {
            println!("harness: calling degenerate_math()");
            let sentinels = footgun::degenerate_math();
            print_sentinels(&sentinels);
            println!("harness: degenerate_math() returned normally");
            Ok(())
        }
        Scenario::NullWrite => {
            println!("harness: calling write_through_null()");
            footgun::write_through_null();
            anyhow::bail!("the null write came back alive, this platform tolerates it");
        }
        Scenario::DivideTrap => {
            println!("harness: calling raise_integer_div_by_zero()");
            footgun::raise_integer_div_by_zero();
            anyhow::bail!("the divide came back alive, SIGFPE never arrived");
        }
        Scenario::MidExit => {
            println!("harness: calling exit_mid_call({status})");
            footgun::exit_mid_call(status);
        }
    }
}

/// The original demonstration: the math returns with its sentinels, the
/// null write is expected to take the process down, and the exit at the
/// end only ever runs on a platform that shrugs off null writes.
fn run_sequence(status: i32) -> anyhow::Result<()> {
    println!("harness: calling degenerate_math()");
    let sentinels = footgun::degenerate_math();
    print_sentinels(&sentinels);
    println!("harness: degenerate_math() returned normally");

    println!("harness: calling write_through_null()");
    footgun::write_through_null();
    println!("harness: write_through_null() returned normally");

    println!("harness: calling exit_mid_call({status})");
    footgun::exit_mid_call(status);
}

fn real_main() -> anyhow::Result<()> {
    let cmd = Command::parse();

    if cmd.list {
        use clap::ValueEnum;
        for variant in Scenario::value_variants() {
            println!("{variant}");
        }
        return Ok(());
    }

    match cmd.scenario {
        Some(scenario) => run_one(scenario, cmd.status),
        None => run_sequence(cmd.status),
    }
}

fn main() {
    // Most scenarios are supposed to kill this process; an error means
    // one of them came back, so exit with a code the tests can tell
    // apart from both a signal death and a clean run.
    if let Err(e) = real_main() {
        eprintln!("error: {e:#}");

        #[allow(clippy::exit)]
        std::process::exit(222);
    }
}
