use context_guardian::cli::Args;
use context_guardian::display::Language;
use serial_test::serial;

fn parse() -> Args {
    <Args as clap::Parser>::try_parse_from(["context_guardian"]).unwrap()
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    unsafe {
        std::env::set_var("CONTEXT_GUARDIAN_LIMIT", "1000000");
        std::env::set_var("CONTEXT_GUARDIAN_THRESHOLD", "80");
        std::env::set_var("CONTEXT_GUARDIAN_LANG", "en");
    }

    let config = parse().config().unwrap();
    assert_eq!(config.budget.limit, 1_000_000);
    assert_eq!(config.budget.threshold_tokens(), 800_000);
    assert_eq!(config.language, Language::English);

    unsafe {
        std::env::remove_var("CONTEXT_GUARDIAN_LIMIT");
        std::env::remove_var("CONTEXT_GUARDIAN_THRESHOLD");
        std::env::remove_var("CONTEXT_GUARDIAN_LANG");
    }
}

#[test]
#[serial]
fn flag_wins_over_environment() {
    unsafe { std::env::set_var("CONTEXT_GUARDIAN_THRESHOLD", "10") };

    let args = <Args as clap::Parser>::try_parse_from(["context_guardian", "--threshold", "60"])
        .unwrap();
    assert_eq!(args.threshold, 60);

    unsafe { std::env::remove_var("CONTEXT_GUARDIAN_THRESHOLD") };
}

#[test]
#[serial]
fn unset_environment_uses_reference_values() {
    let config = parse().config().unwrap();
    assert_eq!(config.budget.threshold_tokens(), 150_000);
}
