use figures::cli::args::{Args, Operation};
use figures::cli::exit::{EXIT_USAGE, Outcome, exit_code};
use figures::orchestrator;

#[test]
fn exit_codes() {
    assert_eq!(exit_code(Outcome::Formatted), 0);
    assert_eq!(exit_code(Outcome::Fallback), 1);
    assert_eq!(EXIT_USAGE, 2);
}

#[test]
fn invalid_value_exits_with_fallback_code() {
    let args = Args::parse_from_iter(["figures", "scale", "abc", "--usd"]).expect("valid args");
    let result = orchestrator::run(&args).expect("runs");
    assert_eq!(result.output, "$0.00\n");
    assert_eq!(exit_code(result.outcome), 1);
}

#[test]
fn missing_value_exits_with_fallback_code() {
    let args = Args::parse_from_iter(["figures", "percent", "--fallback", "n/a"]).expect("valid args");
    assert_eq!(
        args.operation,
        Operation::Percent {
            value: None,
            precision: 2,
            fallback: "n/a".to_string(),
        }
    );
    let result = orchestrator::run(&args).expect("runs");
    assert_eq!(result.output, "n/a\n");
    assert_eq!(exit_code(result.outcome), 1);
}

#[test]
fn usage_errors_are_reported_by_clap() {
    let err = Args::parse_from_iter(["figures", "number", "1", "--min", "-1"]).expect_err("rejected");
    assert!(err.use_stderr());
    let err = Args::parse_from_iter(["figures", "bogus"]).expect_err("rejected");
    assert!(err.use_stderr());
}

#[test]
fn help_is_not_a_usage_error() {
    let err = Args::parse_from_iter(["figures", "--help"]).expect_err("help short-circuits");
    assert!(!err.use_stderr());
}

#[test]
fn negative_infinity_is_a_value() {
    let args = Args::parse_from_iter(["figures", "usd", "-Infinity"]).expect("valid args");
    let result = orchestrator::run(&args).expect("runs");
    assert_eq!(result.output, "-$∞\n");
    assert_eq!(exit_code(result.outcome), 0);
}
