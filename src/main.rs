use std::io::Read;
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use context_guardian::cli::Args;
use context_guardian::monitor::{Outcome, evaluate};

fn main() -> ExitCode {
    // clap would exit with 2 on a bad flag, which Claude Code reads as a warning
    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };
    setup_logging(args.debug);

    let config = match args.config() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("invalid configuration: {e:#}");
            return ExitCode::SUCCESS;
        }
    };

    let mut stdin = Vec::new();
    if let Err(e) = std::io::stdin().read_to_end(&mut stdin) {
        tracing::debug!(error = %e, "failed to read stdin");
        return ExitCode::SUCCESS;
    }

    let outcome = evaluate(&stdin, &config);
    if let Outcome::Warn(ref message) = outcome {
        eprintln!("{message}");
    } else {
        tracing::debug!(?outcome, "no warning");
    }
    ExitCode::from(outcome.exit_code())
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("context_guardian=debug")
    } else {
        EnvFilter::new("context_guardian=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
