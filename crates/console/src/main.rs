//! Console entry point.

use std::process::ExitCode;

use console::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    // 1. Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    // 2. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 3. Run
    match console::run(&config) {
        Ok(report) => {
            println!("{report}");
            println!("Scenario = passed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "console run failed");
            ExitCode::FAILURE
        }
    }
}
