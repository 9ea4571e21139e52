//! CacCalc — customer acquisition cost calculator.

use caccalc_cli::ui::print_error;
use caccalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing on stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
