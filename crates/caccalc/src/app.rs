//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use caccalc_cli::completion::generate_completion;
use caccalc_cli::output::write_to_file;
use caccalc_cli::presenter::is_incomplete;
use caccalc_cli::ReportPresenter;
use caccalc_core::{CacCalculator, CacReport};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let report = calculate(config)?;
    if is_incomplete(&report) {
        info!(variant = %report.variant, "some metrics unavailable for these inputs");
    }

    let format = config.output_format()?;
    let presenter = ReportPresenter::new(format, config.quiet);
    print!("{}", presenter.render(&report)?);

    // Write to file if requested
    if let Some(ref path) = config.output {
        let plain = ReportPresenter::new(format, config.quiet)
            .with_color(false)
            .render(&report)?;
        write_to_file(path, &plain)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Resolve the variant and inputs, then compute the report.
pub fn calculate(config: &AppConfig) -> Result<CacReport> {
    let calculator = CacCalculator::for_variant(config.variant()?);
    let inputs = config.inputs()?;
    Ok(calculator.calculate(&inputs))
}
