//! End-to-end report run.

use std::io::Write;
use std::path::PathBuf;

use crate::catalog::{
    Report, extract_key_providers, generate_provider_configs, parse_catalog, write_key_providers,
    write_report, write_summary,
};
use crate::error::{Error, Result};
use crate::settings::ReportSettings;

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The input catalog does not exist; nothing was written.
    InputMissing(PathBuf),
    /// The report was written.
    Completed {
        report_path: PathBuf,
        total_providers: usize,
        key_providers: usize,
        configs: usize,
    },
}

/// Parse, summarize, filter and persist, printing progress to `out`.
///
/// A missing input file is reported on `out` and is not an error. Parse and
/// write failures are returned.
pub fn run<W: Write>(settings: &ReportSettings, out: &mut W) -> Result<RunOutcome> {
    let input = &settings.input_path;

    if !input.exists() {
        writeln!(out, "Error: {}", Error::InputNotFound(input.clone()))?;
        log::warn!("Input catalog {} is missing, skipping run", input.display());
        return Ok(RunOutcome::InputMissing(input.clone()));
    }

    writeln!(out, "Parsing OpenRouter models JSON...")?;
    let providers = parse_catalog(input)?;

    write_summary(out, &providers, settings.top_models)?;

    let key_providers = extract_key_providers(&providers);
    let configs = generate_provider_configs(&key_providers);
    write_key_providers(out, &configs)?;

    let report = Report::new(providers.len(), key_providers, configs);
    write_report(&report, &settings.output_path)?;

    writeln!(
        out,
        "\nDetailed report saved to: {}",
        settings.output_path.display()
    )?;

    Ok(RunOutcome::Completed {
        report_path: settings.output_path.clone(),
        total_providers: report.summary.total_providers,
        key_providers: report.summary.key_providers,
        configs: report.configs.len(),
    })
}
