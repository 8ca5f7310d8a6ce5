//! Report serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::catalog::types::Report;
use crate::error::Result;

/// Write `report` as pretty-printed JSON, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_report(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    log::info!(
        "Wrote report with {} key providers and {} configs to {}",
        report.summary.key_providers,
        report.configs.len(),
        path.display()
    );

    Ok(())
}

/// Load a previously written report.
pub fn read_report(path: impl AsRef<Path>) -> Result<Report> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
