//! Paths and limits used by a report run.

use std::path::PathBuf;

use derive_builder::Builder;

use crate::error::Error;

/// Location of the catalog exported from models.dev.
pub const DEFAULT_INPUT_PATH: &str = "/config/workspace/mafia/openrouter_models.json";

/// Location the derived report is written to.
pub const DEFAULT_OUTPUT_PATH: &str = "/config/workspace/mafia/openrouter_models_report.json";

/// Settings for one run of the pipeline.
///
/// The binary always uses [`ReportSettings::default`]; the builder exists so
/// callers (and tests) can redirect the two files.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(pattern = "owned", setter(into), build_fn(error = "Error"))]
pub struct ReportSettings {
    /// Catalog JSON to read.
    #[builder(default = "PathBuf::from(DEFAULT_INPUT_PATH)")]
    pub input_path: PathBuf,

    /// Report JSON to write. Overwritten if present.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_PATH)")]
    pub output_path: PathBuf,

    /// Number of models listed per provider in the summary.
    #[builder(default = "5")]
    pub top_models: usize,
}

impl ReportSettings {
    /// Create a builder for configuring the settings.
    pub fn builder() -> ReportSettingsBuilder {
        ReportSettingsBuilder::default()
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            top_models: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        let settings = ReportSettings::builder().build().unwrap();
        assert_eq!(settings, ReportSettings::default());
        assert_eq!(settings.top_models, 5);
    }

    #[test]
    fn test_builder_overrides_paths() {
        let settings = ReportSettings::builder()
            .input_path("in.json")
            .output_path("out.json")
            .build()
            .unwrap();

        assert_eq!(settings.input_path, PathBuf::from("in.json"));
        assert_eq!(settings.output_path, PathBuf::from("out.json"));
    }
}
