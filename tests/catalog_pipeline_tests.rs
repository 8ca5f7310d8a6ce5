//! Integration tests for a full report run.

#[cfg(test)]
mod tests {
    use openrouter_catalog::{ReportSettings, RunOutcome, catalog::read_report, run};
    use std::path::Path;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{
        "acme": {
            "name": "Acme",
            "models": {
                "m1": { "limit": { "context": 4096 } },
                "m2": { "limit": { "context": 8192 } }
            }
        },
        "openai": {
            "name": "OpenAI",
            "api": "https://api.openai.com",
            "models": {
                "gpt-x": {
                    "name": "GPT X",
                    "limit": { "context": 200000 },
                    "cost": { "input": 1.5, "output": 6.0 }
                }
            }
        },
        "azure-openai": {
            "name": "Azure OpenAI",
            "models": { "gpt-x": { "limit": { "context": 128000 } } }
        },
        "broken": "not a provider"
    }"#;

    fn settings(dir: &Path) -> ReportSettings {
        ReportSettings::builder()
            .input_path(dir.join("openrouter_models.json"))
            .output_path(dir.join("openrouter_models_report.json"))
            .build()
            .unwrap()
    }

    fn run_to_string(settings: &ReportSettings) -> (RunOutcome, String) {
        let mut buf = Vec::new();
        let outcome = run(settings, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_full_run_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(temp_dir.path());
        std::fs::write(&settings.input_path, CATALOG).unwrap();

        let (outcome, text) = run_to_string(&settings);
        assert_eq!(
            outcome,
            RunOutcome::Completed {
                report_path: settings.output_path.clone(),
                total_providers: 3,
                key_providers: 2,
                configs: 1,
            }
        );

        assert!(text.starts_with("Parsing OpenRouter models JSON...\n"));
        assert!(text.contains("Total Providers: 3"));
        assert!(text.contains("KEY PROVIDERS FOR MAFIA AI BENCHMARK"));
        assert!(text.contains("  Mafia Provider: OPENAI\n"));
        assert!(text.contains("  Best Model: GPT X (200000 context)\n"));
        assert!(text.ends_with(&format!(
            "\nDetailed report saved to: {}\n",
            settings.output_path.display()
        )));

        let report = read_report(&settings.output_path).unwrap();
        assert_eq!(report.summary.total_providers, 3);
        assert_eq!(report.summary.key_providers, 2);
        assert!(report.providers.contains_key("openai"));
        assert!(report.providers.contains_key("azure-openai"));
        assert!(!report.providers.contains_key("acme"));

        assert_eq!(report.configs.len(), 1);
        assert_eq!(report.configs[0].mafia_provider, "OPENAI");
        assert_eq!(report.configs[0].best_model_context, 200000);
    }

    #[test]
    fn test_acme_only_catalog_has_no_key_providers() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(temp_dir.path());
        std::fs::write(
            &settings.input_path,
            r#"{"acme": {"name": "Acme", "models": {"m1": {"limit": {"context": 4096}}, "m2": {"limit": {"context": 8192}}}}}"#,
        )
        .unwrap();

        let (_, text) = run_to_string(&settings);
        assert!(text.contains("\nAcme (acme)\n"));
        assert!(text.contains("  Models: 2\n"));

        let report = read_report(&settings.output_path).unwrap();
        assert_eq!(report.summary.total_providers, 1);
        assert_eq!(report.summary.key_providers, 0);
        assert!(report.providers.is_empty());
        assert!(report.configs.is_empty());
    }

    #[test]
    fn test_missing_input_stops_quietly() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(temp_dir.path());

        let (outcome, text) = run_to_string(&settings);
        assert_eq!(outcome, RunOutcome::InputMissing(settings.input_path.clone()));
        assert_eq!(
            text,
            format!("Error: File not found: {}\n", settings.input_path.display())
        );
        assert!(!settings.output_path.exists());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(temp_dir.path());
        std::fs::write(&settings.input_path, "{ not json").unwrap();

        let mut buf = Vec::new();
        let result = run(&settings, &mut buf);
        assert!(matches!(result, Err(openrouter_catalog::Error::Json(_))));
        assert!(!settings.output_path.exists());
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings = ReportSettings::builder()
            .input_path(temp_dir.path().join("in.json"))
            .output_path(temp_dir.path().join("no-such-dir").join("out.json"))
            .build()
            .unwrap();
        std::fs::write(&settings.input_path, CATALOG).unwrap();

        let mut buf = Vec::new();
        let result = run(&settings, &mut buf);
        assert!(matches!(result, Err(openrouter_catalog::Error::Io(_))));
    }
}
