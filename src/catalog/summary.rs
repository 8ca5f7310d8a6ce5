//! Human-readable console output.

use std::io::Write;

use crate::catalog::types::{Model, Provider, ProviderConfig, ProviderMap};

const RULE_WIDTH: usize = 80;

fn write_banner<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

fn yes_no(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Context window in thousands of tokens, as printed in the summary.
pub fn context_in_thousands(context_limit: u64) -> String {
    let thousands = if context_limit > 0 {
        context_limit as f64 / 1024.0
    } else {
        0.0
    };
    format!("{thousands:.0}K tokens")
}

/// Providers ordered by descending model count. Equal counts keep catalog order.
pub fn ranked_providers(providers: &ProviderMap) -> Vec<&Provider> {
    let mut ranked: Vec<&Provider> = providers.values().collect();
    ranked.sort_by(|a, b| b.model_count.cmp(&a.model_count));
    ranked
}

/// The `limit` models of `provider` with the largest context windows.
pub fn top_models(provider: &Provider, limit: usize) -> Vec<&Model> {
    let mut models: Vec<&Model> = provider.models.values().collect();
    models.sort_by(|a, b| b.context_limit.cmp(&a.context_limit));
    models.truncate(limit);
    models
}

/// Print the provider summary: every provider with its top models.
pub fn write_summary<W: Write>(
    out: &mut W,
    providers: &ProviderMap,
    top: usize,
) -> std::io::Result<()> {
    write_banner(out, "OPENROUTER MODELS SUMMARY")?;
    writeln!(out, "Total Providers: {}", providers.len())?;
    writeln!(out)?;

    for provider in ranked_providers(providers) {
        writeln!(out, "\n{} ({})", provider.name, provider.id)?;
        writeln!(out, "  API: {}", provider.api)?;
        writeln!(out, "  Models: {}", provider.model_count)?;
        writeln!(out, "  Doc: {}", provider.doc)?;

        writeln!(out, "  Top Models:")?;
        for model in top_models(provider, top) {
            writeln!(out, "    - {}", model.name)?;
            writeln!(out, "      Context: {}", context_in_thousands(model.context_limit))?;
            writeln!(
                out,
                "      Reasoning: {}, Tools: {}",
                yes_no(model.reasoning),
                yes_no(model.tool_call)
            )?;
            writeln!(
                out,
                "      Cost: ${:.3}/${:.3} per 1M tokens",
                model.cost_input, model.cost_output
            )?;
        }
    }

    Ok(())
}

/// Print the key provider section from the generated configs.
pub fn write_key_providers<W: Write>(
    out: &mut W,
    configs: &[ProviderConfig],
) -> std::io::Result<()> {
    writeln!(out)?;
    write_banner(out, "KEY PROVIDERS FOR MAFIA AI BENCHMARK")?;

    for config in configs {
        writeln!(out, "\n{}", config.name)?;
        writeln!(out, "  Mafia Provider: {}", config.mafia_provider)?;
        writeln!(out, "  API: {}", config.api)?;
        writeln!(out, "  Default Model: {}", config.default_model)?;
        writeln!(
            out,
            "  Best Model: {} ({} context)",
            config.best_model, config.best_model_context
        )?;
        writeln!(out, "  Total Models: {}", config.total_models)?;
    }

    Ok(())
}
