//! Benchmark configuration entries derived from the key providers.

use crate::catalog::types::{ProviderConfig, ProviderMap};

/// Provider id → (benchmark provider name, default model).
pub const PROVIDER_MAPPING: [(&str, (&str, &str)); 11] = [
    ("openai", ("OPENAI", "gpt-5.1")),
    ("anthropic", ("ANTHROPIC", "claude-sonnet-4")),
    ("google", ("GOOGLE", "gemini-2.5-pro")),
    ("deepseek", ("DEEPSEEK", "deepseek-chat")),
    ("groq", ("GROQ", "llama2-70b-4096")),
    ("meta", ("META", "llama-4-scout")),
    ("xai", ("XAI", "grok-4")),
    ("moonshotai", ("MOONSHOT", "kimi-k2-thinking")),
    ("qwen", ("QWEN", "qwen3-235b-a22b-instruct")),
    ("ollama", ("OLLAMA", "llama2")),
    ("lm-studio", ("LM_STUDIO", "llama-2-7b-chat")),
];

/// Look up the benchmark name and default model for an exact provider id.
pub fn provider_mapping(provider_id: &str) -> Option<(&'static str, &'static str)> {
    PROVIDER_MAPPING
        .iter()
        .find(|(id, _)| *id == provider_id)
        .map(|(_, mapping)| *mapping)
}

/// Generate one config per provider that has a static mapping.
///
/// Order follows `providers`. Providers without a mapping (e.g. ids that only
/// matched the key filter by substring) are skipped.
pub fn generate_provider_configs(providers: &ProviderMap) -> Vec<ProviderConfig> {
    let mut configs = Vec::new();

    for (provider_id, provider) in providers {
        let Some((mafia_provider, default_model)) = provider_mapping(provider_id) else {
            continue;
        };
        let Some(best_model) = provider.best_model() else {
            log::warn!("Provider '{}' has no models, skipping config", provider_id);
            continue;
        };

        configs.push(ProviderConfig {
            mafia_provider: mafia_provider.to_string(),
            original_id: provider_id.clone(),
            name: provider.name.clone(),
            api: provider.api.clone(),
            default_model: default_model.to_string(),
            best_model: best_model.name.clone(),
            best_model_context: best_model.context_limit,
            total_models: provider.model_count,
        });
    }

    configs
}
