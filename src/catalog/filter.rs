//! Selection of the providers the Mafia AI benchmark cares about.

use crate::catalog::types::ProviderMap;

/// Provider id tokens relevant to the benchmark.
pub const KEY_PROVIDER_IDS: [&str; 11] = [
    "openai",
    "anthropic",
    "google",
    "deepseek",
    "groq",
    "meta",
    "xai",
    "moonshotai",
    "qwen",
    "ollama",
    "lm-studio",
];

/// Whether `provider_id` equals or case-insensitively contains a key token.
pub fn is_key_provider(provider_id: &str) -> bool {
    let lower = provider_id.to_lowercase();
    KEY_PROVIDER_IDS
        .iter()
        .any(|token| provider_id == *token || lower.contains(token))
}

/// Extract the key providers from the full provider map.
///
/// Each token is checked twice: once as an exact id and once as a substring of
/// every lowercased id. A provider hit by several tokens is kept once, at the
/// position of its first hit.
pub fn extract_key_providers(providers: &ProviderMap) -> ProviderMap {
    let mut key_providers = ProviderMap::new();

    for token in KEY_PROVIDER_IDS {
        if let Some(provider) = providers.get(token) {
            key_providers.insert(token.to_string(), provider.clone());
        }

        for (full_id, provider) in providers {
            if full_id.to_lowercase().contains(token) {
                key_providers.insert(full_id.clone(), provider.clone());
            }
        }
    }

    log::info!(
        "Selected {} key providers out of {}",
        key_providers.len(),
        providers.len()
    );

    key_providers
}
