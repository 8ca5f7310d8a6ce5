//! Projection of a raw models.dev catalog into the normalized [`ProviderMap`].
//!
//! The catalog is read as loosely typed JSON: entries that are not objects are
//! skipped, and every missing field falls back to a default instead of failing
//! the parse.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::catalog::types::{Model, Provider, ProviderMap};
use crate::error::Result;

/// Read and parse the catalog at `path`.
///
/// Fails if the file cannot be read or is not valid JSON.
pub fn parse_catalog(path: impl AsRef<Path>) -> Result<ProviderMap> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&content)?;

    let providers = parse_catalog_value(&data);
    log::info!("Parsed {} providers from {}", providers.len(), path.display());

    Ok(providers)
}

/// Normalize an already decoded catalog document.
///
/// A top-level value that is not an object yields an empty map. Providers
/// without any usable model are dropped.
pub fn parse_catalog_value(data: &Value) -> ProviderMap {
    let mut providers = ProviderMap::new();

    let Some(entries) = data.as_object() else {
        log::debug!("Catalog root is not an object, nothing to parse");
        return providers;
    };

    for (provider_id, provider_info) in entries {
        let Some(provider_info) = provider_info.as_object() else {
            log::debug!("Skipping provider '{}': entry is not an object", provider_id);
            continue;
        };

        if let Some(provider) = transform_provider_data(provider_id, provider_info) {
            providers.insert(provider_id.clone(), provider);
        }
    }

    providers
}

/// Build a provider from its catalog entry, or None if it has no models.
fn transform_provider_data(
    provider_id: &str,
    provider_info: &Map<String, Value>,
) -> Option<Provider> {
    let mut models = IndexMap::new();

    for (model_id, model_info) in nested(provider_info, "models").into_iter().flatten() {
        let Some(model_info) = model_info.as_object() else {
            log::debug!(
                "Skipping model '{}/{}': entry is not an object",
                provider_id,
                model_id
            );
            continue;
        };

        models.insert(model_id.clone(), transform_model_data(model_id, model_info));
    }

    if models.is_empty() {
        log::debug!("Dropping provider '{}': no models", provider_id);
        return None;
    }

    Some(Provider {
        id: provider_id.to_string(),
        name: string_or(provider_info, "name", provider_id),
        api: string_or(provider_info, "api", ""),
        doc: string_or(provider_info, "doc", ""),
        model_count: models.len(),
        models,
    })
}

fn transform_model_data(model_id: &str, model_info: &Map<String, Value>) -> Model {
    let limit = nested(model_info, "limit");
    let cost = nested(model_info, "cost");

    Model {
        id: string_or(model_info, "id", model_id),
        name: string_or(model_info, "name", model_id),
        family: string_or(model_info, "family", ""),
        context_limit: token_count(limit, "context"),
        output_limit: token_count(limit, "output"),
        knowledge_cutoff: string_or(model_info, "knowledge", ""),
        release_date: string_or(model_info, "release_date", ""),
        reasoning: flag(model_info, "reasoning"),
        tool_call: flag(model_info, "tool_call"),
        temperature: flag(model_info, "temperature"),
        cost_input: price(cost, "input"),
        cost_output: price(cost, "output"),
    }
}

/// Nested object lookup; absent or non-object values read as empty.
fn nested<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    object.get(key).and_then(Value::as_object)
}

fn string_or(object: &Map<String, Value>, key: &str, default: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn flag(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn token_count(object: Option<&Map<String, Value>>, key: &str) -> u64 {
    match object.and_then(|o| o.get(key)) {
        Some(value) => value
            .as_u64()
            .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
            .unwrap_or(0),
        None => 0,
    }
}

fn price(object: Option<&Map<String, Value>>, key: &str) -> f64 {
    object
        .and_then(|o| o.get(key))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}
