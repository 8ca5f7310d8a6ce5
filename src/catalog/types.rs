//! Data structures produced by the catalog pipeline.
//!
//! These are the normalized shapes, not the raw models.dev schema: every field
//! has already been defaulted, so downstream stages never deal with absent
//! values. Serialized field names are the ones the report consumers expect.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Providers keyed by provider id, in catalog order.
pub type ProviderMap = IndexMap<String, Provider>;

/// A provider together with the models that survived parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// The provider id (top-level key in the catalog).
    pub id: String,

    /// Display name, the id when the catalog has none.
    pub name: String,

    /// API base identifier, empty when absent.
    pub api: String,

    /// Documentation URL, empty when absent.
    pub doc: String,

    /// Always equal to `models.len()`.
    pub model_count: usize,

    /// Models keyed by model id.
    pub models: IndexMap<String, Model>,
}

impl Provider {
    /// The model with the largest context window.
    ///
    /// The first model reaching the maximum wins. Returns None only for a
    /// provider without models, which the parser never produces.
    pub fn best_model(&self) -> Option<&Model> {
        self.models.values().fold(None, |best: Option<&Model>, model| match best {
            Some(current) if model.context_limit <= current.context_limit => Some(current),
            _ => Some(model),
        })
    }
}

/// A single model variant with its limits, capabilities and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub family: String,

    /// Maximum context window size in tokens.
    pub context_limit: u64,

    /// Maximum output tokens per request.
    pub output_limit: u64,

    pub knowledge_cutoff: String,
    pub release_date: String,

    pub reasoning: bool,
    pub tool_call: bool,
    pub temperature: bool,

    /// Cost per 1M input tokens.
    pub cost_input: f64,

    /// Cost per 1M output tokens.
    pub cost_output: f64,
}

/// Flattened benchmark configuration for one key provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name used by the benchmark (e.g. `OPENAI`).
    pub mafia_provider: String,
    pub original_id: String,
    pub name: String,
    pub api: String,
    pub default_model: String,

    /// Display name of the highest-context model.
    pub best_model: String,
    pub best_model_context: u64,
    pub total_models: usize,
}

/// Counts written at the top of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_providers: usize,
    pub key_providers: usize,
}

/// The document written to the report path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub providers: ProviderMap,
    pub configs: Vec<ProviderConfig>,
}

impl Report {
    /// Assemble a report from the full provider count and the filtered stages.
    pub fn new(
        total_providers: usize,
        providers: ProviderMap,
        configs: Vec<ProviderConfig>,
    ) -> Self {
        Self {
            summary: ReportSummary {
                total_providers,
                key_providers: providers.len(),
            },
            providers,
            configs,
        }
    }
}
