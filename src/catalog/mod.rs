//! Provider catalog pipeline for the Mafia AI benchmark.
//!
//! The catalog is a models.dev export: a JSON object keyed by provider id,
//! where each provider carries a `models` object keyed by model id. This
//! module turns it into a report in four stages:
//!
//! ```text
//! catalog JSON → parser → ProviderMap ─┬→ summary (stdout)
//!                                      └→ filter → configs → report JSON
//! ```
//!
//! - [`parser`]: lenient projection into [`Provider`] / [`Model`] records
//! - [`summary`]: ranked console output
//! - [`filter`]: key provider selection against a fixed allowlist
//! - [`configs`]: [`ProviderConfig`] generation from a fixed mapping table
//! - [`report`]: JSON report serialization
//!
//! # Example
//!
//! ```rust
//! use openrouter_catalog::catalog::{
//!     extract_key_providers, generate_provider_configs, parse_catalog_value,
//! };
//!
//! let data = serde_json::json!({
//!     "openai": {
//!         "name": "OpenAI",
//!         "models": { "gpt-x": { "limit": { "context": 200000 } } }
//!     },
//!     "acme": { "models": { "m1": {} } }
//! });
//!
//! let providers = parse_catalog_value(&data);
//! let key_providers = extract_key_providers(&providers);
//! let configs = generate_provider_configs(&key_providers);
//!
//! assert_eq!(providers.len(), 2);
//! assert_eq!(key_providers.len(), 1);
//! assert_eq!(configs[0].mafia_provider, "OPENAI");
//! assert_eq!(configs[0].best_model_context, 200000);
//! ```

pub mod configs;
pub mod filter;
pub mod parser;
pub mod report;
pub mod summary;
pub mod types;

pub use configs::{PROVIDER_MAPPING, generate_provider_configs, provider_mapping};
pub use filter::{KEY_PROVIDER_IDS, extract_key_providers, is_key_provider};
pub use parser::{parse_catalog, parse_catalog_value};
pub use report::{read_report, write_report};
pub use summary::{write_key_providers, write_summary};
pub use types::{Model, Provider, ProviderConfig, ProviderMap, Report, ReportSummary};
