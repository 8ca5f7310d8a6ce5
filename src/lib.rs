pub mod catalog;
pub mod error;
pub mod runner;
pub mod settings;

// re-exports
pub use error::{Error, Result};
pub use runner::{RunOutcome, run};
pub use settings::ReportSettings;
