pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpStatusFetcher, InputReader, OutputWriter};
pub use config::{toml_config::TomlConfig, CollatorConfig};
pub use core::{collator::Collator, etl::EtlEngine};
pub use domain::model::{CollationOutcome, CollationSummary, CombinedRecord, LookupOutcome};
pub use utils::error::{CollateError, Result};
