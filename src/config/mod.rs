pub mod toml_config;

use crate::adapters::DEFAULT_API_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollatorConfig {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub api_base_url: String,
    pub delimiter: char,
    pub monitor: bool,
}

impl Default for CollatorConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            delimiter: ',',
            monitor: false,
        }
    }
}

impl ConfigProvider for CollatorConfig {
    fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref()
    }

    fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn delimiter(&self) -> u8 {
        // validated as ASCII
        self.delimiter as u8
    }
}

impl Validate for CollatorConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.api_base_url)?;
        validation::validate_delimiter("input.delimiter", self.delimiter)?;

        if let Some(path) = &self.input_path {
            validation::validate_path("input.path", &path.to_string_lossy())?;
        }
        if let Some(path) = &self.output_path {
            validation::validate_path("output.path", &path.to_string_lossy())?;
        }

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "account-collator")]
#[command(about = "Enrich an accounts CSV with status from the accounts lookup service")]
pub struct CliConfig {
    /// Input CSV (header line, then id,...,first name,...,MM/DD/YY)
    #[arg(long, required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Output CSV, created or truncated
    #[arg(long, required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Lookup service base URL; accounts are fetched from <base>/accounts/<id>
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// TOML config file; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Field delimiter for both files
    #[arg(long)]
    pub delimiter: Option<char>,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file if one was given and applies command line overrides.
    pub fn resolve(&self) -> Result<CollatorConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?.into_collator_config(),
            None => CollatorConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.output_path = Some(output.clone());
        }
        if let Some(base_url) = &self.api_base_url {
            config.api_base_url = base_url.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        config.monitor |= self.monitor;

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_requires_paths_without_config() {
        assert!(CliConfig::try_parse_from(["account-collator"]).is_err());
        assert!(CliConfig::try_parse_from(["account-collator", "--input", "in.csv"]).is_err());
        assert!(
            CliConfig::try_parse_from(["account-collator", "--input", "in.csv", "--output", "out.csv"])
                .is_ok()
        );
    }

    #[test]
    fn test_cli_resolve_defaults() {
        let cli = CliConfig::try_parse_from([
            "account-collator",
            "--input",
            "in.csv",
            "--output",
            "out.csv",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.input_path(), Some(Path::new("in.csv")));
        assert_eq!(config.output_path(), Some(Path::new("out.csv")));
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[source]\nbase_url = \"https://file.example.com\"\n[input]\npath = \"file.csv\"\n[output]\npath = \"file-out.csv\"\n",
        )
        .unwrap();

        let cli = CliConfig::try_parse_from([
            "account-collator",
            "--config",
            file.path().to_str().unwrap(),
            "--output",
            "cli-out.csv",
            "--monitor",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.input_path(), Some(Path::new("file.csv")));
        assert_eq!(config.output_path(), Some(Path::new("cli-out.csv")));
        assert_eq!(config.api_base_url(), "https://file.example.com");
        assert!(config.monitor);
    }

    #[test]
    fn test_invalid_base_url_fails_validation() {
        let config = CollatorConfig {
            api_base_url: "ftp://accounts".to_string(),
            ..CollatorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
