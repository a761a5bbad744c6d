pub mod cli;
pub mod lambda;
pub mod record_config;

pub use record_config::RecordConfig;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "records-api")]
#[command(about = "Validate and normalize a batch of records")]
pub struct CliConfig {
    #[arg(long, help = "Input records (.json array/object or .csv with header row)")]
    pub input: String,

    #[arg(long, default_value = "config.json", help = "Record config (JSON or TOML)")]
    pub config: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "processed.json")]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        validate_path("input", &self.input)?;
        validate_file_extensions("input", std::slice::from_ref(&self.input), &["json", "csv"])?;
        validate_path("config", &self.config)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;

        tracing::debug!("✅ CLI configuration validation passed");
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    fn config(input: &str) -> CliConfig {
        CliConfig::parse_from(["records-api", "--input", input])
    }

    #[test]
    fn test_defaults() {
        let config = config("records.json");
        assert_eq!(config.config, "config.json");
        assert_eq!(config.output_path, "./output");
        assert_eq!(config.output_file, "processed.json");
        assert!(!config.verbose);
    }

    #[test]
    fn test_validate_input_extension() {
        assert!(config("records.json").validate().is_ok());
        assert!(config("records.csv").validate().is_ok());
        assert!(config("records.xml").validate().is_err());
    }
}
