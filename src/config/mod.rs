pub mod cli;
pub mod toml_config;

use crate::core::transfer::EXPORT_FILE_NAME;
use crate::core::ConfigProvider;
use crate::domain::model::{ImportPolicy, Theme};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = ".";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "team-builder")]
#[command(about = "Build a team of up to four characters and share it as JSON")]
pub struct CliConfig {
    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Character catalog JSON file (defaults to the built-in roster)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Directory exports are written to and relative imports are read from
    #[arg(long)]
    pub output_path: Option<String>,

    /// File name used by `export` when none is given
    #[arg(long)]
    pub export_file_name: Option<String>,

    /// What to do with imported teams that are oversized or repeat a character
    #[arg(long, value_enum)]
    pub import_policy: Option<ImportPolicy>,

    /// Initial theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Copies every flag that was given onto a file-based configuration.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(catalog) = &self.catalog {
            config.catalog.path = Some(catalog.clone());
            tracing::info!("🔧 Catalog overridden to: {}", catalog);
        }
        if let Some(output_path) = &self.output_path {
            config.export.output_path = output_path.clone();
            tracing::info!("🔧 Output path overridden to: {}", output_path);
        }
        if let Some(file_name) = &self.export_file_name {
            config.export.file_name = Some(file_name.clone());
            tracing::info!("🔧 Export file name overridden to: {}", file_name);
        }
        if let Some(policy) = self.import_policy {
            config.import.policy = Some(policy);
            tracing::info!("🔧 Import policy overridden to: {}", policy);
        }
        if let Some(theme) = self.theme {
            config.ui.theme = Some(theme);
            tracing::info!("🔧 Theme overridden to: {}", theme);
        }
    }

    pub fn load_toml(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };
        let mut config = TomlConfig::from_file(path)?;
        self.apply_overrides(&mut config);
        Ok(Some(config))
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn export_file_name(&self) -> &str {
        self.export_file_name.as_deref().unwrap_or(EXPORT_FILE_NAME)
    }

    fn import_policy(&self) -> ImportPolicy {
        self.import_policy.unwrap_or_default()
    }

    fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
        }
        validate_path("output_path", self.output_path())?;
        validate_file_name("export_file_name", self.export_file_name())
    }
}
