use crate::config::DEFAULT_OUTPUT_PATH;
use crate::core::transfer::EXPORT_FILE_NAME;
use crate::core::ConfigProvider;
use crate::domain::model::{ImportPolicy, Theme};
use crate::utils::error::{Result, TeamError};
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    pub file_name: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            file_name: None,
        }
    }
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    pub policy: Option<ImportPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: Option<Theme>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TeamError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TeamError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TeamError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_path(&self) -> Option<&str> {
        self.catalog.path.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.export.output_path
    }

    fn export_file_name(&self) -> &str {
        self.export.file_name.as_deref().unwrap_or(EXPORT_FILE_NAME)
    }

    fn import_policy(&self) -> ImportPolicy {
        self.import.policy.unwrap_or_default()
    }

    fn theme(&self) -> Theme {
        self.ui.theme.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog.path {
            validate_path("catalog.path", catalog)?;
        }
        validate_path("export.output_path", &self.export.output_path)?;
        validate_file_name("export.file_name", self.export_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
path = "./roster.json"

[export]
output_path = "./teams"
file_name = "spiral-abyss.json"

[import]
policy = "truncate"

[ui]
theme = "dark"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.catalog_path(), Some("./roster.json"));
        assert_eq!(config.output_path(), "./teams");
        assert_eq!(config.export_file_name(), "spiral-abyss.json");
        assert_eq!(config.import_policy(), ImportPolicy::Truncate);
        assert_eq!(config.theme(), Theme::Dark);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.catalog_path(), None);
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
        assert_eq!(config.export_file_name(), EXPORT_FILE_NAME);
        assert_eq!(config.import_policy(), ImportPolicy::Reject);
        assert_eq!(config.theme(), Theme::Light);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEAM_BUILDER_TEST_DIR", "/tmp/teams");

        let toml_content = r#"
[export]
output_path = "${TEAM_BUILDER_TEST_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/teams");

        std::env::remove_var("TEAM_BUILDER_TEST_DIR");
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let result = TomlConfig::from_toml_str("[import]\npolicy = \"merge\"\n");
        assert!(matches!(result, Err(TeamError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[export]
file_name = "../escape.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[ui]\ntheme = \"dark\"\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.theme(), Theme::Dark);
    }
}
