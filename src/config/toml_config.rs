use crate::domain::model::SheetLayout;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub filter: Option<FilterConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
    pub max_pages: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub blacklist: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: Option<String>,
    pub layout: Option<SheetLayout>,
    pub filename_prefix: Option<String>,
    pub column_width: Option<f64>,
    pub font_size: Option<f64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(attempts) = self.source.retry_attempts {
            validation::validate_positive_number("source.retry_attempts", attempts as usize, 1)?;
        }

        if let Some(blacklist) = self.filter.as_ref().and_then(|f| f.blacklist.as_ref()) {
            validation::validate_digit_strings("filter.blacklist", blacklist)?;
        }

        if let Some(export) = &self.export {
            if let Some(path) = &export.output_path {
                validation::validate_path("export.output_path", path)?;
            }
            if let Some(prefix) = &export.filename_prefix {
                if prefix.trim().is_empty() {
                    return Err(ScrapeError::ConfigValue {
                        field: "export.filename_prefix".to_string(),
                        value: prefix.clone(),
                        reason: "Prefix cannot be empty or whitespace-only".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
