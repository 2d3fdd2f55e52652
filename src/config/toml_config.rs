use crate::domain::model::{OutputFormat, PivotStrategy};
use crate::utils::error::{PermsortError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sort: Option<SortConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    pub pivot: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PermsortError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PERMSORT_PIVOT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PermsortError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn pivot_name(&self) -> Option<&str> {
        self.sort.as_ref()?.pivot.as_deref()
    }

    fn format_name(&self) -> Option<&str> {
        self.output.as_ref()?.format.as_deref()
    }

    /// 取得 pivot 策略，未設定時回傳 None
    pub fn pivot_strategy(&self) -> Result<Option<PivotStrategy>> {
        self.pivot_name()
            .map(|name| parse_named("sort.pivot", name))
            .transpose()
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format_name()
            .map(|name| parse_named("output.format", name))
            .transpose()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(pivot) = self.pivot_name() {
            validate_one_of("sort.pivot", pivot, &PivotStrategy::NAMES)?;
        }
        if let Some(format) = self.format_name() {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }
        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

/// Parses a kebab-case enum name through serde so the names stay in one place.
fn parse_named<T: serde::de::DeserializeOwned>(field: &str, name: &str) -> Result<T> {
    use serde::de::value::{Error as ValueError, StrDeserializer};
    use serde::de::IntoDeserializer;

    let deserializer: StrDeserializer<'_, ValueError> = name.into_deserializer();
    T::deserialize(deserializer).map_err(|e| PermsortError::ConfigValidationError {
        field: field.to_string(),
        message: e.to_string(),
    })
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
