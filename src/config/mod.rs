#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{OutputFormat, PivotStrategy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "permsort")]
#[command(about = "Quicksort and nearest-bigger-permutation toolkit")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: cli::Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Pivot strategy for sorting: last | median-of-three
    #[arg(long, global = true)]
    pub pivot: Option<String>,

    /// Output format: text | json
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings: file values with command line overrides on top.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub pivot: PivotStrategy,
    pub format: OutputFormat,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Settings {
    pub fn resolve(
        file: Option<&TomlConfig>,
        pivot_override: Option<&str>,
        format_override: Option<&str>,
    ) -> Result<Self> {
        let mut overrides = TomlConfig::default();
        if let Some(pivot) = pivot_override {
            overrides.sort = Some(toml_config::SortConfig {
                pivot: Some(pivot.to_string()),
            });
        }
        if let Some(format) = format_override {
            overrides.output = Some(toml_config::OutputConfig {
                format: Some(format.to_string()),
            });
        }
        overrides.validate()?;

        let mut settings = Settings::default();
        if let Some(file) = file {
            file.validate()?;
            settings.pivot = file.pivot_strategy()?.unwrap_or_default();
            settings.format = file.output_format()?.unwrap_or_default();
            settings.log_level = file.log_level().map(str::to_string);
            settings.json_logs = file.json_logs();
        }
        if let Some(pivot) = overrides.pivot_strategy()? {
            settings.pivot = pivot;
        }
        if let Some(format) = overrides.output_format()? {
            settings.format = format;
        }
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let file = self
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;
        Settings::resolve(file.as_ref(), self.pivot.as_deref(), self.format.as_deref())
    }
}

impl ConfigProvider for Settings {
    fn pivot_strategy(&self) -> PivotStrategy {
        self.pivot
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
