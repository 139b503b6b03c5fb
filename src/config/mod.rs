pub mod toml_config;

use crate::domain::model::SheetLayout;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "sim-scrape")]
#[command(about = "Scrapes sim listing pages, filters numbers, exports a spreadsheet")]
pub struct CliConfig {
    /// TOML configuration file; CLI flags override its values
    #[arg(long)]
    pub config: Option<String>,

    /// Listing base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory the spreadsheet is written into
    #[arg(long)]
    pub output_path: Option<String>,

    /// Sheet layout: flat (sorted rows) or per-page (one column per page)
    #[arg(long, value_enum)]
    pub layout: Option<CliLayout>,

    /// Stop after this many pages even if the site reports more
    #[arg(long)]
    pub max_pages: Option<u32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliLayout {
    Flat,
    PerPage,
}

impl From<CliLayout> for SheetLayout {
    fn from(layout: CliLayout) -> Self {
        match layout {
            CliLayout::Flat => SheetLayout::Flat,
            CliLayout::PerPage => SheetLayout::PerPage,
        }
    }
}

/// Fully resolved runtime configuration: documented defaults, overlaid with
/// the TOML file (if any), overlaid with CLI flags.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub output_path: String,
    pub layout: SheetLayout,
    pub blacklist: Vec<String>,
    pub filename_prefix: String,
    pub column_width: f64,
    pub font_size: f64,
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_delay_seconds: u64,
    pub max_pages: Option<u32>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sim.vn/sim-so-dep-duoi-1368".to_string(),
            output_path: "./output".to_string(),
            layout: SheetLayout::Flat,
            blacklist: ["89", "46", "64", "97", "79", "38", "83"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            filename_prefix: "sim_filtered".to_string(),
            column_width: 50.0,
            font_size: 35.0,
            timeout_seconds: 30,
            retry_attempts: 3,
            retry_delay_seconds: 1,
            max_pages: None,
        }
    }
}

impl ScrapeConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = &cli.config {
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            config.apply_toml(toml);
        }

        if let Some(base_url) = &cli.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(output_path) = &cli.output_path {
            config.output_path = output_path.clone();
        }
        if let Some(layout) = cli.layout {
            config.layout = layout.into();
        }
        if cli.max_pages.is_some() {
            config.max_pages = cli.max_pages;
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_toml(&mut self, toml: TomlConfig) {
        self.base_url = toml.source.endpoint;
        if let Some(timeout) = toml.source.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(attempts) = toml.source.retry_attempts {
            self.retry_attempts = attempts;
        }
        if let Some(delay) = toml.source.retry_delay_seconds {
            self.retry_delay_seconds = delay;
        }
        if toml.source.max_pages.is_some() {
            self.max_pages = toml.source.max_pages;
        }

        if let Some(blacklist) = toml.filter.and_then(|f| f.blacklist) {
            self.blacklist = blacklist;
        }

        if let Some(export) = toml.export {
            if let Some(output_path) = export.output_path {
                self.output_path = output_path;
            }
            if let Some(layout) = export.layout {
                self.layout = layout;
            }
            if let Some(prefix) = export.filename_prefix {
                self.filename_prefix = prefix;
            }
            if let Some(width) = export.column_width {
                self.column_width = width;
            }
            if let Some(size) = export.font_size {
                self.font_size = size;
            }
        }
    }
}

impl Validate for ScrapeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_digit_strings("blacklist", &self.blacklist)?;
        validation::validate_positive_number(
            "retry_attempts",
            self.retry_attempts as usize,
            1,
        )?;
        Ok(())
    }
}
