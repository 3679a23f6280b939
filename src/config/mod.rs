use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{CurrencyCode, RateTable},
    errors::ConfigError,
    ledger::CategoryKey,
    solver::{SolveOptions, StatisticsOptions},
};

const APP_DIR: &str = "flowcast";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences applied when running a forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverConfig {
    /// Currency every entry amount is normalised into; rate tables built with
    /// [`SolverConfig::rate_table`] resolve it to a rate of one.
    pub base_currency: CurrencyCode,
    #[serde(default)]
    pub excluded_categories: Vec<CategoryKey>,
    #[serde(default)]
    pub ignore_imported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base_currency: CurrencyCode::default(),
            excluded_categories: Vec::new(),
            ignore_imported: false,
            log_filter: None,
        }
    }
}

impl SolverConfig {
    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions::excluding(self.excluded_categories.iter().cloned())
    }

    pub fn statistics_options(&self) -> StatisticsOptions {
        StatisticsOptions {
            ignore_imported: self.ignore_imported,
        }
    }

    /// Builds a rate table against the configured base currency from
    /// `(code, rate)` pairs supplied by a rate provider.
    pub fn rate_table<I, S>(&self, rates: I) -> RateTable
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        RateTable::from_rates(self.base_currency.as_str(), rates)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let code = self.base_currency.as_str();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid(format!(
                "base currency `{code}` is not an ISO 4217 code"
            )));
        }
        Ok(())
    }
}

/// Reads and writes [`SolverConfig`] as JSON on disk.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses the platform configuration directory, falling back to the
    /// working directory when none is available.
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored configuration, or defaults when no file exists yet.
    pub fn load(&self) -> Result<SolverConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(SolverConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: SolverConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &SolverConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
