//! # Settings Module
//!
//! ## Purpose
//! Runtime configuration of the ChemCalc binary and of the [`Analyzer`] it builds.
//! Settings live in a small JSON file; a missing file means defaults.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "log_level": "info",
//!   "fallback_atomic_volume": 15.0,
//!   "density_decimals": 3
//! }
//! ```
//!
//! ## Usage
//! ```rust
//! use ChemCalc::settings::Settings;
//! use ChemCalc::Formula::analysis::Analyzer;
//!
//! let settings = Settings::load("chemcalc_config.json").unwrap_or_default();
//! let analyzer = Analyzer::from_settings(&settings);
//! ```
//!
//! [`Analyzer`]: crate::Formula::analysis::Analyzer

use crate::Formula::density::{DEFAULT_ATOMIC_VOLUME, DEFAULT_DENSITY_DECIMALS, DensityEstimator};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default name of the settings file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "chemcalc_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// off, error, warn, info, debug or trace
    pub log_level: String,
    /// atomic volume (cm³/mol) of elements without a tabulated volume
    pub fallback_atomic_volume: f64,
    /// decimals kept in estimated densities
    pub density_decimals: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fallback_atomic_volume: DEFAULT_ATOMIC_VOLUME,
            density_decimals: DEFAULT_DENSITY_DECIMALS,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file; a missing file gives the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.check()?;
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        self.check()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn check(&self) -> Result<(), SettingsError> {
        if !(self.fallback_atomic_volume.is_finite() && self.fallback_atomic_volume > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "fallback_atomic_volume must be positive, got {}",
                self.fallback_atomic_volume
            )));
        }
        if self.density_decimals > 12 {
            return Err(SettingsError::Invalid(format!(
                "density_decimals must be at most 12, got {}",
                self.density_decimals
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| SettingsError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }

    pub fn density_estimator(&self) -> DensityEstimator {
        DensityEstimator::new(self.fallback_atomic_volume, self.density_decimals)
    }
}
