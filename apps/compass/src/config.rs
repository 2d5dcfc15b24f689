//! # Configuration
//!
//! Optional TOML configuration for the compass binary.
//!
//! ```toml
//! catalog = "my-journey.toml"   # replacement catalog, relative to this file
//!
//! [estimator]                   # starting values for the estimator inputs
//! team_size = 3
//! timeline_months = 12
//! avg_salary = 85000
//! complexity = "medium"
//! strategy = "local"
//! acquisition = "organic"
//! ```
//!
//! ## Resolution Order
//!
//! 1. `--config <PATH>`
//! 2. `COMPASS_CONFIG` environment variable
//! 3. `./compass.toml`, if it exists
//! 4. Built-in defaults
//!
//! An explicitly named file (1 or 2) that does not exist is an error.

use crate::AppError;
use compass_core::{
    AcquisitionMode, Catalog, CompassError, Complexity, FundingInputs, MarketStrategy,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "COMPASS_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "compass.toml";

/// Starting values for the estimator; unset fields use the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimatorDefaults {
    pub team_size: Option<u32>,
    pub timeline_months: Option<u32>,
    pub avg_salary: Option<u32>,
    pub complexity: Option<Complexity>,
    pub strategy: Option<MarketStrategy>,
    pub acquisition: Option<AcquisitionMode>,
}

impl EstimatorDefaults {
    /// Validated estimator inputs.
    pub fn to_inputs(&self) -> Result<FundingInputs, CompassError> {
        let base = FundingInputs::default();
        FundingInputs::new(
            self.team_size.unwrap_or(base.team_size()),
            self.timeline_months.unwrap_or(base.timeline_months()),
            self.avg_salary.unwrap_or(base.avg_salary()),
            self.complexity.unwrap_or(base.complexity()),
            self.strategy.unwrap_or(base.strategy()),
            self.acquisition.unwrap_or(base.acquisition()),
        )
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Replacement catalog file.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub estimator: EstimatorDefaults,
}

impl Config {
    /// Resolve the configuration from the flag, the environment and the
    /// working directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve_from(explicit, from_env.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// [`Config::resolve`] with the environment and default location supplied.
    pub fn resolve_from(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        fallback: &Path,
    ) -> Result<Self, AppError> {
        if let Some(path) = explicit.or(from_env) {
            tracing::debug!("Loading config from {:?}", path);
            return Self::load(path);
        }
        if fallback.is_file() {
            tracing::debug!("Loading config from {:?}", fallback);
            return Self::load(fallback);
        }
        tracing::debug!("No config file, using built-in defaults");
        Ok(Self::default())
    }

    /// Load and parse a config file.
    ///
    /// A relative `catalog` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = read_file(path)?;
        let mut config: Config = toml::from_str(&text).map_err(|source| AppError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(catalog) = config.catalog.take() {
            let resolved = match path.parent() {
                Some(dir) if catalog.is_relative() => dir.join(catalog),
                _ => catalog,
            };
            config.catalog = Some(resolved);
        }

        Ok(config)
    }

    /// The configured catalog, or the built-in founder journey.
    pub fn catalog(&self) -> Result<Catalog, AppError> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::founder_journey()),
        }
    }

    /// The configured starting estimator inputs.
    pub fn inputs(&self) -> Result<FundingInputs, AppError> {
        Ok(self.estimator.to_inputs()?)
    }
}

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, AppError> {
    let text = read_file(path)?;
    let catalog: Catalog = toml::from_str(&text).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "Loaded catalog from {:?}: {} stages, {} scenarios",
        path,
        catalog.len(),
        catalog.scenario_count()
    );
    Ok(catalog)
}

fn read_file(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(path.to_path_buf()),
        _ => AppError::Io(e),
    })
}
