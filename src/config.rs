//! Configuration for the calculator binary.
//!
//! Settings are layered:
//! - Default values
//! - Optional TOML file passed with `--config`
//! - Environment variable overrides
//!
//! Configuration only shapes diagnostics. Arithmetic, output formatting and
//! exit codes are fixed.
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CALCULATOR_` and use double
//! underscores to separate nested levels:
//! - `CALCULATOR_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const ENV_PREFIX: &str = "CALCULATOR_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every target without an explicit override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target level overrides, e.g. `calculator = "debug"`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Render as an `EnvFilter` directive string, e.g. `warn,calculator=debug`.
    pub fn filter_directives(&self) -> String {
        let mut filter_str = self.default.clone();
        for (module, level) in &self.modules {
            filter_str.push_str(&format!(",{module}={level}"));
        }
        filter_str
    }
}

impl Settings {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// A missing file is not an error; figment treats it as an empty layer.
    pub fn load(config_path: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(
                Env::prefixed(ENV_PREFIX).map(|key| {
                    key.as_str()
                        .to_lowercase()
                        .replace("__", ".") // Double underscore becomes dot
                        .into()
                }),
            )
            .extract()
            .map_err(Box::new)
    }

    /// Load configuration from a specific file, ignoring the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
