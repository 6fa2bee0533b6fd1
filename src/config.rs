use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use vitaplan_activity::WeekSettings;
use vitaplan_meal::MealSettings;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub activity: WeekSettings,
    #[serde(default)]
    pub meal: MealSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VITAPLAN__ACTIVITY__POOL_CAP, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Built-in defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, built-in defaults apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VITAPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        if self.activity.pool_cap < 1 {
            return Err("Activity pool_cap must be at least 1".to_string());
        }
        if self.activity.accessibility.allow.is_empty() {
            return Err("Activity allow list must contain at least one keyword".to_string());
        }
        if self.meal.limits.mains < 1 {
            return Err("Meal search limits.mains must be at least 1".to_string());
        }
        if self.meal.limits.top_k < 1 {
            return Err("Meal search limits.top_k must be at least 1".to_string());
        }
        if self.meal.limits.triple_mains > self.meal.limits.mains {
            return Err("Meal search limits.triple_mains must not exceed limits.mains".to_string());
        }
        Ok(())
    }
}
