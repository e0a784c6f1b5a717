use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let job_limit = env::var("APP_JOB_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidJobLimit)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            report: ReportConfig { job_limit },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Rendering controls for the CLI report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// How many job-fit rows the text report prints.
    pub job_limit: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidJobLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidJobLimit => {
                write!(f, "APP_JOB_LIMIT must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_JOB_LIMIT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.report.job_limit, 10);
    }

    #[test]
    fn load_reads_job_limit_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_JOB_LIMIT", "25");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.report.job_limit, 25);
        reset_env();
    }

    #[test]
    fn load_rejects_malformed_job_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_JOB_LIMIT", "plenty");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidJobLimit)
        ));
        reset_env();
    }

    #[test]
    fn environment_parses_aliases() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        assert_eq!(
            AppEnvironment::from_str("Production"),
            AppEnvironment::Production
        );
        assert_eq!(AppEnvironment::from_str("ci"), AppEnvironment::Test);
        assert_eq!(
            AppEnvironment::from_str("anything-else"),
            AppEnvironment::Development
        );
    }
}
