use crate::config::ConfigError;
use crate::intake::AnswerImportError;
use crate::telemetry::TelemetryError;

/// Application-level failures surfaced by the CLI. The diagnosis pipeline
/// itself is total and contributes no variants here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Import(#[from] AnswerImportError),
    #[error("could not serialize diagnosis result: {0}")]
    Serialize(#[from] serde_json::Error),
}
