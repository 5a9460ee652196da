use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_directive: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let json_format = settings.enable_json
            || std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false);

        Self {
            environment: environment.to_string(),
            json_format,
            default_directive: format!(
                "{},interview_orchestrator=debug,tower_http=debug",
                settings.level
            ),
        }
    }
}
