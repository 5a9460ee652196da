use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub http: HttpSettings,
    pub llm: LlmSettings,
    #[serde(default)]
    pub transcription: TranscriptionSettings,
    pub media: MediaSettings,
    #[serde(default)]
    pub taxonomy: TaxonomySettings,
    #[serde(default)]
    pub interview: InterviewSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>` (optional) under `APP_`-prefixed environment
    /// variables, e.g. `APP_LLM__API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.config_file_name()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub request_timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_chat_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptionSettings {
    /// Falls back to `llm.api_key` when unset.
    pub api_key: Option<String>,
    /// Falls back to the chat backend's base URL when unset.
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaSettings {
    pub api_key: String,
    pub api_secret: String,
    pub server_url: String,
    pub ws_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaxonomySettings {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub base_url: String,
    pub scope: String,
    pub token_ttl_seconds: u64,
    pub refresh_margin_seconds: u64,
}

impl Default for TaxonomySettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: "https://auth.emsicloud.com/connect/token".to_string(),
            base_url: "https://emsiservices.com".to_string(),
            scope: "emsi_open".to_string(),
            token_ttl_seconds: 3600,
            refresh_margin_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SamplingSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterviewSettings {
    pub scoring: SamplingSettings,
    pub adaptive: SamplingSettings,
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            scoring: SamplingSettings {
                temperature: 0.3,
                max_tokens: 300,
            },
            adaptive: SamplingSettings {
                temperature: 0.7,
                max_tokens: 250,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}
