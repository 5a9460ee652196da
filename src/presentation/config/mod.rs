mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    HttpSettings, InterviewSettings, LlmSettings, LoggingSettings, MediaSettings,
    SamplingSettings, ServerSettings, Settings, TaxonomySettings, TranscriptionSettings,
};
