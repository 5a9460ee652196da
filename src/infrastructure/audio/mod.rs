mod whisper_engine;

pub use whisper_engine::{DEFAULT_WHISPER_MODEL, WhisperEngine};
