use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;

/// Speech-to-text that never fails: any backend error yields an empty
/// transcript so the interview continues with a degraded score.
pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self { engine }
    }

    #[tracing::instrument(skip(self, audio_data), fields(bytes = audio_data.len()))]
    pub async fn transcribe(&self, audio_data: &[u8]) -> String {
        match self.engine.transcribe(audio_data).await {
            Ok(transcript) => transcript.trim().to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Transcription failed, continuing with empty transcript");
                String::new()
            }
        }
    }
}
