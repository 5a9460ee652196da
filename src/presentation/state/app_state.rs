use std::sync::Arc;

use crate::application::ports::TaxonomyClient;
use crate::application::services::InterviewService;

#[derive(Clone)]
pub struct AppState {
    pub interview_service: Arc<InterviewService>,
    pub taxonomy_client: Arc<dyn TaxonomyClient>,
    /// Media server URL returned alongside participant tokens.
    pub media_server_url: String,
}
