mod credential_provider;
mod llm_client;
mod taxonomy_client;
mod token_issuer;
mod transcription_engine;

pub use credential_provider::{CredentialError, CredentialProvider};
pub use llm_client::{CompletionParams, CompletionRequest, LlmClient, LlmClientError};
pub use taxonomy_client::{TaxonomyClient, TaxonomyError};
pub use token_issuer::{TokenIssuer, TokenIssuerError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
