pub mod audio;
pub mod credentials;
pub mod http_client;
pub mod llm;
pub mod media;
pub mod observability;
pub mod taxonomy;

pub use http_client::build_http_client;
