use std::time::Duration;

use reqwest::Client;

use crate::presentation::config::HttpSettings;

/// Every outbound call shares these bounds so a stalled upstream cannot hold
/// a request task forever.
pub fn build_http_client(settings: &HttpSettings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_seconds))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        .build()
}
