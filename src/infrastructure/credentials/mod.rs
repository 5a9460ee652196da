mod oauth_credential_cache;

pub use oauth_credential_cache::{
    DEFAULT_REFRESH_MARGIN, DEFAULT_SCOPE, OAuthClientCredentials, OAuthCredentialCache,
};
