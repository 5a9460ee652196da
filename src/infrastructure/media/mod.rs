mod livekit_token_issuer;

pub use livekit_token_issuer::LiveKitTokenIssuer;
