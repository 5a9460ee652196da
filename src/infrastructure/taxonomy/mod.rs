mod lightcast_client;

pub use lightcast_client::LightcastClient;
