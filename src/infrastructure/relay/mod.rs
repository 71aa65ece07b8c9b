mod http_relay_client;

pub use http_relay_client::HttpRelayClient;
