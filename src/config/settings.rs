use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for both the server and the broadcast hub.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub hub: HubSettings,
}

/// Configuration settings for the server.
///
/// Defines the host and port the server will bind to.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Configuration settings for the hub.
///
/// `client_queue_capacity` bounds each client's outbound queue; a client
/// whose queue is full during a broadcast gets dropped. `broadcast_capacity`
/// bounds the pending-broadcast queue and is the only backpressure point
/// publishers see.
#[derive(Debug, Deserialize, Clone)]
pub struct HubSettings {
    pub client_queue_capacity: usize,
    pub broadcast_capacity: usize,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub hub: Option<PartialHubSettings>,
}

/// Partial server settings.
///
/// Used when loading server configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial hub settings.
///
/// Used for hub configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialHubSettings {
    pub client_queue_capacity: Option<usize>,
    pub broadcast_capacity: Option<usize>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            hub: HubSettings {
                client_queue_capacity: 32,
                broadcast_capacity: 100,
            },
        }
    }
}
