mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{HubSettings, ServerSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the server and hub configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        server: ServerSettings {
            host: partial
                .server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: partial
                .server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
        },
        hub: HubSettings {
            client_queue_capacity: partial
                .hub
                .as_ref()
                .and_then(|h| h.client_queue_capacity)
                .unwrap_or(default.hub.client_queue_capacity),
            broadcast_capacity: partial
                .hub
                .as_ref()
                .and_then(|h| h.broadcast_capacity)
                .unwrap_or(default.hub.broadcast_capacity),
        },
    })
}

#[cfg(test)]
mod tests;
