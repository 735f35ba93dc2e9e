//! Application configuration

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::application::services::registration::REQUIRED_CORE_MODULE_VERSION;
use crate::domain::value_objects::{HudSettings, SystemConfig};

/// Optional config file, looked up in the working directory (`.toml`, `.json`, ...)
const CONFIG_FILE: &str = "fbl-action-hud";
const ENV_PREFIX: &str = "FBL_HUD";

/// Application configuration: defaults, then the config file, then the environment
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP port the overlay connects to
    pub server_port: u16,
    /// JSON language file with the game's translation keys
    #[serde(default)]
    pub locale_path: Option<String>,
    /// Version of the HUD core this adapter is serving
    pub host_core_version: String,

    #[serde(default)]
    pub hud: HudSettings,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    /// Load configuration, e.g. `FBL_HUD_SERVER_PORT=4000` or
    /// `FBL_HUD_HUD__RENDER_ITEM_ON_CLICK=false`
    pub fn load() -> Result<Self> {
        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Config::builder()
            .set_default("server_port", 3000)?
            .set_default("host_core_version", REQUIRED_CORE_MODULE_VERSION)
            .context("Invalid configuration defaults")
    }
}
