use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::serving::ServingConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub serving: ServingConfig,
}

/// Defaults first, then an optional `App.toml`, then `TODO_`-prefixed
/// environment variables (e.g. `TODO_SERVING_PORT`). A bare process with
/// neither file nor environment serves on port 8080.
pub fn load() -> Result<Config> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file("App.toml"))
        .merge(Env::prefixed("TODO_").split("_"))
        .extract()?;
    info!("Configuration loaded");
    Ok(config)
}
