use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{ApplicationError, ConfigLoadSnafu};
use crate::youtube::YouTubeConfig;

pub const DEFAULT_CHANNEL_ID: &str = "UCX6OQ3DkcsbYNE6H8uQQuVA";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(rename = "host_address", default = "default_host")]
    pub host: SocketAddr,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Channel pre-filled in the dashboard form.
    #[serde(default = "default_channel_id")]
    pub default_channel_id: String,
    #[serde(flatten)]
    pub youtube: YouTubeConfig,
}

pub fn load() -> Result<Config, ApplicationError> {
    envy::from_env::<Config>().context(ConfigLoadSnafu)
}

fn default_host() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8501))
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_channel_id() -> String {
    DEFAULT_CHANNEL_ID.to_string()
}
