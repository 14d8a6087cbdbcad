use std::{env, path::PathBuf};

use anyhow::Context;
use quake_core::DEFAULT_FEED_URL;

const SERVER_PORT_KEY: &str = "SERVER_PORT";
const FEED_URL_KEY: &str = "QUAKE_FEED_URL";
const FIXTURE_KEY: &str = "QUAKE_FIXTURE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub feed_url: String,
    /// GeoJSON file served instead of the live feed.
    pub fixture_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let server_port = load_env(SERVER_PORT_KEY)?;
        let feed_url = env::var(FEED_URL_KEY).unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
        let fixture_path = env::var_os(FIXTURE_KEY).map(PathBuf::from);

        Ok(Config {
            server_port,
            feed_url,
            fixture_path,
        })
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}
