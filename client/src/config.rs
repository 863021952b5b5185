use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use std::env;
use std::sync::LazyLock;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::from_env() {
    Ok(config) => config,
    Err(e) => panic!("invalid configuration: {e:#}"),
});

#[derive(Clone)]
pub struct Config {
    /// Base URL of the attendance appliance, e.g. `http://192.168.1.50`.
    pub device_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let device_url = env_var("ROLLCALL_DEVICE_URL")?;
        let device_url = device_url
            .parse()
            .with_context(|| format!("invalid ROLLCALL_DEVICE_URL: {device_url:?}"))?;

        Ok(Self { device_url })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| anyhow!("missing environment variable: {}", name))
}
