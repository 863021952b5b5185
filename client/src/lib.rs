mod appliance;
mod config;

use anyhow::Result;

pub use crate::appliance::{ApplianceClient, APPLIANCE};
pub use crate::config::CONFIG;

/// Validate configuration and build the appliance client up front, so a
/// misconfigured deployment fails at boot instead of on the first request.
pub fn init() -> Result<()> {
    let config = config::Config::from_env()?;
    tracing::info!(device_url = %config.device_url, "connecting to attendance appliance");
    std::sync::LazyLock::force(&APPLIANCE);
    Ok(())
}

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
