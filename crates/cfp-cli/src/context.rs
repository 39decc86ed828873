use anyhow::Context;
use cfp_api::PortalClient;
use cfp_config::PortalConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PortalConfig,
    pub client: PortalClient,
}

impl AppContext {
    /// Build the HTTP client against the configured backend.
    pub fn init(config: PortalConfig) -> anyhow::Result<Self> {
        let client = PortalClient::new(&config.api).context("failed to build portal client")?;
        tracing::debug!(base_url = %config.api.base_url, "portal client initialized");
        Ok(Self { config, client })
    }
}
