//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use cardpay_gateway::BraintreeConfig;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub braintree: BraintreeConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let api_url = required("BRAINTREE_API_URL")?;
        let api_key = required("BRAINTREE_API_KEY")?;
        let mut braintree = BraintreeConfig::new(api_url, api_key);

        if let Ok(version) = env::var("BRAINTREE_API_VERSION") {
            braintree = braintree.with_api_version(version);
        }
        if let Ok(secs) = env::var("BRAINTREE_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| anyhow::anyhow!("BRAINTREE_TIMEOUT_SECS must be a whole number"))?;
            braintree = braintree.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self { port, braintree })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).map_err(|_| anyhow::anyhow!("{} environment variable is required", name))
}
