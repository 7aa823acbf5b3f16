//! # Cardpay Gateway
//!
//! Concrete payment gateway implementations (adapters) for the cardpay service.
//! This crate provides PSP adapters that implement the `PaymentGateway` port.
//!
//! Only Braintree (GraphQL over HTTPS) is supported today. A new provider is
//! added as a sibling module implementing the same port; the application
//! layer does not change.

pub mod braintree;
mod config;


pub use braintree::BraintreeGateway;
pub use config::{BraintreeConfig, ConfigError};

/// Build a ready-to-use Braintree gateway from configuration.
///
/// # Examples
///
/// ```ignore
/// let config = BraintreeConfig::new("https://payments.sandbox.braintree-api.com/graphql", key);
/// let gateway = build_gateway(config)?;
/// ```
pub fn build_gateway(config: BraintreeConfig) -> Result<BraintreeGateway, ConfigError> {
    BraintreeGateway::new(config)
}
