//! Payment gateway port.
//!
//! This trait defines the capabilities every PSP integration must provide.
//! Implementations can be HTTP clients for a concrete provider, stubs, etc.

use rust_decimal::Decimal;

use crate::domain::SaleResult;
use crate::error::GatewayError;

/// Port trait for payment service provider integrations.
///
/// Implementations hold no per-call state, so a single instance can be
/// shared between concurrent callers.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Tokenizes card details on the PSP.
    ///
    /// `expiry_date` is expected in `MM/YY` or `MM/YYYY` form; callers must
    /// sanitize it beforehand. Returns the token issued by the PSP.
    async fn tokenize(&self, card_number: &str, expiry_date: &str)
    -> Result<String, GatewayError>;

    /// Requests a sale on the PSP for a previously tokenized card.
    ///
    /// No idempotency key is sent: retrying a failed charge may charge twice.
    async fn charge(&self, token: &str, amount: Decimal) -> Result<SaleResult, GatewayError>;
}

#[async_trait::async_trait]
impl<G: PaymentGateway + ?Sized> PaymentGateway for std::sync::Arc<G> {
    async fn tokenize(
        &self,
        card_number: &str,
        expiry_date: &str,
    ) -> Result<String, GatewayError> {
        (**self).tokenize(card_number, expiry_date).await
    }

    async fn charge(&self, token: &str, amount: Decimal) -> Result<SaleResult, GatewayError> {
        (**self).charge(token, amount).await
    }
}
