//! Payment Application Service
//!
//! Orchestrates card operations through the gateway port.
//! Contains NO protocol logic - it only translates gateway failures into
//! service errors.

use cardpay_types::{Decimal, PaymentGateway, SaleResult, ServiceError};

/// Application service for payment operations.
///
/// Generic over `G: PaymentGateway` - the PSP adapter is injected at
/// construction. This enables:
/// - Adding providers without touching this layer
/// - Testing with stub gateways
/// - Compile-time checks for port implementation
pub struct PaymentService<G: PaymentGateway> {
    gateway: G,
}

impl<G: PaymentGateway> PaymentService<G> {
    /// Creates a new payment service with the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Tokenizes card details on the PSP and returns the issued token.
    pub async fn tokenize(
        &self,
        card_number: &str,
        expiry_date: &str,
    ) -> Result<String, ServiceError> {
        let token = self.gateway.tokenize(card_number, expiry_date).await?;
        Ok(token)
    }

    /// Charges a previously tokenized card.
    pub async fn sale(&self, token: &str, amount: Decimal) -> Result<SaleResult, ServiceError> {
        let sale = self.gateway.charge(token, amount).await?;

        tracing::info!(
            sale_id = sale.id.as_deref(),
            sale_status = sale.status.as_deref(),
            "Sale requested successfully"
        );

        Ok(sale)
    }
}
