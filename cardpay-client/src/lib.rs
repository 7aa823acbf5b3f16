//! # Cardpay Client SDK
//!
//! A typed Rust client for the cardpay API.

use cardpay_types::{
    Decimal, SaleRequest, SaleResponse, TokenizeRequest, TokenizeResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Cardpay API client.
pub struct CardpayClient {
    base_url: String,
    http: Client,
}

impl CardpayClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Tokenizes card details and returns the PSP token.
    pub async fn tokenize(
        &self,
        card_number: &str,
        expiry_date: &str,
    ) -> Result<String, ClientError> {
        let req = TokenizeRequest {
            card_number: card_number.to_string(),
            expiry_date: expiry_date.to_string(),
        };
        let resp: TokenizeResponse = self.post("/tokenise", &req).await?;
        Ok(resp.token)
    }

    /// Charges a tokenized card.
    ///
    /// The amount is sent in its exact string form.
    pub async fn sale(&self, token: &str, amount: Decimal) -> Result<SaleResponse, ClientError> {
        let req = SaleRequest {
            token: token.to_string(),
            transaction_amount: amount.to_string(),
        };
        self.post("/sale", &req).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
