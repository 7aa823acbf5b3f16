//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CardNumber, ExpiryDate, SaleResult, TransactionAmount};
use crate::error::ValidationError;

// ─────────────────────────────────────────────────────────────────────────────
// Tokenize DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to tokenize card details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeRequest {
    /// Digit-only card number, 12 to 19 characters
    pub card_number: String,
    /// Expiry date as `MM/YY` or `MM/YYYY`
    pub expiry_date: String,
}

impl TokenizeRequest {
    /// Checks the card fields and returns them in their validated form.
    pub fn validate(self) -> Result<(CardNumber, ExpiryDate), ValidationError> {
        let card_number = CardNumber::parse(self.card_number)?;
        let expiry_date = ExpiryDate::parse(self.expiry_date)?;
        Ok((card_number, expiry_date))
    }
}

/// Response after tokenizing a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResponse {
    /// Opaque token issued by the PSP
    pub token: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Sale DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to charge a tokenized card.
///
/// The amount travels as a JSON string so it is never parsed as a float.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    /// Token previously returned by `/tokenise`
    pub token: String,
    /// Decimal amount, e.g. `"100.50"`
    pub transaction_amount: String,
}

impl SaleRequest {
    pub fn validate(self) -> Result<(String, TransactionAmount), ValidationError> {
        if self.token.trim().is_empty() {
            return Err(ValidationError::Blank { field: "token" });
        }
        let amount = self.transaction_amount.parse::<TransactionAmount>()?;
        Ok((self.token, amount))
    }
}

/// Response after a sale request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleResponse {
    /// PSP transaction identifier
    pub id: Option<String>,
    /// PSP transaction status, e.g. `submitted_for_settlement`
    pub status: Option<String>,
}

impl From<SaleResult> for SaleResponse {
    fn from(result: SaleResult) -> Self {
        Self {
            id: result.id,
            status: result.status,
        }
    }
}
