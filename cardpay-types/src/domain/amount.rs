//! Exact decimal transaction amount.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Maximum number of significant digits in an amount.
pub const MAX_DIGITS: u32 = 10;
/// Maximum number of fractional digits in an amount.
pub const DECIMAL_PLACES: u32 = 2;

/// Non-negative monetary amount with at most two fractional digits.
///
/// Backed by [`Decimal`] so the value is never rounded through binary floating
/// point. Accepted values are quantized to exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionAmount(Decimal);

impl TransactionAmount {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::Negative {
                field: "transaction_amount",
            });
        }

        let scale = value.scale();
        let digits = value.mantissa().unsigned_abs().to_string().len() as u32;
        let (total, whole) = if digits > scale {
            (digits, digits - scale)
        } else {
            (scale, 0)
        };

        if total > MAX_DIGITS {
            return Err(ValidationError::MaxDigits { max: MAX_DIGITS });
        }
        if scale > DECIMAL_PLACES {
            return Err(ValidationError::MaxDecimalPlaces {
                max: DECIMAL_PLACES,
            });
        }
        if whole > MAX_DIGITS - DECIMAL_PLACES {
            return Err(ValidationError::MaxWholeDigits {
                max: MAX_DIGITS - DECIMAL_PLACES,
            });
        }

        let mut quantized = value.abs();
        quantized.rescale(DECIMAL_PLACES);
        Ok(Self(quantized))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for TransactionAmount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| ValidationError::InvalidNumber {
            field: "transaction_amount",
        })?;
        Self::new(value)
    }
}

impl fmt::Display for TransactionAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
