//! Card details accepted at the API boundary.
//!
//! Card data is never stored: these types only guarantee that what reaches
//! the payment service is well formed.

use std::fmt;

use crate::error::ValidationError;

const CARD_NUMBER_MIN_LEN: usize = 12;
const CARD_NUMBER_MAX_LEN: usize = 19;

/// Digit-only primary account number, 12 to 19 characters long.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim().to_string();
        let len = value.chars().count();
        if len < CARD_NUMBER_MIN_LEN {
            return Err(ValidationError::TooShort {
                field: "card_number",
                min: CARD_NUMBER_MIN_LEN,
            });
        }
        if len > CARD_NUMBER_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "card_number",
                max: CARD_NUMBER_MAX_LEN,
            });
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotDigits {
                field: "card_number",
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the full number out of logs.
impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last4 = &self.0[self.0.len() - 4..];
        write!(f, "CardNumber(****{})", last4)
    }
}

/// Card expiry date in `MM/YY` or `MM/YYYY` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryDate(String);

impl ExpiryDate {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim().to_string();
        let invalid = || ValidationError::Pattern {
            field: "expiry_date",
        };

        let (month, year) = value.split_once('/').ok_or_else(invalid)?;
        let month_ok = month.len() == 2
            && month.chars().all(|c| c.is_ascii_digit())
            && matches!(month.parse::<u8>(), Ok(1..=12));
        let year_ok =
            matches!(year.len(), 2 | 4) && year.chars().all(|c| c.is_ascii_digit());

        if !(month_ok && year_ok) {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_length_bounds() {
        assert!(CardNumber::parse("4".repeat(12)).is_ok());
        assert!(CardNumber::parse("4".repeat(19)).is_ok());
        assert!(matches!(
            CardNumber::parse("4".repeat(10)),
            Err(ValidationError::TooShort { min: 12, .. })
        ));
        assert!(matches!(
            CardNumber::parse("4".repeat(20)),
            Err(ValidationError::TooLong { max: 19, .. })
        ));
    }

    #[test]
    fn test_card_number_rejects_non_digits() {
        let result = CardNumber::parse("111122223333AAAA");
        assert!(matches!(result, Err(ValidationError::NotDigits { .. })));
    }

    #[test]
    fn test_card_number_debug_is_masked() {
        let card = CardNumber::parse("4111111111111111").unwrap();
        assert_eq!(format!("{:?}", card), "CardNumber(****1111)");
    }

    #[test]
    fn test_expiry_date_patterns() {
        for valid in ["12/2020", "12/20", "01/20"] {
            assert!(ExpiryDate::parse(valid).is_ok(), "{} should be valid", valid);
        }
        for invalid in ["20/2020", "202020", "wrong", "1/20", "00/20", "12/202", "12/"] {
            assert!(
                matches!(ExpiryDate::parse(invalid), Err(ValidationError::Pattern { .. })),
                "{} should be invalid",
                invalid
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let card = CardNumber::parse(" 4111111111111111 ").unwrap();
        assert_eq!(card.as_str(), "4111111111111111");

        let expiry = ExpiryDate::parse("\t07/2031 ").unwrap();
        assert_eq!(expiry.as_str(), "07/2031");
    }

    #[test]
    fn test_inner_whitespace_is_rejected() {
        assert!(matches!(
            CardNumber::parse("4111 1111 1111 1111"),
            Err(ValidationError::NotDigits { .. })
        ));
        assert!(ExpiryDate::parse("07 /2031").is_err());
    }
}
