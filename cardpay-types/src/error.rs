//! Error types for the cardpay service.

/// Input validation errors raised at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: Ensure this field has at least {min} characters.")]
    TooShort { field: &'static str, min: usize },

    #[error("{field}: Ensure this field has no more than {max} characters.")]
    TooLong { field: &'static str, max: usize },

    #[error("{field}: This field should contain only digits.")]
    NotDigits { field: &'static str },

    #[error("{field}: This value does not match the required pattern.")]
    Pattern { field: &'static str },

    #[error("{field}: This field may not be blank.")]
    Blank { field: &'static str },

    #[error("{field}: A valid number is required.")]
    InvalidNumber { field: &'static str },

    #[error("{field}: Ensure this value is greater than or equal to 0.")]
    Negative { field: &'static str },

    #[error("transaction_amount: Ensure that there are no more than {max} digits in total.")]
    MaxDigits { max: u32 },

    #[error("transaction_amount: Ensure that there are no more than {max} decimal places.")]
    MaxDecimalPlaces { max: u32 },

    #[error(
        "transaction_amount: Ensure that there are no more than {max} digits before the decimal point."
    )]
    MaxWholeDigits { max: u32 },
}

/// Classified failure of a payment gateway call.
///
/// Every variant carries the human-readable message that is surfaced to
/// callers; the variant itself tells them what kind of failure occurred.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The PSP could not be reached (connection error or timeout).
    #[error("{0}")]
    Connectivity(String),

    /// The PSP answered with something that is not a valid protocol envelope.
    #[error("{0}")]
    Protocol(String),

    /// The PSP rejected the request and reported why.
    #[error("{0}")]
    Business(String),

    /// A success-shaped response lacks a field the operation needs.
    #[error("{0}")]
    DataMissing(String),
}

impl GatewayError {
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Connectivity(msg)
            | GatewayError::Protocol(msg)
            | GatewayError::Business(msg)
            | GatewayError::DataMissing(msg) => msg,
        }
    }
}

/// Caller-facing error of the payment service.
///
/// Wraps a [`GatewayError`] without altering its message, so callers never
/// depend on a specific gateway's error type for anything but the kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct ServiceError(#[from] GatewayError);

impl ServiceError {
    /// Returns the classified gateway failure behind this error.
    pub fn kind(&self) -> &GatewayError {
        &self.0
    }

    pub fn message(&self) -> &str {
        self.0.message()
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

// Any PSP failure is a rejection of the client's request, carrying only the message.
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::BadRequest(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_keeps_gateway_message() {
        let err = ServiceError::from(GatewayError::Business("m1 m2".into()));
        assert_eq!(err.to_string(), "m1 m2");
        assert!(matches!(err.kind(), GatewayError::Business(_)));
    }

    #[test]
    fn test_service_error_maps_to_bad_request() {
        let err = ServiceError::from(GatewayError::Connectivity("Connection issues".into()));
        let AppError::BadRequest(msg) = AppError::from(err);
        assert_eq!(msg, "Connection issues");
    }

    #[test]
    fn test_validation_error_message_names_field() {
        let err = ValidationError::Pattern {
            field: "expiry_date",
        };
        assert_eq!(
            err.to_string(),
            "expiry_date: This value does not match the required pattern."
        );
    }
}
