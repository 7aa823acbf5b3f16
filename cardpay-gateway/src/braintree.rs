//! Braintree GraphQL adapter.
//!
//! Every outbound call goes through [`BraintreeGateway::perform_query`], which
//! classifies transport and envelope failures and emits exactly one log
//! record per call. Operation-specific parsing happens on the returned
//! envelope.

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{error, info};

use cardpay_types::{GatewayError, PaymentGateway, SaleResult};

use crate::config::{BraintreeConfig, ConfigError};

const VERSION_HEADER: &str = "Braintree-Version";

pub(crate) const CONNECTION_ISSUES: &str = "Connection issues";
pub(crate) const UNEXPECTED_FORMAT: &str = "Unexpected data format";
pub(crate) const MISBEHAVIOR: &str = "Braintree misbehavior";
pub(crate) const DATA_MISSING: &str = "Braintree misbehavior: data is missing";

const TOKENIZE_CREDIT_CARD: &str = r#"
mutation tokenizeCreditCard($input: TokenizeCreditCardInput!) {
  tokenizeCreditCard(input: $input) { paymentMethod { id } }
}
"#;

const CHARGE_PAYMENT_METHOD: &str = r#"
mutation chargePaymentMethod($input: ChargePaymentMethodInput!) {
  chargePaymentMethod(input: $input) {
    transaction {
      id
      amount { value currencyIsoCode }
      status
    }
  }
}
"#;

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

/// Integration with the Braintree GraphQL API.
///
/// Holds only static configuration and a pooled HTTP client, so one instance
/// is shared by all callers.
#[derive(Debug, Clone)]
pub struct BraintreeGateway {
    config: BraintreeConfig,
    http: Client,
}

impl BraintreeGateway {
    /// Creates a gateway whose HTTP client enforces the configured timeout.
    pub fn new(config: BraintreeConfig) -> Result<Self, ConfigError> {
        Url::parse(&config.api_url).map_err(|e| ConfigError::InvalidUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;

        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Sends one GraphQL document and returns the parsed response envelope.
    ///
    /// The envelope is guaranteed to be a JSON object holding `data`,
    /// `errors`, or both.
    pub(crate) async fn perform_query(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<Map<String, Value>, GatewayError> {
        let url = self.config.api_url.as_str();

        let response = match self
            .http
            .post(url)
            .header(
                header::AUTHORIZATION,
                format!("Basic {}", self.config.api_key),
            )
            .header(VERSION_HEADER, &self.config.api_version)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(url, error = %e, "Connection issues for request to Braintree API");
                return Err(GatewayError::Connectivity(CONNECTION_ISSUES.into()));
            }
        };

        let status_code = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                error!(url, status_code, error = %e, "Connection issues for request to Braintree API");
                return Err(GatewayError::Connectivity(CONNECTION_ISSUES.into()));
            }
        };

        let envelope = match serde_json::from_slice::<Value>(&body) {
            Ok(Value::Object(envelope))
                if envelope.contains_key("data") || envelope.contains_key("errors") =>
            {
                envelope
            }
            Ok(_) => {
                error!(url, status_code, "Response from Braintree missing informative keys");
                return Err(GatewayError::Protocol(MISBEHAVIOR.into()));
            }
            Err(e) => {
                error!(url, status_code, error = %e, "Could not extract json data from Braintree response");
                return Err(GatewayError::Protocol(UNEXPECTED_FORMAT.into()));
            }
        };

        let request_id = envelope
            .get("extensions")
            .and_then(|ext| ext.get("requestId"))
            .and_then(Value::as_str);
        info!(url, status_code, request_id, "Request to Braintree executed");

        Ok(envelope)
    }
}

/// Pulls the result of `operation` out of a response envelope.
///
/// An absent or empty result means the PSP refused the operation: the
/// messages from `errors` are joined with a single space. When there are no
/// messages to report either, the response is treated as missing data.
pub(crate) fn extract_query_result(
    mut envelope: Map<String, Value>,
    operation: &str,
) -> Result<Value, GatewayError> {
    let result = envelope
        .get_mut("data")
        .and_then(|data| data.get_mut(operation))
        .map(Value::take)
        .filter(|value| !is_empty(value));
    if let Some(result) = result {
        return Ok(result);
    }

    let messages: Vec<&str> = envelope
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.get("message").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if messages.is_empty() {
        return Err(GatewayError::DataMissing(DATA_MISSING.into()));
    }
    Err(GatewayError::Business(messages.join(" ")))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

// Scalars keep their JSON text; null and containers count as absent.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[async_trait]
impl PaymentGateway for BraintreeGateway {
    async fn tokenize(
        &self,
        card_number: &str,
        expiry_date: &str,
    ) -> Result<String, GatewayError> {
        // Callers sanitize the date; a value without `/` goes out as-is and the PSP rejects it.
        let (month, year) = expiry_date.split_once('/').unwrap_or((expiry_date, ""));
        let variables = json!({
            "input": {
                "creditCard": {
                    "number": card_number,
                    "expirationMonth": month,
                    "expirationYear": year,
                }
            }
        });

        let envelope = self.perform_query(TOKENIZE_CREDIT_CARD, variables).await?;
        let result = extract_query_result(envelope, "tokenizeCreditCard")?;

        result
            .get("paymentMethod")
            .and_then(|method| method.get("id"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| GatewayError::DataMissing(DATA_MISSING.into()))
    }

    async fn charge(&self, token: &str, amount: Decimal) -> Result<SaleResult, GatewayError> {
        let variables = json!({
            "input": {
                "paymentMethodId": token,
                "transaction": { "amount": amount.to_string() },
            }
        });

        let envelope = self.perform_query(CHARGE_PAYMENT_METHOD, variables).await?;
        let result = extract_query_result(envelope, "chargePaymentMethod")?;

        let transaction = result
            .get("transaction")
            .filter(|tx| tx.is_object())
            .ok_or_else(|| GatewayError::DataMissing(DATA_MISSING.into()))?;
        let field = |name: &str| transaction.get(name).and_then(scalar_to_string);

        Ok(SaleResult {
            id: field("id"),
            status: field("status"),
        })
    }
}
