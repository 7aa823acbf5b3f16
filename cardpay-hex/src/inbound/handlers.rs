//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cardpay_types::{
    AppError, PaymentGateway, SaleRequest, SaleResponse, ServiceError, TokenizeRequest,
    TokenizeResponse, ValidationError,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<G: PaymentGateway> {
    pub service: PaymentService<G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(err.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Tokenize card details.
#[tracing::instrument(skip_all)]
pub async fn tokenize<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    payload: Result<Json<TokenizeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let (card_number, expiry_date) = req.validate()?;

    let token = state
        .service
        .tokenize(card_number.as_str(), expiry_date.as_str())
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Tokenize rejected"))?;

    Ok(Json(TokenizeResponse { token }))
}

/// Charge a tokenized card.
#[tracing::instrument(skip_all)]
pub async fn sale<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    payload: Result<Json<SaleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let (token, amount) = req.validate()?;

    let sale = state
        .service
        .sale(&token, amount.value())
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Sale rejected"))?;

    Ok(Json(SaleResponse::from(sale)))
}
