//! # Cardpay Types
//!
//! Domain types and port traits for the card tokenization and sale service.
//! This crate has ZERO IO dependencies - only data structures, input rules,
//! error types and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (card details, amounts, sale results)
//! - `ports/` - Trait definitions that PSP adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Gateway, service and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CardNumber, ExpiryDate, SaleResult, TransactionAmount};
pub use dto::*;
pub use error::{AppError, GatewayError, ServiceError, ValidationError};
pub use ports::PaymentGateway;
pub use rust_decimal::Decimal;
