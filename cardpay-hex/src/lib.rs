//! # Cardpay Hex
//!
//! Application service layer and HTTP adapter for the cardpay service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (anti-corruption boundary over the gateway)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `G: PaymentGateway`, allowing different PSP
//! adapters (or test doubles) to be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PaymentService;
