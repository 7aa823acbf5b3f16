//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that validates input and drives the payment service.

mod handlers;
mod server;

pub use handlers::ApiError;
pub use server::HttpServer;
