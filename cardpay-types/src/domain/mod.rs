//! Domain models for the cardpay service.

pub mod amount;
pub mod card;
pub mod sale;

pub use amount::TransactionAmount;
pub use card::{CardNumber, ExpiryDate};
pub use sale::SaleResult;
