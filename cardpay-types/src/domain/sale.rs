//! Sale result returned by a PSP.

use serde::{Deserialize, Serialize};

/// PSP transaction record produced by a successful sale request.
///
/// Both fields are optional: a provider may omit them and the call is still
/// reported as successful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleResult {
    pub id: Option<String>,
    pub status: Option<String>,
}

impl SaleResult {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            status: Some(status.into()),
        }
    }
}
