//! Request and response types for the stocks API.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// A stock record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Caller-supplied identifier.
    pub id: i64,
    /// Stock name.
    pub name: String,
    /// Price in dollars.
    pub price: f64,
    /// Issuing company.
    pub company: String,
}

/// Partial update body. Unset fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockPatch {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl StockPatch {
    /// Patch that only changes the name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Patch that only changes the price.
    #[must_use]
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// Patch that only changes the company.
    #[must_use]
    pub fn company(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            ..Default::default()
        }
    }
}

/// Acknowledgement for writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// `"successful"` on success.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
