//! Request and response models for the REST API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Acknowledgement message returned by every successful write.
pub const SUCCESS_MESSAGE: &str = "successful";

/// A row of the `stocks` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Stock {
    /// Caller-supplied identifier, stored as `stockid`.
    #[sqlx(rename = "stockid")]
    pub id: i64,
    /// Stock name.
    pub name: String,
    /// Price in dollars.
    pub price: f64,
    /// Issuing company.
    pub company: String,
}

/// Partial update body for a stock.
///
/// Empty strings and a zero price are treated the same as absent fields,
/// so `{"name": "", "price": 0}` sets nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StockPatch {
    /// New name.
    pub name: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New company.
    pub company: Option<String>,
}

impl StockPatch {
    /// Name to write, if one was supplied and is non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Price to write, if one was supplied and is non-zero.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.price.filter(|price| *price != 0.0)
    }

    /// Company to write, if one was supplied and is non-empty.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref().filter(|company| !company.is_empty())
    }

    /// Returns true when no field would overwrite a column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.price().is_none() && self.company().is_none()
    }
}

/// Acknowledgement for create, update and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Always `"successful"`.
    pub message: String,
}

impl MessageResponse {
    /// The acknowledgement sent after a write statement executes.
    #[must_use]
    pub fn successful() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_json_shape() {
        let stock = Stock {
            id: 1,
            name: "Acme".to_string(),
            price: 10.5,
            company: "Acme Corp".to_string(),
        };

        let json = serde_json::to_value(&stock).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Acme", "price": 10.5, "company": "Acme Corp"})
        );
    }

    #[test]
    fn test_empty_stock_list_is_array() {
        let json = serde_json::to_string(&Vec::<Stock>::new()).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_stock_requires_all_fields() {
        let result = serde_json::from_str::<Stock>(r#"{"id": 1, "name": "Acme"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_stock_rejects_non_integer_id() {
        let result = serde_json::from_str::<Stock>(
            r#"{"id": "one", "name": "Acme", "price": 1.0, "company": "Acme Corp"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_partial_body() {
        let patch: StockPatch = serde_json::from_str(r#"{"price": 12}"#).unwrap();
        assert_eq!(patch.price(), Some(12.0));
        assert_eq!(patch.name(), None);
        assert_eq!(patch.company(), None);
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_ignores_id_field() {
        let patch: StockPatch = serde_json::from_str(r#"{"id": 99, "name": "Beta"}"#).unwrap();
        assert_eq!(patch.name(), Some("Beta"));
    }

    #[test]
    fn test_patch_default_values_are_unset() {
        let patch: StockPatch =
            serde_json::from_str(r#"{"name": "", "price": 0, "company": ""}"#).unwrap();
        assert!(patch.is_empty());
        assert!(StockPatch::default().is_empty());
    }

    #[test]
    fn test_message_response_serialization() {
        let json = serde_json::to_string(&MessageResponse::successful()).unwrap();
        assert_eq!(json, r#"{"message":"successful"}"#);
    }
}
