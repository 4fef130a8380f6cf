//! Unit tests for types module.

use super::*;

// ============================================================================
// Stock Tests
// ============================================================================

#[test]
fn test_stock_deserialization() {
    let json = r#"{"id":1,"name":"Acme","price":10.5,"company":"Acme Corp"}"#;
    let stock: Stock = serde_json::from_str(json).unwrap();

    assert_eq!(stock.id, 1);
    assert_eq!(stock.name, "Acme");
    assert_eq!(stock.price, 10.5);
    assert_eq!(stock.company, "Acme Corp");
}

#[test]
fn test_stock_list_deserialization_empty() {
    let stocks: Vec<Stock> = serde_json::from_str("[]").unwrap();
    assert!(stocks.is_empty());
}

// ============================================================================
// StockPatch Tests
// ============================================================================

#[test]
fn test_patch_price_only_serialization() {
    let json = serde_json::to_string(&StockPatch::price(12.0)).unwrap();
    assert_eq!(json, r#"{"price":12.0}"#);
}

#[test]
fn test_patch_name_only_serialization() {
    let json = serde_json::to_string(&StockPatch::name("Beta")).unwrap();
    assert_eq!(json, r#"{"name":"Beta"}"#);
}

#[test]
fn test_patch_company_only_serialization() {
    let json = serde_json::to_string(&StockPatch::company("Beta Inc")).unwrap();
    assert_eq!(json, r#"{"company":"Beta Inc"}"#);
}

#[test]
fn test_empty_patch_serialization() {
    let json = serde_json::to_string(&StockPatch::default()).unwrap();
    assert_eq!(json, "{}");
}

// ============================================================================
// Response Tests
// ============================================================================

#[test]
fn test_message_response_deserialization() {
    let response: MessageResponse = serde_json::from_str(r#"{"message":"successful"}"#).unwrap();
    assert_eq!(response.message, "successful");
}

#[test]
fn test_error_response_deserialization() {
    let response: ErrorResponse = serde_json::from_str(r#"{"error":"stock not found: 9"}"#).unwrap();
    assert_eq!(response.error, "stock not found: 9");
}

#[test]
fn test_health_response_deserialization() {
    let response: HealthResponse =
        serde_json::from_str(r#"{"status":"ok","version":"0.1.0"}"#).unwrap();
    assert_eq!(response.status, "ok");
    assert_eq!(response.version, "0.1.0");
}
