//! Unit tests for client module.

use super::*;

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_config_custom() {
    let config = ClientConfig {
        base_url: "http://api.example.com:9000".to_string(),
        timeout: Duration::from_secs(60),
    };

    assert_eq!(config.base_url, "http://api.example.com:9000");
    assert_eq!(config.timeout, Duration::from_secs(60));
}

// ============================================================================
// StocksClient Creation Tests
// ============================================================================

#[test]
fn test_stocks_client_new() {
    let client = StocksClient::new(ClientConfig::default());

    assert!(client.is_ok());
}

#[test]
fn test_stocks_client_base_url_trimmed() {
    let client = StocksClient::with_base_url("http://localhost:8080/").unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

// ============================================================================
// URL Building Tests
// ============================================================================

#[test]
fn test_stocks_url() {
    let client = StocksClient::with_base_url("http://localhost:3000").unwrap();

    assert_eq!(client.stocks_url(), "http://localhost:3000/api/stock");
}

#[test]
fn test_stock_url() {
    let client = StocksClient::with_base_url("http://localhost:3000").unwrap();

    assert_eq!(client.stock_url(17), "http://localhost:3000/api/stock/17");
}

// ============================================================================
// Error Body Tests
// ============================================================================

#[test]
fn test_error_message_from_json_body() {
    assert_eq!(
        error_message(r#"{"error":"stock not found: 4"}"#),
        "stock not found: 4"
    );
}

#[test]
fn test_error_message_from_plain_body() {
    assert_eq!(error_message("Method Not Allowed"), "Method Not Allowed");
}
