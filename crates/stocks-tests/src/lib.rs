//! Integration tests for the Stocks API.
//!
//! These tests require the API server to be running against a database that
//! has the `stocks` table. Configure the server URL via the `API_BASE_URL`
//! environment variable (default: `http://localhost:8080`).

use std::time::Duration;
use stocks_client::{ClientConfig, Stock, StocksClient};

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<StocksClient, stocks_client::Error> {
    StocksClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}

/// Generates a unique stock id to avoid conflicts between tests.
///
/// Ids are drawn from a high range seeded by the clock so repeated runs
/// against the same table do not collide.
#[must_use]
pub fn unique_id() -> i64 {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicI64 = AtomicI64::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as i64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    1_000_000_000 + (ts % 1_000_000_000) * 1_000 + counter
}

/// Builds a stock fixture with the given id.
#[must_use]
pub fn sample_stock(id: i64) -> Stock {
    Stock {
        id,
        name: "Acme".to_string(),
        price: 10.5,
        company: "Acme Corp".to_string(),
    }
}
