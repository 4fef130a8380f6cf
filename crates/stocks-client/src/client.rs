//! HTTP client for the stocks API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the stocks API.
#[derive(Debug, Clone)]
pub struct StocksClient {
    client: Client,
    base_url: String,
}

impl StocksClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the stock collection.
    #[must_use]
    pub fn stocks_url(&self) -> String {
        format!("{}/api/stock", self.base_url)
    }

    /// URL of a single stock.
    #[must_use]
    pub fn stock_url(&self, id: i64) -> String {
        format!("{}/api/stock/{}", self.base_url, id)
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Stocks
    // ========================================================================

    /// Lists all stocks.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_stocks(&self) -> Result<Vec<Stock>, Error> {
        let resp = self.client.get(self.stocks_url()).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a stock.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_stock(&self, stock: &Stock) -> Result<MessageResponse, Error> {
        let resp = self
            .client
            .post(self.stocks_url())
            .json(stock)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Gets a stock by id.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no stock has this id.
    pub async fn get_stock(&self, id: i64) -> Result<Stock, Error> {
        let resp = self.client.get(self.stock_url(id)).send().await?;
        self.handle_response(resp).await
    }

    /// Updates the fields set in `patch`.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_stock(&self, id: i64, patch: &StockPatch) -> Result<MessageResponse, Error> {
        let resp = self
            .client
            .put(self.stock_url(id))
            .json(patch)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Deletes a stock.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete_stock(&self, id: i64) -> Result<MessageResponse, Error> {
        let resp = self.client.delete(self.stock_url(id)).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.as_u16() == 404 {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::NotFound(error_message(&text)))
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&text),
            })
        }
    }
}

/// Extracts the `error` field from a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}
