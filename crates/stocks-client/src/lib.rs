//! HTTP client library for the Stocks API.
//!
//! This crate provides a typed HTTP client for the stocks backend. It covers
//! the five `/api/stock` routes and the health check.
//!
//! # Example
//!
//! ```no_run
//! use stocks_client::{ClientConfig, Stock, StocksClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stocks_client::Error> {
//!     let client = StocksClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     client
//!         .create_stock(&Stock {
//!             id: 1,
//!             name: "Acme".into(),
//!             price: 10.5,
//!             company: "Acme Corp".into(),
//!         })
//!         .await?;
//!
//!     let stock = client.get_stock(1).await?;
//!     println!("{} trades at {}", stock.name, stock.price);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, StocksClient};
pub use error::Error;
pub use types::*;
