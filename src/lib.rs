//! # Stocks API - REST API Server
//!
//! A CRUD REST API over a single PostgreSQL table, `stocks`. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling and
//! [sqlx](https://crates.io/crates/sqlx) for database access, with OpenAPI
//! documentation generated by [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Request Flow
//!
//! ```text
//! route → validate → build statement → execute → map rows → respond
//! ```
//!
//! Statement construction is a pure step: [`db::queries`] returns a
//! [`db::Statement`] (SQL text with `$n` placeholders plus the ordered values)
//! and never touches the pool. Handlers then bind and execute it.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers, router and OpenAPI document |
//! | [`config`] | Environment and TOML configuration |
//! | [`db`] | Connection pool, statement builder, stock statements |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Stock record and request/response DTOs |
//! | [`state`] | Application state handed to handlers |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check (pings the database) |
//! | GET | `/api/stock` | List all stocks |
//! | POST | `/api/stock` | Create a stock |
//! | GET | `/api/stock/{id}` | Get a stock |
//! | PUT | `/api/stock/{id}` | Update the supplied fields of a stock |
//! | DELETE | `/api/stock/{id}` | Delete a stock |
//! | GET | `/api-docs/openapi.json` | OpenAPI document |
//!
//! ## Database
//!
//! The table is a prerequisite; the service never creates or migrates it:
//!
//! ```sql
//! CREATE TABLE stocks (
//!     stockid BIGINT PRIMARY KEY,
//!     name    TEXT NOT NULL,
//!     price   DOUBLE PRECISION NOT NULL,
//!     company TEXT NOT NULL
//! );
//! ```
//!
//! ## Example Usage
//!
//! ```bash
//! # Settings may also live in a .env file
//! DATABASE_URL=postgres://localhost/stocks PORT=8080 cargo run
//!
//! curl -X POST http://localhost:8080/api/stock \
//!   -H "Content-Type: application/json" \
//!   -d '{"id": 1, "name": "Acme", "price": 10.5, "company": "Acme Corp"}'
//!
//! curl -X PUT http://localhost:8080/api/stock/1 \
//!   -H "Content-Type: application/json" \
//!   -d '{"price": 12}'
//!
//! curl http://localhost:8080/api/stock/1
//! curl -X DELETE http://localhost:8080/api/stock/1
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
