//! API routes module.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::{ApiDoc, docs_router};
pub use routes::create_router;
