//! HTTP layer for the Guftagu web front end.
//!
//! Serves the landing page, static images, and a health endpoint.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
