//! HTTP layer for request/response handling.
//!
//! Translates HTTP requests into service operations and formats responses
//! according to the API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Request/response projections
//! - [`handlers`] - Axum request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
