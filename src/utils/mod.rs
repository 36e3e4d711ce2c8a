//! Utility functions for code generation, URL rewriting, and password hashing.
//!
//! - [`code_generator`] - Short code generation
//! - [`redirect_url`] - Tracking-parameter rewriting of destination URLs
//! - [`password`] - Password hashing at the signup boundary

pub mod code_generator;
pub mod password;
pub mod redirect_url;
