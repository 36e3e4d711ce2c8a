//! Application layer orchestrating domain operations.
//!
//! Services combine repository calls with the business rules that do not
//! belong in handlers: code generation and collision retry, redirect URL
//! rewriting, and password hashing at the signup boundary.

pub mod services;
