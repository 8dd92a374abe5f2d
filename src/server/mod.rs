//! Server module for building the order intake HTTP server
//!
//! This module provides a `ServerBuilder` that wires the order pipeline into
//! an axum router with:
//! - `POST /order` for order submission
//! - `GET /health` for store reachability
//! - permissive CORS headers and preflight handling on every path

pub mod builder;
pub mod cors;
pub mod handlers;

pub use builder::ServerBuilder;
pub use handlers::AppState;
