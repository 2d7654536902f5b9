//! Storefront Kernel Library
//!
//! Listing filter/sort canonicalization, the hosted catalog client, and the
//! HTTP surface. The main entry point for running the server is the
//! `storefront` binary.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod storefront;

pub use config::Config;
pub use state::AppState;
