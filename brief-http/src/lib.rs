//! HTTP transport for the brief generator backend.

mod client;
pub mod config;
mod wire;

pub use client::HttpBackend;
pub use config::ClientConfig;
