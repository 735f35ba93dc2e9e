//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - HTTP: REST API the overlay calls into
//! - Host commands: outbound ports recorded for the overlay to replay
//! - I18n: JSON translation catalog
//! - State: Shared application state

pub mod config;
pub mod host_commands;
pub mod http;
pub mod i18n;
pub mod state;
