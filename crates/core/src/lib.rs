//! Core functionality shared by the Signet workspace.
//!
//! This crate provides configuration loading, structured logging setup and
//! the error type used by the ambient layers around the signing core.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, KeyStoreConfig, LoggingConfig};
pub use error::{CoreError, Result};
