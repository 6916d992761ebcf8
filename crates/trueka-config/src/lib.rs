//! # trueka-config
//!
//! Configuration system for Trueka. Reads from `trueka.toml`, environment
//! variables, and CLI overrides, in that precedence order.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ConfigWarning, LoggingConfig, StoreConfig, TruekaConfig, WarningSeverity};
