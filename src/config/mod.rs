//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig) and loading
//! - [`accounts`]: Seed accounts, account defaults and the home directory policy
//! - [`validation`]: Startup checks that collect every problem at once

mod accounts;
mod types;
mod validation;

pub use accounts::{AccountDefaults, HomeDirectoryPolicy, SeedAccount};
pub use types::{Config, ConfigError, ServerConfig};
pub use validation::{ValidationError, validate};
